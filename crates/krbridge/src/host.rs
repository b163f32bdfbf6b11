//! Render host: registry, runtime and built-in modules wired from config

use krbridge_core::{
    BridgeConfig, LogLevel, ModuleError, ModuleExport, ModuleRegistry, ModuleResult,
    RenderCallback, Value,
};
use krbridge_logging::{CallbackSink, LogCallbackManager, LogSink, TracingSink};
use krbridge_modules::LogModule;
use krbridge_runtime::{AsyncRuntime, ModuleBridge, RuntimeConfig};
use std::sync::Arc;
use std::time::Duration;

/// `log_sink` value selecting the host callback sink
pub const SINK_CALLBACK: &str = "callback";
/// `log_sink` value selecting the tracing sink
pub const SINK_TRACING: &str = "tracing";

/// Owns the module registry and dispatcher for one render instance
///
/// The log level is process-wide: it lives in the global
/// [`LogCallbackManager`], so the last host created or reconfigured sets it
/// for every host.
pub struct RenderHost {
    bridge: ModuleBridge,
    config: BridgeConfig,
}

impl RenderHost {
    /// Build a host with the built-in modules registered
    pub fn new(config: BridgeConfig) -> ModuleResult<Self> {
        let log_level = LogLevel::from_name(&config.log_level).ok_or_else(|| {
            ModuleError::ConfigError(format!("unknown log level: {}", config.log_level))
        })?;
        let sink = sink_for(&config.log_sink)?;
        krbridge_logging::set_log_level(log_level);

        let runtime = Arc::new(AsyncRuntime::new(RuntimeConfig::from_bridge_config(&config))?);

        let registry = Arc::new(ModuleRegistry::new());
        registry.register(Arc::new(LogModule::from_config(&config, sink)))?;

        tracing::debug!(modules = ?registry.module_names(), "render host ready");

        Ok(Self {
            bridge: ModuleBridge::new(registry, runtime),
            config,
        })
    }

    /// Build a host from JSON configuration bytes (empty means defaults)
    pub fn from_json(config_json: &[u8]) -> ModuleResult<Self> {
        Self::new(BridgeConfig::from_json(config_json)?)
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Level currently forwarded to the host log callback, shared by all hosts
    pub fn log_level(&self) -> LogLevel {
        LogCallbackManager::global().level()
    }

    /// Change the process-wide level forwarded to the host log callback
    pub fn set_log_level(&self, level: LogLevel) {
        krbridge_logging::set_log_level(level);
    }

    pub fn registry(&self) -> &Arc<ModuleRegistry> {
        self.bridge.registry()
    }

    pub fn bridge(&self) -> &ModuleBridge {
        &self.bridge
    }

    /// Register an additional module
    pub fn register(&self, module: Arc<dyn ModuleExport>) -> ModuleResult<()> {
        self.registry().register(module)
    }

    /// Dispatch a call to a module by name
    pub fn call_method(
        &self,
        module: &str,
        sync: bool,
        method: &str,
        params: Value,
        callback: Option<RenderCallback>,
    ) -> ModuleResult<Value> {
        self.bridge
            .call_method(module, sync, method, params, callback)
    }

    /// Tear down every module and stop the runtime
    ///
    /// Safe to call from async code, where the runtime is released without
    /// waiting for in-flight calls.
    pub fn shutdown(&self) -> ModuleResult<()> {
        self.registry().destroy_all();
        self.bridge
            .runtime()
            .shutdown(Duration::from_millis(self.config.shutdown_timeout_ms))
    }
}

fn sink_for(name: &str) -> ModuleResult<Arc<dyn LogSink>> {
    match name {
        SINK_CALLBACK => Ok(Arc::new(CallbackSink::new())),
        SINK_TRACING => Ok(Arc::new(TracingSink)),
        other => Err(ModuleError::ConfigError(format!("unknown log sink: {}", other))),
    }
}
