//! Host-side dispatcher between callers and registered modules

use crate::AsyncRuntime;
use crate::panic_guard::catch_panic;
use krbridge_core::{ModuleError, ModuleRegistry, ModuleResult, RenderCallback, Value};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::task::JoinHandle;

/// Routes generic module calls according to their `sync` flag
///
/// Synchronous calls run on the caller's thread and return the module's
/// value. Asynchronous calls run on the runtime's blocking pool and return
/// [`Value::Null`] immediately; results reach the caller through the module's
/// use of the callback.
pub struct ModuleBridge {
    registry: Arc<ModuleRegistry>,
    runtime: Arc<AsyncRuntime>,
    call_counter: AtomicU64,
}

impl ModuleBridge {
    pub fn new(registry: Arc<ModuleRegistry>, runtime: Arc<AsyncRuntime>) -> Self {
        Self {
            registry,
            runtime,
            call_counter: AtomicU64::new(0),
        }
    }

    pub fn registry(&self) -> &Arc<ModuleRegistry> {
        &self.registry
    }

    pub fn runtime(&self) -> &Arc<AsyncRuntime> {
        &self.runtime
    }

    /// Get the next call ID
    pub fn next_call_id(&self) -> u64 {
        self.call_counter.fetch_add(1, Ordering::SeqCst)
    }

    /// Dispatch a call to `module`
    pub fn call_method(
        &self,
        module: &str,
        sync: bool,
        method: &str,
        params: Value,
        callback: Option<RenderCallback>,
    ) -> ModuleResult<Value> {
        if sync {
            self.call_sync(module, method, &params, callback.as_ref())
        } else {
            self.dispatch_async(module, method, params, callback)?;
            Ok(Value::Null)
        }
    }

    /// Run a call inline on the caller's thread
    pub fn call_sync(
        &self,
        module: &str,
        method: &str,
        params: &Value,
        callback: Option<&RenderCallback>,
    ) -> ModuleResult<Value> {
        self.ensure_running()?;
        let target = self.registry.resolve(module, method)?;
        let call_id = self.next_call_id();
        let _span =
            tracing::trace_span!("module_call", call_id, module, method, sync = true).entered();

        catch_panic(
            module,
            method,
            AssertUnwindSafe(|| target.call_method(true, method, params, callback)),
        )
    }

    /// Run a call on the runtime's blocking pool
    ///
    /// Module resolution happens before spawning, so an unknown module or
    /// empty method is reported to the caller rather than lost in the task.
    pub fn dispatch_async(
        &self,
        module: &str,
        method: &str,
        params: Value,
        callback: Option<RenderCallback>,
    ) -> ModuleResult<JoinHandle<ModuleResult<Value>>> {
        self.ensure_running()?;
        let target = self.registry.resolve(module, method)?;
        let call_id = self.next_call_id();
        let span = tracing::trace_span!("module_call", call_id, module, method, sync = false);

        let module = module.to_string();
        let method = method.to_string();
        Ok(self.runtime.spawn_blocking(move || {
            let _span = span.entered();
            catch_panic(
                &module,
                &method,
                AssertUnwindSafe(|| target.call_method(false, &method, &params, callback.as_ref())),
            )
        }))
    }

    fn ensure_running(&self) -> ModuleResult<()> {
        if self.runtime.is_shutting_down() {
            return Err(ModuleError::ShuttingDown);
        }
        Ok(())
    }
}
