//! # krbridge
//!
//! Native module layer for a cross-platform UI render engine.
//!
//! The business layer calls named modules through one generic entry point,
//! `call_method(sync, method, params, callback)`. krbridge provides:
//! - The module export contract and a name-based registry
//! - A dispatcher that runs sync calls inline and async calls on a runtime
//! - `KRLogModule`, forwarding tagged log lines to the platform log sink
//!
//! ## Quick Start
//!
//! ```no_run
//! use krbridge::prelude::*;
//!
//! extern "C" fn host_log(
//!     _level: u8,
//!     _tag: *const std::ffi::c_char,
//!     _message: *const u8,
//!     _message_len: usize,
//! ) {
//!     // Forward to the platform logger
//! }
//!
//! LogCallbackManager::global().set_callback(Some(host_log));
//!
//! let host = RenderHost::new(BridgeConfig::default())?;
//! host.call_method(
//!     "KRLogModule",
//!     true,
//!     "logInfo",
//!     Value::from_json_str(r#"{"message": "[Home] page shown"}"#),
//!     None,
//! )?;
//! host.shutdown()?;
//! # Ok::<(), ModuleError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`krbridge_core`] - Module contract, payload values, registry, config
//! - [`krbridge_logging`] - Log sinks and the host callback bridge
//! - [`krbridge_modules`] - Built-in modules
//! - [`krbridge_runtime`] - Dispatcher and async runtime

mod host;

pub use host::{RenderHost, SINK_CALLBACK, SINK_TRACING};

// Re-export core types
pub use krbridge_core::{
    BridgeConfig, LogLevel, ModuleError, ModuleExport, ModuleRegistry, ModuleResult,
    RenderCallback, Value,
};

// Re-export logging types
pub use krbridge_logging::{
    CallbackLoggingLayer, CallbackSink, LogCallback, LogCallbackManager, LogRecord, LogSink,
    MemorySink, NoopSink, TracingSink, init_logging, set_log_level,
};

// Re-export built-in modules
pub use krbridge_modules::{LOG_MODULE_NAME, LogModule, LogModuleSettings, find_tag};

// Re-export dispatch types
pub use krbridge_runtime::{AsyncRuntime, ModuleBridge, RuntimeConfig};

// Re-export common dependencies that module authors need
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use krbridge::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        BridgeConfig, LogCallbackManager, LogLevel, LogSink, ModuleError, ModuleExport,
        ModuleRegistry, ModuleResult, RenderCallback, RenderHost, Value,
    };
}
