//! krbridge-logging - Platform log sink bridge
//!
//! This crate provides:
//! - [`LogSink`] trait and its sinks ([`CallbackSink`], [`TracingSink`], [`MemorySink`])
//! - [`LogCallbackManager`] holding the host's [`LogCallback`]
//! - [`CallbackLoggingLayer`] tracing layer that forwards events to the host
//! - Dynamic log level filtering via [`set_log_level`]

mod callback;
mod layer;
mod reload;
mod sink;

pub use callback::{LogCallback, LogCallbackManager};
pub use krbridge_core::LogLevel;
pub use layer::{CallbackLoggingLayer, TAG_FIELD, init_logging, set_log_level};
pub use reload::ReloadHandle;
pub use sink::{CallbackSink, LOG_TARGET, LogRecord, LogSink, MemorySink, NoopSink, TracingSink};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        CallbackLoggingLayer, CallbackSink, LogCallback, LogCallbackManager, LogLevel, LogSink,
        TracingSink, init_logging,
    };
}

#[cfg(test)]
mod test_support {
    use std::sync::Mutex;

    // Serializes tests that touch the global callback manager
    pub static GLOBAL_MANAGER_LOCK: Mutex<()> = Mutex::new(());

    static CAPTURED: Mutex<Vec<(u8, String, String)>> = Mutex::new(Vec::new());

    pub extern "C" fn capture_callback(
        level: u8,
        tag: *const std::ffi::c_char,
        message: *const u8,
        message_len: usize,
    ) {
        let tag = unsafe { std::ffi::CStr::from_ptr(tag) }
            .to_string_lossy()
            .into_owned();
        let message = unsafe { std::slice::from_raw_parts(message, message_len) };
        let message = String::from_utf8_lossy(message).into_owned();
        CAPTURED.lock().unwrap().push((level, tag, message));
    }

    pub fn take_captured() -> Vec<(u8, String, String)> {
        std::mem::take(&mut *CAPTURED.lock().unwrap())
    }
}
