//! The platform log sink, as seen from Rust

use krbridge_core::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::ffi::{CString, c_char};
use std::sync::atomic::{AtomicU8, Ordering};

/// Platform log function installed by the host
///
/// Called with the numeric [`LogLevel`], a NUL-terminated tag and the
/// message as UTF-8 bytes plus length. Both pointers are borrowed for the
/// duration of the call only; the host must copy what it keeps.
pub type LogCallback =
    extern "C" fn(level: u8, tag: *const c_char, message: *const u8, message_len: usize);

static GLOBAL: OnceCell<LogCallbackManager> = OnceCell::new();

/// Host log callback plus the minimum level forwarded to it
pub struct LogCallbackManager {
    callback: RwLock<Option<LogCallback>>,
    min_level: AtomicU8,
}

impl LogCallbackManager {
    /// Manager with no callback and an `Info` threshold
    pub fn new() -> Self {
        Self {
            callback: RwLock::new(None),
            min_level: AtomicU8::new(LogLevel::Info as u8),
        }
    }

    /// Process-wide manager shared by sinks and the tracing layer
    pub fn global() -> &'static LogCallbackManager {
        GLOBAL.get_or_init(LogCallbackManager::new)
    }

    pub fn set_callback(&self, callback: Option<LogCallback>) {
        *self.callback.write() = callback;
    }

    pub fn get_callback(&self) -> Option<LogCallback> {
        *self.callback.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.min_level.load(Ordering::Relaxed))
    }

    /// Whether a line at `level` would reach the host; `Off` never does
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Off && level >= self.level()
    }

    /// Hand one line to the host, if a callback is installed and `level` passes
    pub fn log(&self, level: LogLevel, tag: &str, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        let Some(callback) = self.get_callback() else {
            return;
        };

        let tag = c_tag(tag);
        callback(level as u8, tag.as_ptr(), message.as_ptr(), message.len());
    }
}

impl Default for LogCallbackManager {
    fn default() -> Self {
        Self::new()
    }
}

// A tag with an interior NUL is cut at the NUL rather than dropped
fn c_tag(tag: &str) -> CString {
    let visible = tag.split('\0').next().unwrap_or_default();
    CString::new(visible).unwrap_or_default()
}
