//! Log sinks: where module log lines end up

use crate::callback::LogCallbackManager;
use krbridge_core::LogLevel;
use parking_lot::Mutex;

/// Tracing target used for lines emitted by [`TracingSink`]
pub const LOG_TARGET: &str = "krbridge::log";

/// Destination for tagged log lines
pub trait LogSink: Send + Sync {
    fn log(&self, level: LogLevel, tag: &str, message: &str);
}

/// Sink that forwards lines straight to the host log callback
pub struct CallbackSink {
    manager: &'static LogCallbackManager,
}

impl CallbackSink {
    /// Create a sink bound to the global callback manager
    pub fn new() -> Self {
        Self {
            manager: LogCallbackManager::global(),
        }
    }

    /// Create a sink bound to a specific callback manager
    pub fn with_manager(manager: &'static LogCallbackManager) -> Self {
        Self { manager }
    }
}

impl Default for CallbackSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogSink for CallbackSink {
    fn log(&self, level: LogLevel, tag: &str, message: &str) {
        self.manager.log(level, tag, message);
    }
}

/// Sink that emits lines as `tracing` events carrying a `tag` field
///
/// With [`crate::init_logging`] installed, these events reach the host
/// callback through [`crate::CallbackLoggingLayer`]; otherwise they go to
/// whatever subscriber the host configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: LogLevel, tag: &str, message: &str) {
        match level {
            LogLevel::Trace => tracing::trace!(target: LOG_TARGET, tag = tag, "{}", message),
            LogLevel::Debug => tracing::debug!(target: LOG_TARGET, tag = tag, "{}", message),
            LogLevel::Info => tracing::info!(target: LOG_TARGET, tag = tag, "{}", message),
            LogLevel::Warn => tracing::warn!(target: LOG_TARGET, tag = tag, "{}", message),
            LogLevel::Error => tracing::error!(target: LOG_TARGET, tag = tag, "{}", message),
            LogLevel::Off => {}
        }
    }
}

/// Sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl LogSink for NoopSink {
    #[inline]
    fn log(&self, _level: LogLevel, _tag: &str, _message: &str) {}
}

/// A line captured by [`MemorySink`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: LogLevel,
    pub tag: String,
    pub message: String,
}

/// Sink that keeps lines in memory, for hosts that poll and for tests
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every line captured so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Remove and return every line captured so far
    pub fn drain(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl LogSink for MemorySink {
    fn log(&self, level: LogLevel, tag: &str, message: &str) {
        self.records.lock().push(LogRecord {
            level,
            tag: tag.to_string(),
            message: message.to_string(),
        });
    }
}
