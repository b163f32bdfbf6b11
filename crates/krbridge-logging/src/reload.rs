//! Runtime level changes for the subscriber installed by `init_logging`

use krbridge_core::{LogLevel, ModuleError, ModuleResult};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::reload;

type FilterHandle = reload::Handle<LevelFilter, Registry>;

/// Holds the reload handle of the global level filter, once installed
pub struct ReloadHandle {
    filter: Mutex<Option<FilterHandle>>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self {
            filter: Mutex::new(None),
        }
    }

    /// Process-wide handle used by `init_logging` and `set_log_level`
    pub fn global() -> &'static ReloadHandle {
        static GLOBAL: OnceCell<ReloadHandle> = OnceCell::new();
        GLOBAL.get_or_init(ReloadHandle::new)
    }

    pub fn set_handle(&self, filter: FilterHandle) {
        self.filter.lock().replace(filter);
    }

    pub fn is_initialized(&self) -> bool {
        self.filter.lock().is_some()
    }

    /// Swap the installed filter for one matching `level`
    ///
    /// Fails with [`ModuleError::ConfigError`] when no subscriber was
    /// installed through this handle.
    pub fn reload_level(&self, level: LogLevel) -> ModuleResult<()> {
        let filter = self.filter.lock();
        let Some(filter) = filter.as_ref() else {
            return Err(ModuleError::ConfigError(
                "no reloadable log filter installed".to_string(),
            ));
        };
        filter
            .reload(level_filter(level))
            .map_err(|e| ModuleError::Internal(format!("log filter reload failed: {}", e)))
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Off => LevelFilter::OFF,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Trace => LevelFilter::TRACE,
    }
}

#[cfg(test)]
#[path = "reload/reload_tests.rs"]
mod reload_tests;
