//! Host configuration for the module bridge

use serde::{Deserialize, Serialize};

/// Bridge configuration supplied by the host at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Per-module settings, keyed by module name
    ///
    /// ```json
    /// { "data": { "KRLogModule": { "default_tag": "MyApp" } } }
    /// ```
    #[serde(default)]
    pub data: serde_json::Value,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Destination of module log lines: `"callback"` or `"tracing"`
    #[serde(default = "default_log_sink")]
    pub log_sink: String,

    /// Worker threads for async module calls; unset means one per core
    #[serde(default)]
    pub worker_threads: Option<usize>,

    /// How long `shutdown` waits for in-flight async calls
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_ms: u64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_sink() -> String {
    "callback".to_string()
}

fn default_shutdown_timeout() -> u64 {
    5000
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            data: serde_json::Value::Null,
            log_level: default_log_level(),
            log_sink: default_log_sink(),
            worker_threads: None,
            shutdown_timeout_ms: default_shutdown_timeout(),
        }
    }
}

impl BridgeConfig {
    /// Create a new default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse host-supplied JSON; empty input yields the defaults
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        match bytes {
            [] => Ok(Self::default()),
            json => serde_json::from_slice(json),
        }
    }

    /// Typed entry of `data`, or `None` if absent or of another shape
    pub fn get<T: for<'de> Deserialize<'de>>(&self, key: &str) -> Option<T> {
        let entry = self.data.get(key)?.clone();
        serde_json::from_value(entry).ok()
    }

    /// Store an entry in `data`, turning a non-object `data` into an object
    pub fn set<T: Serialize>(&mut self, key: &str, value: T) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(value)?;
        match self.data.as_object_mut() {
            Some(obj) => {
                obj.insert(key.to_string(), value);
            }
            None => {
                let mut obj = serde_json::Map::new();
                obj.insert(key.to_string(), value);
                self.data = serde_json::Value::Object(obj);
            }
        }
        Ok(())
    }

    /// Get the settings block for a module, if present and well-formed
    pub fn module_settings<T: for<'de> Deserialize<'de>>(&self, module_name: &str) -> Option<T> {
        self.get(module_name)
    }
}
