//! `KRLogModule`: logging for the business layer
//!
//! Calls arrive as `logInfo` / `logDebug` / `logError` with either a plain
//! string payload (the message itself) or a map payload:
//!
//! ```json
//! { "message": "[Net] request failed", "tag": "Net" }
//! ```
//!
//! When no explicit `tag` is given, the tag is taken from a leading
//! `[tag]` marker in the message (see [`find_tag`]).

use krbridge_core::{BridgeConfig, LogLevel, ModuleExport, RenderCallback, Value};
use krbridge_logging::{LogSink, TracingSink};
use serde::Deserialize;
use std::sync::Arc;

/// Registry name of the log module
pub const LOG_MODULE_NAME: &str = "KRLogModule";

pub const METHOD_LOG_INFO: &str = "logInfo";
pub const METHOD_LOG_DEBUG: &str = "logDebug";
pub const METHOD_LOG_ERROR: &str = "logError";

/// Longest tag, in characters, accepted from a `[tag]` marker
pub const MAX_TAG_CHARS: usize = 64;

/// Settings read from `BridgeConfig::data["KRLogModule"]`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogModuleSettings {
    /// Tag used when a message carries none
    #[serde(default)]
    pub default_tag: Option<String>,
}

/// Log module forwarding business-layer log calls to a [`LogSink`]
pub struct LogModule {
    default_tag: String,
    sink: Arc<dyn LogSink>,
}

impl LogModule {
    /// Create a log module emitting through `tracing`
    pub fn new() -> Self {
        Self::with_sink(Arc::new(TracingSink))
    }

    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self {
            default_tag: LOG_MODULE_NAME.to_string(),
            sink,
        }
    }

    /// Create a log module using the `KRLogModule` settings block, if any
    pub fn from_config(config: &BridgeConfig, sink: Arc<dyn LogSink>) -> Self {
        let settings: LogModuleSettings = config
            .module_settings(LOG_MODULE_NAME)
            .unwrap_or_default();
        let module = Self::with_sink(sink);
        match settings.default_tag {
            Some(tag) => module.with_default_tag(tag),
            None => module,
        }
    }

    /// Override the fallback tag; blank tags are ignored
    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !tag.trim().is_empty() {
            self.default_tag = tag.trim().to_string();
        }
        self
    }

    pub fn default_tag(&self) -> &str {
        &self.default_tag
    }

    pub fn log_info(&self, params: &Value) {
        self.emit(LogLevel::Info, params);
    }

    pub fn log_debug(&self, params: &Value) {
        self.emit(LogLevel::Debug, params);
    }

    pub fn log_error(&self, params: &Value) {
        self.emit(LogLevel::Error, params);
    }

    /// Tag for `msg`, falling back to this module's default tag
    pub fn find_tag(&self, msg: &str) -> String {
        extract_tag(msg).unwrap_or(&self.default_tag).to_string()
    }

    fn emit(&self, level: LogLevel, params: &Value) {
        let message = message_of(params);
        let tag = match explicit_tag(params) {
            Some(tag) => tag.to_string(),
            None => self.find_tag(&message),
        };
        self.sink.log(level, &tag, &message);
    }
}

impl Default for LogModule {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleExport for LogModule {
    fn name(&self) -> &str {
        LOG_MODULE_NAME
    }

    fn call_method(
        &self,
        _sync: bool,
        method: &str,
        params: &Value,
        _callback: Option<&RenderCallback>,
    ) -> Value {
        match method {
            METHOD_LOG_INFO => self.log_info(params),
            METHOD_LOG_DEBUG => self.log_debug(params),
            METHOD_LOG_ERROR => self.log_error(params),
            // Unknown methods are ignored without emitting anything
            _ => {}
        }
        Value::Null
    }

    fn supported_methods(&self) -> Vec<&'static str> {
        vec![METHOD_LOG_INFO, METHOD_LOG_DEBUG, METHOD_LOG_ERROR]
    }
}

/// Extract the tag of a log message
///
/// A message tagged `[tag]` (after optional leading whitespace) yields the
/// trimmed text between the brackets. Anything else, including an empty,
/// overlong or bracket-containing tag, yields [`LOG_MODULE_NAME`].
///
/// ```
/// use krbridge_modules::find_tag;
///
/// assert_eq!(find_tag("[Net] timeout"), "Net");
/// assert_eq!(find_tag("  [ Render ] frame"), "Render");
/// assert_eq!(find_tag("no marker"), "KRLogModule");
/// assert_eq!(find_tag(""), "KRLogModule");
/// ```
pub fn find_tag(msg: &str) -> String {
    extract_tag(msg).unwrap_or(LOG_MODULE_NAME).to_string()
}

fn extract_tag(msg: &str) -> Option<&str> {
    let rest = msg.trim_start().strip_prefix('[')?;
    let end = rest.find(']')?;
    let tag = rest[..end].trim();

    let valid = !tag.is_empty()
        && tag.chars().count() <= MAX_TAG_CHARS
        && !tag.chars().any(|c| c == '[' || c.is_control());
    valid.then_some(tag)
}

/// Message text of a payload; never fails
fn message_of(params: &Value) -> String {
    match params {
        Value::String(s) => s.clone(),
        Value::Map(_) => match params.get("message") {
            Some(v @ (Value::String(_) | Value::Int(_) | Value::Float(_) | Value::Bool(_))) => {
                v.to_display_string()
            }
            _ => String::new(),
        },
        _ => String::new(),
    }
}

fn explicit_tag(params: &Value) -> Option<&str> {
    params
        .get_str("tag")
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
}
