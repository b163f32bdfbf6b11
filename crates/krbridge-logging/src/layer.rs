//! Tracing layer that forwards events to the host log callback

use crate::callback::LogCallbackManager;
use crate::reload::ReloadHandle;
use krbridge_core::LogLevel;
use tracing::field::{Field, Visit};
use tracing::subscriber::Interest;
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Name of the event field used as the callback tag
pub const TAG_FIELD: &str = "tag";

/// Tracing layer that forwards log events to the host callback
///
/// The callback tag is the event's `tag` field when present, otherwise the
/// event target. Fields other than `message` and `tag` are appended to the
/// message as `name=value`.
pub struct CallbackLoggingLayer {
    manager: &'static LogCallbackManager,
}

impl CallbackLoggingLayer {
    /// Create a layer using the global callback manager
    pub fn new() -> Self {
        Self {
            manager: LogCallbackManager::global(),
        }
    }

    /// Create a layer with a specific callback manager
    pub fn with_manager(manager: &'static LogCallbackManager) -> Self {
        Self { manager }
    }

    fn convert_level(level: &Level) -> LogLevel {
        match *level {
            Level::TRACE => LogLevel::Trace,
            Level::DEBUG => LogLevel::Debug,
            Level::INFO => LogLevel::Info,
            Level::WARN => LogLevel::Warn,
            Level::ERROR => LogLevel::Error,
        }
    }
}

impl Default for CallbackLoggingLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for CallbackLoggingLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    // The level can change at runtime, so never let tracing cache a verdict
    fn register_callsite(&self, _metadata: &'static Metadata<'static>) -> Interest {
        Interest::sometimes()
    }

    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.manager
            .is_enabled(Self::convert_level(metadata.level()))
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Self::convert_level(metadata.level());

        if !self.manager.is_enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let tag = visitor
            .tag
            .take()
            .unwrap_or_else(|| metadata.target().to_string());
        let message = visitor.into_message();

        self.manager.log(level, &tag, &message);
    }
}

/// Collects the message, tag and remaining fields of an event
#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    tag: Option<String>,
    fields: Vec<String>,
}

impl EventVisitor {
    fn into_message(self) -> String {
        let mut parts = Vec::with_capacity(self.fields.len() + 1);
        if let Some(message) = self.message {
            parts.push(message);
        }
        parts.extend(self.fields);
        parts.join(" ")
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            TAG_FIELD => self.tag = Some(value.to_string()),
            name => self.fields.push(format!("{}={:?}", name, value)),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(format!("{:?}", value)),
            TAG_FIELD => self.tag = Some(format!("{:?}", value)),
            name => self.fields.push(format!("{}={:?}", name, value)),
        }
    }
}

/// Initialize the global subscriber with the callback layer
///
/// Installs a reloadable level filter in front of [`CallbackLoggingLayer`].
/// Calling this more than once is harmless: later calls only update the level.
pub fn init_logging(level: LogLevel) {
    use tracing_subscriber::prelude::*;

    LogCallbackManager::global().set_level(level);

    let reload = ReloadHandle::global();
    if reload.is_initialized() {
        if let Err(e) = reload.reload_level(level) {
            tracing::warn!("Failed to reload tracing filter: {}", e);
        }
        return;
    }

    let (filter, handle) = tracing_subscriber::reload::Layer::new(
        crate::reload::level_filter(level),
    );
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(CallbackLoggingLayer::new());

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        reload.set_handle(handle);
    }
}

/// Change the level forwarded to the host at runtime
pub fn set_log_level(level: LogLevel) {
    LogCallbackManager::global().set_level(level);

    if let Err(e) = ReloadHandle::global().reload_level(level) {
        tracing::debug!("Tracing filter not reloaded: {}", e);
    }
}
