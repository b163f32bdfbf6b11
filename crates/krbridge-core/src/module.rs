//! Module export contract

use crate::Value;
use std::sync::Arc;

/// Callback handle a caller may pass along with a method call
///
/// Modules may invoke it zero or more times, possibly after `call_method`
/// has returned. The module never owns the caller's state behind it.
pub type RenderCallback = Arc<dyn Fn(Value) + Send + Sync>;

/// Contract every render module implements
///
/// The host looks modules up by [`name`](ModuleExport::name) and forwards
/// generic calls to [`call_method`](ModuleExport::call_method). Modules absorb
/// their own failures: a call always produces a value, with [`Value::Null`]
/// meaning "nothing to return".
///
/// # Example
///
/// ```
/// use krbridge_core::{ModuleExport, RenderCallback, Value};
///
/// struct EchoModule;
///
/// impl ModuleExport for EchoModule {
///     fn name(&self) -> &str {
///         "EchoModule"
///     }
///
///     fn call_method(
///         &self,
///         _sync: bool,
///         method: &str,
///         params: &Value,
///         callback: Option<&RenderCallback>,
///     ) -> Value {
///         match method {
///             "echo" => {
///                 if let Some(cb) = callback {
///                     cb(params.clone());
///                 }
///                 params.clone()
///             }
///             _ => Value::Null,
///         }
///     }
/// }
///
/// let result = EchoModule.call_method(true, "echo", &Value::from("hi"), None);
/// assert_eq!(result.as_str(), Some("hi"));
/// ```
pub trait ModuleExport: Send + Sync + 'static {
    /// Registry key of this module
    fn name(&self) -> &str;

    /// Handle a call addressed to this module
    ///
    /// - `sync`: whether the caller is blocked waiting for the result
    /// - `method`: method name; unknown names must be ignored, not panic
    /// - `params`: read-only payload for the duration of the call
    /// - `callback`: optional caller callback
    fn call_method(
        &self,
        sync: bool,
        method: &str,
        params: &Value,
        callback: Option<&RenderCallback>,
    ) -> Value;

    /// List supported method names
    fn supported_methods(&self) -> Vec<&'static str> {
        Vec::new()
    }

    /// Called once when the owning registry is torn down
    fn on_destroy(&self) {}
}

#[cfg(test)]
#[path = "module/module_tests.rs"]
mod module_tests;
