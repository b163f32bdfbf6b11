//! Panic containment at the dispatch boundary
//!
//! A panicking module must not unwind into the host's render loop. Calls are
//! wrapped so that a panic becomes [`ModuleError::Panicked`] and is logged.

use krbridge_core::{ModuleError, ModuleResult};
use std::any::Any;
use std::panic;

/// Run `f`, converting a panic into [`ModuleError::Panicked`]
///
/// `module` and `method` only label the error log line.
pub fn catch_panic<F, R>(module: &str, method: &str, f: F) -> ModuleResult<R>
where
    F: FnOnce() -> R + panic::UnwindSafe,
{
    panic::catch_unwind(f).map_err(|payload| {
        let message = panic_to_string(payload.as_ref());
        tracing::error!(module, method, "Module call panicked: {}", message);
        ModuleError::Panicked(message)
    })
}

/// Convert a panic payload to a human-readable string
fn panic_to_string(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
