//! krbridge-runtime - Host-side module dispatch
//!
//! This crate provides:
//! - [`ModuleBridge`] routing sync calls inline and async calls onto the runtime
//! - [`AsyncRuntime`] for managing the Tokio runtime
//! - Panic containment at the dispatch boundary
//! - Graceful shutdown support via [`ShutdownHandle`]

mod bridge;
mod panic_guard;
mod runtime;
mod shutdown;

pub use bridge::ModuleBridge;
pub use panic_guard::catch_panic;
pub use runtime::{AsyncRuntime, RuntimeConfig};
pub use shutdown::{ShutdownHandle, ShutdownSignal};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AsyncRuntime, ModuleBridge, RuntimeConfig, ShutdownHandle, ShutdownSignal};
}
