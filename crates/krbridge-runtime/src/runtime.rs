//! Worker runtime for asynchronous module calls

use crate::shutdown::{ShutdownHandle, ShutdownSignal};
use krbridge_core::{BridgeConfig, ModuleError, ModuleResult};
use parking_lot::Mutex;
use std::future::Future;
use std::time::Duration;
use tokio::runtime::{Builder, Handle, Runtime};
use tokio::task::JoinHandle;

/// Sizing of the worker runtime
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Async worker threads; `None` lets Tokio use one per core
    pub worker_threads: Option<usize>,
    pub thread_name: String,
    /// Upper bound on threads running `sync == false` module calls
    pub max_blocking_threads: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            worker_threads: None,
            thread_name: "krbridge-worker".to_string(),
            max_blocking_threads: 64,
        }
    }
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runtime sizing taken from the host's bridge configuration
    pub fn from_bridge_config(config: &BridgeConfig) -> Self {
        Self {
            worker_threads: config.worker_threads,
            ..Self::default()
        }
    }

    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    pub fn with_thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = name.into();
        self
    }

    pub fn with_max_blocking_threads(mut self, threads: usize) -> Self {
        self.max_blocking_threads = threads;
        self
    }
}

/// Tokio runtime owned by one render host
///
/// The runtime is taken out on [`shutdown`](AsyncRuntime::shutdown); the
/// cached [`Handle`] stays valid, but tasks spawned afterwards never run.
pub struct AsyncRuntime {
    runtime: Mutex<Option<Runtime>>,
    handle: Handle,
    shutdown: ShutdownHandle,
    config: RuntimeConfig,
}

impl AsyncRuntime {
    pub fn new(config: RuntimeConfig) -> ModuleResult<Self> {
        let mut builder = Builder::new_multi_thread();
        builder
            .thread_name(config.thread_name.clone())
            .max_blocking_threads(config.max_blocking_threads.max(1))
            .enable_time();
        if let Some(threads) = config.worker_threads {
            builder.worker_threads(threads.max(1));
        }

        let runtime = builder.build().map_err(|e| {
            ModuleError::RuntimeError(format!("cannot start worker runtime: {}", e))
        })?;

        tracing::debug!(
            worker_threads = ?config.worker_threads,
            max_blocking_threads = config.max_blocking_threads,
            "worker runtime started"
        );

        Ok(Self {
            handle: runtime.handle().clone(),
            runtime: Mutex::new(Some(runtime)),
            shutdown: ShutdownHandle::new(),
            config,
        })
    }

    pub fn with_defaults() -> ModuleResult<Self> {
        Self::new(RuntimeConfig::default())
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn handle(&self) -> Handle {
        self.handle.clone()
    }

    /// Signal that resolves once [`shutdown`](AsyncRuntime::shutdown) starts
    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Drive `future` to completion from a thread outside the runtime
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.handle.block_on(future)
    }

    pub fn spawn<F>(&self, future: F) -> JoinHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        self.handle.spawn(future)
    }

    /// Run blocking work, such as a module call, on the blocking pool
    pub fn spawn_blocking<F, R>(&self, work: F) -> JoinHandle<R>
    where
        F: FnOnce() -> R + Send + 'static,
        R: Send + 'static,
    {
        self.handle.spawn_blocking(work)
    }

    /// Stop accepting work and wait up to `timeout` for running calls
    ///
    /// Blocking is not allowed on a thread that drives another Tokio
    /// runtime, so from async code the runtime is released in the background
    /// without waiting. Repeated calls return `Ok`.
    pub fn shutdown(&self, timeout: Duration) -> ModuleResult<()> {
        self.shutdown.trigger();

        let Some(runtime) = self.runtime.lock().take() else {
            return Ok(());
        };

        if Handle::try_current().is_ok() {
            tracing::debug!("stopping worker runtime in the background");
            runtime.shutdown_background();
            return Ok(());
        }

        tracing::debug!(?timeout, "stopping worker runtime");
        runtime.shutdown_timeout(timeout);
        tracing::debug!("worker runtime stopped");
        Ok(())
    }

    pub fn is_shutting_down(&self) -> bool {
        self.shutdown.is_triggered()
    }
}

impl Drop for AsyncRuntime {
    fn drop(&mut self) {
        self.shutdown.trigger();
        // Dropping a runtime from inside another runtime panics
        if let Some(runtime) = self.runtime.get_mut().take() {
            runtime.shutdown_background();
        }
    }
}

#[cfg(test)]
#[path = "runtime/runtime_tests.rs"]
mod runtime_tests;
