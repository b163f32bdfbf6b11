#![allow(non_snake_case)]

use super::*;

// RuntimeConfig tests

#[test]
fn RuntimeConfig___default___has_expected_values() {
    let config = RuntimeConfig::default();

    assert!(config.worker_threads.is_none());
    assert_eq!(config.thread_name, "krbridge-worker");
    assert_eq!(config.max_blocking_threads, 64);
}

#[test]
fn RuntimeConfig___builder_chain___combines_options() {
    let config = RuntimeConfig::new()
        .with_worker_threads(2)
        .with_thread_name("render-worker")
        .with_max_blocking_threads(8);

    assert_eq!(config.worker_threads, Some(2));
    assert_eq!(config.thread_name, "render-worker");
    assert_eq!(config.max_blocking_threads, 8);
}

#[test]
fn RuntimeConfig___from_bridge_config___takes_worker_threads() {
    let bridge = BridgeConfig {
        worker_threads: Some(3),
        ..BridgeConfig::default()
    };

    let config = RuntimeConfig::from_bridge_config(&bridge);

    assert_eq!(config.worker_threads, Some(3));
    assert_eq!(config.thread_name, "krbridge-worker");
}

// AsyncRuntime tests

#[test]
fn AsyncRuntime___new___keeps_config() {
    let runtime = AsyncRuntime::new(RuntimeConfig::new().with_worker_threads(1)).unwrap();

    assert_eq!(runtime.config().worker_threads, Some(1));
    assert!(!runtime.is_shutting_down());
}

#[test]
fn AsyncRuntime___block_on___executes_future() {
    let runtime = AsyncRuntime::with_defaults().unwrap();

    let result = runtime.block_on(async { 42 });

    assert_eq!(result, 42);
}

#[test]
fn AsyncRuntime___spawn_blocking___runs_closure() {
    let runtime = AsyncRuntime::with_defaults().unwrap();

    let handle = runtime.spawn_blocking(|| "done");
    let result = runtime.block_on(handle).unwrap();

    assert_eq!(result, "done");
}

#[test]
fn AsyncRuntime___spawn___executes_task() {
    let runtime = AsyncRuntime::with_defaults().unwrap();

    let handle = runtime.spawn(async { 123 });

    assert_eq!(runtime.block_on(handle).unwrap(), 123);
}

#[test]
fn AsyncRuntime___shutdown___triggers_signal() {
    let runtime = AsyncRuntime::with_defaults().unwrap();
    let signal = runtime.shutdown_signal();

    runtime.shutdown(Duration::from_millis(50)).unwrap();

    assert!(signal.is_triggered());
    assert!(runtime.is_shutting_down());
}

#[test]
fn AsyncRuntime___shutdown___twice_is_ok() {
    let runtime = AsyncRuntime::with_defaults().unwrap();

    runtime.shutdown(Duration::from_millis(10)).unwrap();
    let second = runtime.shutdown(Duration::from_millis(10));

    assert!(second.is_ok());
}

#[tokio::test]
async fn AsyncRuntime___drop___inside_async_context_does_not_panic() {
    let runtime = AsyncRuntime::with_defaults().unwrap();

    drop(runtime);
}

#[tokio::test]
async fn AsyncRuntime___shutdown___inside_async_context_does_not_panic() {
    let runtime = AsyncRuntime::with_defaults().unwrap();

    let result = runtime.shutdown(Duration::from_millis(50));

    assert!(result.is_ok());
    assert!(runtime.is_shutting_down());
}
