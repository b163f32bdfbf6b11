#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn ReloadHandle___new___is_not_initialized() {
    let handle = ReloadHandle::new();

    assert!(!handle.is_initialized());
}

#[test]
fn ReloadHandle___reload_level___without_subscriber_is_config_error() {
    let handle = ReloadHandle::new();

    let result = handle.reload_level(LogLevel::Debug);

    assert!(matches!(result, Err(ModuleError::ConfigError(_))));
}

#[test]
fn ReloadHandle___reload_level___updates_installed_filter() {
    let (layer, filter) = reload::Layer::<LevelFilter, Registry>::new(LevelFilter::INFO);
    let handle = ReloadHandle::new();
    handle.set_handle(filter.clone());

    handle.reload_level(LogLevel::Error).unwrap();

    assert!(handle.is_initialized());
    assert_eq!(filter.clone_current(), Some(LevelFilter::ERROR));
    drop(layer);
}

#[test]
fn ReloadHandle___reload_level___fails_once_layer_is_gone() {
    let (layer, filter) = reload::Layer::<LevelFilter, Registry>::new(LevelFilter::INFO);
    let handle = ReloadHandle::new();
    handle.set_handle(filter);
    drop(layer);

    let result = handle.reload_level(LogLevel::Warn);

    assert!(matches!(result, Err(ModuleError::Internal(_))));
}

#[test_case(LogLevel::Trace, LevelFilter::TRACE)]
#[test_case(LogLevel::Debug, LevelFilter::DEBUG)]
#[test_case(LogLevel::Info, LevelFilter::INFO)]
#[test_case(LogLevel::Warn, LevelFilter::WARN)]
#[test_case(LogLevel::Error, LevelFilter::ERROR)]
#[test_case(LogLevel::Off, LevelFilter::OFF)]
fn level_filter___maps_each_level(level: LogLevel, expected: LevelFilter) {
    assert_eq!(level_filter(level), expected);
}
