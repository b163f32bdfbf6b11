#![allow(non_snake_case)]

use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

struct NamedModule {
    name: &'static str,
    destroyed: Arc<AtomicUsize>,
}

impl NamedModule {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            destroyed: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl ModuleExport for NamedModule {
    fn name(&self) -> &str {
        self.name
    }

    fn call_method(
        &self,
        sync: bool,
        method: &str,
        params: &Value,
        _callback: Option<&RenderCallback>,
    ) -> Value {
        match method {
            "sync" => Value::Bool(sync),
            "echo" => params.clone(),
            _ => Value::Null,
        }
    }

    fn on_destroy(&self) {
        self.destroyed.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn ModuleRegistry___new___is_empty() {
    let registry = ModuleRegistry::new();

    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn ModuleRegistry___register___makes_module_retrievable() {
    let registry = ModuleRegistry::new();

    registry.register(Arc::new(NamedModule::new("A"))).unwrap();

    assert!(registry.contains("A"));
    assert_eq!(registry.get("A").unwrap().name(), "A");
}

#[test]
fn ModuleRegistry___register___rejects_duplicate_name() {
    let registry = ModuleRegistry::new();
    registry.register(Arc::new(NamedModule::new("A"))).unwrap();

    let result = registry.register(Arc::new(NamedModule::new("A")));

    assert!(matches!(result, Err(ModuleError::DuplicateModule(name)) if name == "A"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn ModuleRegistry___register_or_replace___returns_previous_module() {
    let registry = ModuleRegistry::new();
    registry.register(Arc::new(NamedModule::new("A"))).unwrap();

    let previous = registry.register_or_replace(Arc::new(NamedModule::new("A")));

    assert!(previous.is_some());
    assert_eq!(registry.len(), 1);
}

#[test]
fn ModuleRegistry___module_names___are_sorted() {
    let registry = ModuleRegistry::new();
    registry.register(Arc::new(NamedModule::new("KRRouterModule"))).unwrap();
    registry.register(Arc::new(NamedModule::new("KRLogModule"))).unwrap();

    assert_eq!(registry.module_names(), vec!["KRLogModule", "KRRouterModule"]);
}

#[test]
fn ModuleRegistry___call_method___forwards_params_and_sync_flag() {
    let registry = ModuleRegistry::new();
    registry.register(Arc::new(NamedModule::new("A"))).unwrap();

    let echoed = registry
        .call_method("A", true, "echo", &Value::from("payload"), None)
        .unwrap();
    let sync = registry
        .call_method("A", false, "sync", &Value::Null, None)
        .unwrap();

    assert_eq!(echoed.as_str(), Some("payload"));
    assert_eq!(sync, Value::Bool(false));
}

#[test]
fn ModuleRegistry___call_method___unknown_module_is_error() {
    let registry = ModuleRegistry::new();

    let result = registry.call_method("Missing", true, "echo", &Value::Null, None);

    assert!(matches!(result, Err(ModuleError::UnknownModule(name)) if name == "Missing"));
}

#[test]
fn ModuleRegistry___call_method___empty_method_is_error() {
    let registry = ModuleRegistry::new();
    registry.register(Arc::new(NamedModule::new("A"))).unwrap();

    let result = registry.call_method("A", true, "", &Value::Null, None);

    assert!(matches!(result, Err(ModuleError::EmptyMethod)));
}

#[test]
fn ModuleRegistry___call_method___unknown_method_returns_null() {
    let registry = ModuleRegistry::new();
    registry.register(Arc::new(NamedModule::new("A"))).unwrap();

    let result = registry
        .call_method("A", true, "nope", &Value::Null, None)
        .unwrap();

    assert!(result.is_null());
}

#[test]
fn ModuleRegistry___destroy_all___notifies_and_clears() {
    let registry = ModuleRegistry::new();
    let module = NamedModule::new("A");
    let destroyed = module.destroyed.clone();
    registry.register(Arc::new(module)).unwrap();

    registry.destroy_all();

    assert_eq!(destroyed.load(Ordering::SeqCst), 1);
    assert!(registry.is_empty());
}
