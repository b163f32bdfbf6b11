#![allow(non_snake_case)]

use super::*;
use std::sync::Mutex;

// Test helper module
struct CounterModule {
    seen: Mutex<Vec<String>>,
}

impl CounterModule {
    fn new() -> Self {
        Self {
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl ModuleExport for CounterModule {
    fn name(&self) -> &str {
        "CounterModule"
    }

    fn call_method(
        &self,
        _sync: bool,
        method: &str,
        params: &Value,
        callback: Option<&RenderCallback>,
    ) -> Value {
        self.seen.lock().unwrap().push(method.to_string());
        match method {
            "count" => Value::Int(self.seen.lock().unwrap().len() as i64),
            "notify" => {
                if let Some(cb) = callback {
                    cb(params.clone());
                }
                Value::Null
            }
            _ => Value::Null,
        }
    }
}

#[test]
fn ModuleExport___call_method___returns_module_value() {
    let module = CounterModule::new();

    let result = module.call_method(true, "count", &Value::Null, None);

    assert_eq!(result, Value::Int(1));
}

#[test]
fn ModuleExport___call_method___unknown_method_returns_null() {
    let module = CounterModule::new();

    let result = module.call_method(true, "missing", &Value::Null, None);

    assert!(result.is_null());
}

#[test]
fn ModuleExport___call_method___module_may_invoke_callback() {
    let module = CounterModule::new();
    let received = Arc::new(Mutex::new(None));
    let sink = received.clone();
    let callback: RenderCallback = Arc::new(move |value| {
        *sink.lock().unwrap() = Some(value);
    });

    module.call_method(false, "notify", &Value::from("ping"), Some(&callback));

    assert_eq!(*received.lock().unwrap(), Some(Value::from("ping")));
}

#[test]
fn ModuleExport___supported_methods___returns_empty_by_default() {
    let module = CounterModule::new();

    assert!(module.supported_methods().is_empty());
}

#[test]
fn ModuleExport___on_destroy___default_is_noop() {
    let module = CounterModule::new();

    module.on_destroy();

    assert!(module.seen.lock().unwrap().is_empty());
}
