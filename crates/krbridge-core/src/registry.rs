//! Name-based module registry

use crate::{ModuleError, ModuleExport, ModuleResult, RenderCallback, Value};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry mapping module names to their implementations
///
/// Lookups clone the module `Arc` and release the lock before the module
/// runs, so a module may safely call back into the registry.
pub struct ModuleRegistry {
    modules: RwLock<BTreeMap<String, Arc<dyn ModuleExport>>>,
}

impl ModuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            modules: RwLock::new(BTreeMap::new()),
        }
    }

    /// Register a module under its own name
    ///
    /// Fails with [`ModuleError::DuplicateModule`] if the name is taken.
    pub fn register(&self, module: Arc<dyn ModuleExport>) -> ModuleResult<()> {
        let name = module.name().to_string();
        let mut modules = self.modules.write();
        if modules.contains_key(&name) {
            return Err(ModuleError::DuplicateModule(name));
        }
        tracing::debug!(module = %name, "registered module");
        modules.insert(name, module);
        Ok(())
    }

    /// Register a module, returning the one it replaced, if any
    pub fn register_or_replace(
        &self,
        module: Arc<dyn ModuleExport>,
    ) -> Option<Arc<dyn ModuleExport>> {
        let name = module.name().to_string();
        let previous = self.modules.write().insert(name.clone(), module);
        if previous.is_some() {
            tracing::debug!(module = %name, "replaced module");
        }
        previous
    }

    /// Get a module by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn ModuleExport>> {
        self.modules.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.read().contains_key(name)
    }

    /// Names of all registered modules, sorted
    pub fn module_names(&self) -> Vec<String> {
        self.modules.read().keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.modules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.read().is_empty()
    }

    /// Dispatch a call to the named module
    pub fn call_method(
        &self,
        module: &str,
        sync: bool,
        method: &str,
        params: &Value,
        callback: Option<&RenderCallback>,
    ) -> ModuleResult<Value> {
        let target = self.resolve(module, method)?;
        Ok(target.call_method(sync, method, params, callback))
    }

    /// Validate a call and look up its target module
    pub fn resolve(&self, module: &str, method: &str) -> ModuleResult<Arc<dyn ModuleExport>> {
        if method.is_empty() {
            return Err(ModuleError::EmptyMethod);
        }
        self.get(module)
            .ok_or_else(|| ModuleError::UnknownModule(module.to_string()))
    }

    /// Notify every module of teardown and empty the registry
    pub fn destroy_all(&self) {
        let modules = std::mem::take(&mut *self.modules.write());
        for (name, module) in modules {
            tracing::debug!(module = %name, "destroying module");
            module.on_destroy();
        }
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "registry/registry_tests.rs"]
mod registry_tests;
