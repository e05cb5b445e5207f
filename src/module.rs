//! React Native module descriptor
//!
//! Mirrors what the Android package reports through its
//! `ReactModuleInfoProvider`, so the JS side and tooling can query it from
//! the native library without going through the JVM.

use crate::error::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name the module is registered under in React Native
pub const MODULE_NAME: &str = "MyRustLib2";

/// Descriptor for a native module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    pub name: String,
    pub class_name: String,
    pub can_override_existing_module: bool,
    pub needs_eager_init: bool,
    pub is_cxx_module: bool,
    pub is_turbo_module: bool,
}

lazy_static::lazy_static! {
    static ref MODULES: BTreeMap<&'static str, ModuleInfo> = {
        let mut modules = BTreeMap::new();
        modules.insert(
            MODULE_NAME,
            ModuleInfo {
                name: MODULE_NAME.to_string(),
                class_name: MODULE_NAME.to_string(),
                can_override_existing_module: false,
                needs_eager_init: false,
                is_cxx_module: false,
                is_turbo_module: true,
            },
        );
        modules
    };
}

/// Descriptor of this library's module
pub fn module_info() -> ModuleInfo {
    // Inserted in the initializer above
    MODULES[MODULE_NAME].clone()
}

/// Look up a module by its exact (case-sensitive) name
pub fn resolve_module(name: &str) -> Option<ModuleInfo> {
    let found = MODULES.get(name).cloned();
    if found.is_none() {
        tracing::debug!(name, "no native module registered under this name");
    }
    found
}

/// Like [`resolve_module`], but an unknown name is an error
pub fn module_info_for(name: &str) -> Result<ModuleInfo> {
    MODULES
        .get(name)
        .cloned()
        .ok_or_else(|| BridgeError::UnknownModule(name.to_string()))
}

/// All descriptors as a JSON object keyed by module name
pub fn module_info_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&*MODULES)?)
}
