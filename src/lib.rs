uniffi::setup_scaffolding!();

// JNI bridge for Android
#[cfg(target_os = "android")]
mod jni_bridge;

// C FFI bridge for iOS
#[cfg(target_os = "ios")]
pub mod ios_bridge;

// Core modules
pub mod error;
pub mod logging;
pub mod math;
pub mod module;

// Re-export commonly used types for convenience
pub use error::{BridgeError, Result};
pub use module::{ModuleInfo, MODULE_NAME};

/// Multiply two doubles. Same result as the platform native entry points.
#[uniffi::export]
pub fn multiply(a: f64, b: f64) -> f64 {
    math::multiply(a, b)
}

/// Descriptor of the `MyRustLib2` React module.
#[uniffi::export]
pub fn module_info() -> ModuleInfo {
    module::module_info()
}

/// Look up a module descriptor by name, `None` for unknown modules.
#[uniffi::export]
pub fn resolve_module(name: String) -> Option<ModuleInfo> {
    module::resolve_module(&name)
}
