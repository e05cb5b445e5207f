//! JNI entry points for the Android module
//!
//! Kotlin side:
//! ```kotlin
//! package com.myrustlib2
//!
//! class MyRustLib2Module(...) {
//!   companion object {
//!     init { System.loadLibrary("my_rust_lib2") }
//!     @JvmStatic external fun nativeMultiply(a: Double, b: Double): Double
//!   }
//! }
//! ```

#![allow(non_snake_case)]

use std::ffi::c_void;

use jni::objects::JClass;
use jni::sys::{jdouble, jint, JavaVM, JNI_VERSION_1_6};
use jni::JNIEnv;

use crate::logging::{init_logging, LogConfig};
use crate::math;

/// Called by the VM on `System.loadLibrary`.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: *mut JavaVM, _reserved: *mut c_void) -> jint {
    if let Err(e) = init_logging(&LogConfig::default()) {
        eprintln!("my_rust_lib2: {e}");
    }
    tracing::debug!("native library loaded");
    JNI_VERSION_1_6
}

#[no_mangle]
pub extern "system" fn Java_com_myrustlib2_MyRustLib2Module_nativeMultiply<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
    a: jdouble,
    b: jdouble,
) -> jdouble {
    math::multiply(a, b)
}
