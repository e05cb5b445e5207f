//! C ABI entry points for the iOS module
//!
//! Declared in the ObjC++ module as
//! `extern "C" double myrustlib2_multiply(double a, double b);`

use crate::math;

#[no_mangle]
pub extern "C" fn myrustlib2_multiply(a: f64, b: f64) -> f64 {
    math::multiply(a, b)
}
