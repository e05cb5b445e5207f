//! Arithmetic exposed to the React Native module
//!
//! Every native entry point (JNI, C ABI, UniFFI) forwards here so the
//! platforms cannot drift apart.

/// Multiply two doubles.
///
/// Plain IEEE-754 multiplication: `NaN` propagates, `inf * 0` is `NaN`,
/// overflow saturates to infinity. Never panics.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    let product = a * b;
    tracing::trace!(a, b, product, "multiply");
    product
}
