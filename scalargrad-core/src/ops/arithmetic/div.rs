use crate::ops::arithmetic::mul::mul_op;
use crate::ops::arithmetic::pow::powf_unchecked;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Division, defined as `a * b^(-1)`.
///
/// Gradients are inherited from the composed multiplication and power:
/// 1/b toward `a`, -a/b^2 toward `b`. The -1 exponent is an integer, so the
/// power never has a domain error; a zero divisor yields infinity silently,
/// matching standard floating-point semantics.
pub fn div_op<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    mul_op(a, &powf_unchecked(b, -T::one()))
}

// --- Tests ---
#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
