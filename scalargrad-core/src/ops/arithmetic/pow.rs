use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::arithmetic::mul::mul_op;
use crate::ops::math_elem::exp::exp_op;
use crate::ops::math_elem::ln::ln_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use num_traits::ToPrimitive;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for raising to a constant exponent.
#[derive(Debug)]
struct PowfBackward<T: Scalar> {
    base: Value<T>,
    exponent: T,
}

impl<T: Scalar> BackwardOp<T> for PowfBackward<T> {
    fn backward(&self, grad_output: T) -> Vec<T> {
        // d(a^k)/da = k * a^(k-1)
        let a = self.base.data();
        let k = self.exponent;
        vec![k * a.powf(k - T::one()) * grad_output]
    }

    fn inputs(&self) -> Vec<Value<T>> {
        vec![self.base.clone()]
    }
}

// --- Forward Operations ---

/// Unvalidated core of `powf_op`. Also used by `div_op`, whose exponent is
/// the integer -1 and therefore always inside the real domain.
pub(crate) fn powf_unchecked<T: Scalar>(base: &Value<T>, exponent: T) -> Value<T> {
    let out_data = base.data().powf(exponent);
    Value::from_op(
        out_data,
        Rc::new(PowfBackward {
            base: base.clone(),
            exponent,
        }),
    )
}

/// Raises a value to a constant real exponent.
///
/// A negative base with an integer exponent is exact real arithmetic and is
/// allowed; a negative base with a non-integer exponent has no real result
/// and fails with [`ScalarGradError::InvalidDomain`] before any node is
/// built. A zero base with a negative exponent overflows to infinity, which
/// passes through silently like every other overflow.
pub fn powf_op<T: Scalar>(base: &Value<T>, exponent: T) -> Result<Value<T>, ScalarGradError> {
    let base_data = base.data();
    if base_data < T::zero() && exponent.fract() != T::zero() {
        return Err(ScalarGradError::InvalidDomain {
            operation: "powf",
            value: base_data.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(powf_unchecked(base, exponent))
}

/// Value-to-the-Value power, computed as `a^b = exp(b * ln a)`.
///
/// This is a composition of `ln`, `mul` and `exp` rather than a primitive
/// with its own backward rule; the gradients of both operands are inherited
/// from the composed operations. The identity only holds for a strictly
/// positive base, checked here before anything is built.
pub fn pow_op<T: Scalar>(base: &Value<T>, exponent: &Value<T>) -> Result<Value<T>, ScalarGradError> {
    let base_data = base.data();
    if base_data <= T::zero() {
        return Err(ScalarGradError::InvalidDomain {
            operation: "pow",
            value: base_data.to_f64().unwrap_or(f64::NAN),
        });
    }
    let ln_base = ln_op(base)?;
    Ok(exp_op(&mul_op(exponent, &ln_base)))
}

// --- Value Methods ---

impl<T: Scalar> Value<T> {
    /// See [`powf_op`].
    pub fn powf(&self, exponent: T) -> Result<Value<T>, ScalarGradError> {
        powf_op(self, exponent)
    }

    /// See [`pow_op`].
    pub fn pow(&self, exponent: &Value<T>) -> Result<Value<T>, ScalarGradError> {
        pow_op(self, exponent)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
