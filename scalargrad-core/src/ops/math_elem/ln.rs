use crate::autograd::BackwardOp;
use crate::error::ScalarGradError;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use num_traits::ToPrimitive;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for the natural logarithm. Keeps the input
/// handle: the gradient is `grad_output / input`.
#[derive(Debug)]
struct LnBackward<T: Scalar> {
    input: Value<T>,
}

impl<T: Scalar> BackwardOp<T> for LnBackward<T> {
    fn backward(&self, grad_output: T) -> Vec<T> {
        // d(ln a)/da = 1/a
        vec![grad_output / self.input.data()]
    }

    fn inputs(&self) -> Vec<Value<T>> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Natural logarithm (base e).
///
/// Only defined for strictly positive inputs; anything else fails with
/// [`ScalarGradError::InvalidDomain`] before any node is built, leaving the
/// operand untouched.
pub fn ln_op<T: Scalar>(a: &Value<T>) -> Result<Value<T>, ScalarGradError> {
    let a_data = a.data();
    if a_data <= T::zero() {
        return Err(ScalarGradError::InvalidDomain {
            operation: "ln",
            value: a_data.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(apply_unary_op(a, |x| x.ln(), |input, _| {
        Rc::new(LnBackward { input })
    }))
}

impl<T: Scalar> Value<T> {
    /// See [`ln_op`].
    pub fn ln(&self) -> Result<Value<T>, ScalarGradError> {
        ln_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
