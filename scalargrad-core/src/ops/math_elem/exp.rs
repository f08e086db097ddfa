use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for the exponential. The derivative of e^x is
/// the forward output itself, so the captured output value is all the rule
/// needs; the input handle is kept for the graph edge.
#[derive(Debug)]
struct ExpBackward<T: Scalar> {
    input: Value<T>,
    out_data: T,
}

impl<T: Scalar> BackwardOp<T> for ExpBackward<T> {
    fn backward(&self, grad_output: T) -> Vec<T> {
        vec![self.out_data * grad_output]
    }

    fn inputs(&self) -> Vec<Value<T>> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Natural exponential, e^x. Total over finite reals; large inputs overflow
/// to infinity silently.
pub fn exp_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    apply_unary_op(a, |x| x.exp(), |input, out_data| {
        Rc::new(ExpBackward { input, out_data })
    })
}

impl<T: Scalar> Value<T> {
    /// See [`exp_op`].
    pub fn exp(&self) -> Value<T> {
        exp_op(self)
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
