use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for ReLU. The gate is the captured forward
/// output: gradient passes through only where the output was positive.
#[derive(Debug)]
struct ReluBackward<T: Scalar> {
    input: Value<T>,
    out_data: T,
}

impl<T: Scalar> BackwardOp<T> for ReluBackward<T> {
    fn backward(&self, grad_output: T) -> Vec<T> {
        if self.out_data > T::zero() {
            vec![grad_output]
        } else {
            vec![T::zero()]
        }
    }

    fn inputs(&self) -> Vec<Value<T>> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Rectified Linear Unit: max(0, x).
pub fn relu_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    apply_unary_op(a, |x| x.max(T::zero()), |input, out_data| {
        Rc::new(ReluBackward { input, out_data })
    })
}

impl<T: Scalar> Value<T> {
    /// See [`relu_op`].
    pub fn relu(&self) -> Value<T> {
        relu_op(self)
    }
}

// --- Tests ---
