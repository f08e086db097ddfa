use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::rc::Rc;

/// Backward operation context for the tangent.
#[derive(Debug)]
struct TanBackward<T: Scalar> {
    input: Value<T>,
}

impl<T: Scalar> BackwardOp<T> for TanBackward<T> {
    fn backward(&self, grad_output: T) -> Vec<T> {
        // d(tan a)/da = 1/cos^2 a
        let c = self.input.data().cos();
        vec![grad_output / (c * c)]
    }

    fn inputs(&self) -> Vec<Value<T>> {
        vec![self.input.clone()]
    }
}

/// Tangent of an angle in radians. Near odd multiples of pi/2 the forward
/// value and the gradient both blow up, which passes through silently like
/// any other overflow.
pub fn tan_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    apply_unary_op(a, |x| x.tan(), |input, _| Rc::new(TanBackward { input }))
}

impl<T: Scalar> Value<T> {
    /// See [`tan_op`].
    pub fn tan(&self) -> Value<T> {
        tan_op(self)
    }
}
