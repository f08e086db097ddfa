use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for the hyperbolic tangent. The derivative is
/// expressed through the captured forward output t: 1 - t^2.
#[derive(Debug)]
struct TanhBackward<T: Scalar> {
    input: Value<T>,
    out_data: T,
}

impl<T: Scalar> BackwardOp<T> for TanhBackward<T> {
    fn backward(&self, grad_output: T) -> Vec<T> {
        let t = self.out_data;
        vec![(T::one() - t * t) * grad_output]
    }

    fn inputs(&self) -> Vec<Value<T>> {
        vec![self.input.clone()]
    }
}

// --- Forward Operation ---

/// Hyperbolic tangent, (e^(2x) - 1) / (e^(2x) + 1), evaluated through the
/// saturating `Float::tanh` so large inputs settle at +/-1 instead of
/// overflowing the intermediate exponential.
pub fn tanh_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    apply_unary_op(a, |x| x.tanh(), |input, out_data| {
        Rc::new(TanhBackward { input, out_data })
    })
}

impl<T: Scalar> Value<T> {
    /// See [`tanh_op`].
    pub fn tanh(&self) -> Value<T> {
        tanh_op(self)
    }
}

// --- Tests ---
