use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::rc::Rc;

/// Backward operation context for the cosine.
#[derive(Debug)]
struct CosBackward<T: Scalar> {
    input: Value<T>,
}

impl<T: Scalar> BackwardOp<T> for CosBackward<T> {
    fn backward(&self, grad_output: T) -> Vec<T> {
        // d(cos a)/da = -sin a
        vec![-self.input.data().sin() * grad_output]
    }

    fn inputs(&self) -> Vec<Value<T>> {
        vec![self.input.clone()]
    }
}

/// Cosine of an angle in radians.
pub fn cos_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    apply_unary_op(a, |x| x.cos(), |input, _| Rc::new(CosBackward { input }))
}

impl<T: Scalar> Value<T> {
    /// See [`cos_op`].
    pub fn cos(&self) -> Value<T> {
        cos_op(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cos_at_zero() {
        let x = Value::new(0.0);
        let y = cos_op(&x);
        assert_eq!(y.data(), 1.0);

        y.backward();
        assert_eq!(x.grad(), 0.0); // -sin(0)
    }

    #[test]
    fn test_cos_gradient_is_negative_sine() {
        let x = Value::new(1.0);
        let y = x.cos();
        y.backward();
        assert_relative_eq!(x.grad(), -1.0f64.sin(), epsilon = 1e-12);
    }
}
