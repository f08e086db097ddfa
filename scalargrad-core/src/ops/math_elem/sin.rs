use crate::autograd::BackwardOp;
use crate::ops::apply_unary_op;
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::rc::Rc;

/// Backward operation context for the sine.
#[derive(Debug)]
struct SinBackward<T: Scalar> {
    input: Value<T>,
}

impl<T: Scalar> BackwardOp<T> for SinBackward<T> {
    fn backward(&self, grad_output: T) -> Vec<T> {
        // d(sin a)/da = cos a
        vec![self.input.data().cos() * grad_output]
    }

    fn inputs(&self) -> Vec<Value<T>> {
        vec![self.input.clone()]
    }
}

/// Sine of an angle in radians.
pub fn sin_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    apply_unary_op(a, |x| x.sin(), |input, _| Rc::new(SinBackward { input }))
}

impl<T: Scalar> Value<T> {
    /// See [`sin_op`].
    pub fn sin(&self) -> Value<T> {
        sin_op(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sin_at_zero() {
        let x = Value::new(0.0);
        let y = sin_op(&x);
        assert_eq!(y.data(), 0.0);

        y.backward();
        assert_eq!(x.grad(), 1.0); // cos(0)
    }

    #[test]
    fn test_sin_at_quarter_turn() {
        let x = Value::new(std::f64::consts::FRAC_PI_2);
        let y = x.sin();
        assert_relative_eq!(y.data(), 1.0, epsilon = 1e-12);

        y.backward();
        assert_relative_eq!(x.grad(), 0.0, epsilon = 1e-12);
    }
}
