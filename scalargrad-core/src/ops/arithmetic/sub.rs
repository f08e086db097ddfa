use crate::ops::arithmetic::add::add_op;
use crate::ops::arithmetic::neg::neg_op;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Subtraction, defined as `a + (-b)`. Gradients are inherited from the
/// addition and negation it composes: 1 toward `a`, -1 toward `b`.
pub fn sub_op<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    add_op(a, &neg_op(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_forward_and_backward() {
        let a = Value::new(3.0);
        let b = Value::new(2.0);
        let out = sub_op(&a, &b);
        assert_eq!(out.data(), 1.0);

        out.backward();
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
    }

    #[test]
    fn test_sub_self_is_zero_with_accumulated_grads() {
        // x - x: forward 0; both contributions land on the same node.
        let x = Value::new(4.0);
        let out = sub_op(&x, &x);
        assert_eq!(out.data(), 0.0);

        out.backward();
        assert_eq!(x.grad(), 0.0); // +1 and -1 accumulate to 0
    }
}
