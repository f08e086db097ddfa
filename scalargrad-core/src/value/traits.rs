//! Operator overloads for `Value`.
//!
//! All four owned/borrowed combinations delegate to the `_op` functions, and
//! plain numbers on either side are lifted to constant leaf nodes through
//! `Value::new` (the explicit conversion point for constants). Lifted
//! constants participate in the graph as ordinary leaves.

use crate::ops::arithmetic::{add_op, div_op, mul_op, neg_op, sub_op};
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:path) => {
        impl<'a, 'b, T: Scalar> $trait<&'b Value<T>> for &'a Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &'b Value<T>) -> Value<T> {
                $op_fn(self, rhs)
            }
        }

        impl<T: Scalar> $trait<Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                $op_fn(&self, &rhs)
            }
        }

        impl<'a, T: Scalar> $trait<&'a Value<T>> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: &'a Value<T>) -> Value<T> {
                $op_fn(&self, rhs)
            }
        }

        impl<'a, T: Scalar> $trait<Value<T>> for &'a Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: Value<T>) -> Value<T> {
                $op_fn(self, &rhs)
            }
        }

        impl<T: Scalar> $trait<T> for Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: T) -> Value<T> {
                $op_fn(&self, &Value::new(rhs))
            }
        }

        impl<'a, T: Scalar> $trait<T> for &'a Value<T> {
            type Output = Value<T>;
            fn $method(self, rhs: T) -> Value<T> {
                $op_fn(self, &Value::new(rhs))
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Div, div, div_op);

// Numbers on the left (`2.0 * v`) need an impl per concrete scalar type.
macro_rules! impl_scalar_lhs {
    ($scalar:ty) => {
        impl Add<Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn add(self, rhs: Value<$scalar>) -> Value<$scalar> {
                add_op(&Value::new(self), &rhs)
            }
        }

        impl<'a> Add<&'a Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn add(self, rhs: &'a Value<$scalar>) -> Value<$scalar> {
                add_op(&Value::new(self), rhs)
            }
        }

        impl Sub<Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn sub(self, rhs: Value<$scalar>) -> Value<$scalar> {
                sub_op(&Value::new(self), &rhs)
            }
        }

        impl<'a> Sub<&'a Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn sub(self, rhs: &'a Value<$scalar>) -> Value<$scalar> {
                sub_op(&Value::new(self), rhs)
            }
        }

        impl Mul<Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn mul(self, rhs: Value<$scalar>) -> Value<$scalar> {
                mul_op(&Value::new(self), &rhs)
            }
        }

        impl<'a> Mul<&'a Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn mul(self, rhs: &'a Value<$scalar>) -> Value<$scalar> {
                mul_op(&Value::new(self), rhs)
            }
        }

        impl Div<Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn div(self, rhs: Value<$scalar>) -> Value<$scalar> {
                div_op(&Value::new(self), &rhs)
            }
        }

        impl<'a> Div<&'a Value<$scalar>> for $scalar {
            type Output = Value<$scalar>;
            fn div(self, rhs: &'a Value<$scalar>) -> Value<$scalar> {
                div_op(&Value::new(self), rhs)
            }
        }
    };
}

impl_scalar_lhs!(f32);
impl_scalar_lhs!(f64);

impl<T: Scalar> Neg for Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        neg_op(&self)
    }
}

impl<'a, T: Scalar> Neg for &'a Value<T> {
    type Output = Value<T>;
    fn neg(self) -> Value<T> {
        neg_op(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::value::Value;

    #[test]
    fn test_operator_combinations() {
        let a = Value::new(3.0);
        let b = Value::new(2.0);

        assert_eq!((&a + &b).data(), 5.0);
        assert_eq!((a.clone() + b.clone()).data(), 5.0);
        assert_eq!((&a - &b).data(), 1.0);
        assert_eq!((&a * &b).data(), 6.0);
        assert_eq!((&a / &b).data(), 1.5);
        assert_eq!((-&a).data(), -3.0);
    }

    #[test]
    fn test_scalar_lifting_both_sides() {
        let a = Value::<f64>::new(3.0);

        assert_eq!((&a + 1.0).data(), 4.0);
        assert_eq!((1.0 + &a).data(), 4.0);
        assert_eq!((&a * 2.0).data(), 6.0);
        assert_eq!((2.0 * &a).data(), 6.0);
        assert_eq!((10.0 - &a).data(), 7.0);
        assert_eq!((6.0 / &a).data(), 2.0);
    }

    #[test]
    fn test_lifted_constant_is_a_graph_leaf() {
        let a = Value::new(3.0);
        let out = &a * 2.0;
        out.backward();
        // The lifted constant accumulated a gradient too (a.data), but the
        // caller only reads the variable's.
        assert_eq!(a.grad(), 2.0);
    }

    #[test]
    fn test_expression_mixing_operators_and_methods() {
        // f(x) = (2x + 1).tanh() at x = 0 -> tanh(1)
        let x = Value::<f64>::new(0.0);
        let y = (2.0 * &x + 1.0).tanh();
        let t = 1.0f64.tanh();
        assert!((y.data() - t).abs() < 1e-12);

        y.backward();
        assert!((x.grad() - 2.0 * (1.0 - t * t)).abs() < 1e-12);
    }
}
