use crate::ops::arithmetic::mul::mul_op;
use crate::ops::traits::Scalar;
use crate::value::Value;

/// Negation, defined as multiplication by a constant -1 leaf.
///
/// No backward struct of its own: the gradient (-1 per unit of upstream
/// gradient) falls out of the multiplication rule. The lifted constant
/// participates in the graph as an ordinary leaf whose accumulated gradient
/// the caller simply ignores.
pub fn neg_op<T: Scalar>(a: &Value<T>) -> Value<T> {
    mul_op(a, &Value::new(-T::one()))
}
