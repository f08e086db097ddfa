use crate::autograd::BackwardOp;
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for multiplication. Keeps handles to both
/// operands: each one's gradient needs the other's forward value.
#[derive(Debug)]
struct MulBackward<T: Scalar> {
    a: Value<T>,
    b: Value<T>,
}

impl<T: Scalar> BackwardOp<T> for MulBackward<T> {
    fn backward(&self, grad_output: T) -> Vec<T> {
        // d(a*b)/da = b, d(a*b)/db = a
        vec![self.b.data() * grad_output, self.a.data() * grad_output]
    }

    fn inputs(&self) -> Vec<Value<T>> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Multiplies two values and records the operation in the graph.
///
/// The two operands may be the same node (`x * x`); the traversal visits it
/// once while both backward contributions still accumulate into it.
pub fn mul_op<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    let out_data = a.data() * b.data();
    Value::from_op(
        out_data,
        Rc::new(MulBackward {
            a: a.clone(),
            b: b.clone(),
        }),
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
