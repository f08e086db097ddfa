use crate::autograd::BackwardOp;
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::rc::Rc;

// --- Backward Operation Structure ---

/// Backward operation context for addition.
#[derive(Debug)]
struct AddBackward<T: Scalar> {
    a: Value<T>,
    b: Value<T>,
}

impl<T: Scalar> BackwardOp<T> for AddBackward<T> {
    fn backward(&self, grad_output: T) -> Vec<T> {
        // d(a+b)/da = 1, d(a+b)/db = 1
        vec![grad_output, grad_output]
    }

    fn inputs(&self) -> Vec<Value<T>> {
        vec![self.a.clone(), self.b.clone()]
    }
}

// --- Forward Operation ---

/// Adds two values and records the operation in the graph.
pub fn add_op<T: Scalar>(a: &Value<T>, b: &Value<T>) -> Value<T> {
    let out_data = a.data() + b.data();
    Value::from_op(
        out_data,
        Rc::new(AddBackward {
            a: a.clone(),
            b: b.clone(),
        }),
    )
}

// --- Tests ---
#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
