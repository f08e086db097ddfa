//! # Scalar operations module (`ops`)
//!
//! Every differentiable operation lives here, grouped by category. Each
//! operation has a core `xxx_op` function that computes the forward value
//! and attaches the backward context, a `Backward` struct implementing
//! [`BackwardOp`](crate::autograd::BackwardOp) with the local derivative,
//! and (for the unary/transcendental ones) a method on
//! [`Value`](crate::value::Value).
//!
//! Fallible operations (`ln`, `powf`, Value-exponent `pow`) validate their
//! domain *before* building the output node, so a failing call never touches
//! the graph.

use crate::autograd::BackwardOp;
use crate::ops::traits::Scalar;
use crate::value::Value;
use std::rc::Rc;

// Declare operation submodules
pub mod activation; // relu, tanh
pub mod arithmetic; // add, sub, mul, div, neg, pow
pub mod math_elem; // ln, exp, sin, cos, tan
pub mod traits;

/// Applies a unary operation to a value.
///
/// Handles the shared construction pattern: evaluate the forward function on
/// the operand's data, hand the operand handle and the computed output to the
/// backward builder, and wrap the result in a new non-leaf node. Callers that
/// can fail must validate the domain before calling this.
pub(crate) fn apply_unary_op<T, F, B>(a: &Value<T>, forward: F, backward_builder: B) -> Value<T>
where
    T: Scalar,
    F: Fn(T) -> T,
    B: FnOnce(Value<T>, T) -> Rc<dyn BackwardOp<T>>,
{
    let out_data = forward(a.data());
    let grad_fn = backward_builder(a.clone(), out_data);
    Value::from_op(out_data, grad_fn)
}
