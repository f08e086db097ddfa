use crate::autograd::graph::NodeId;
use crate::autograd::BackwardOp;
use crate::ops::traits::Scalar;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

// --- Implementation modules ---
mod autograd_methods;
mod traits;

/// Internal payload of a graph node.
///
/// `data` is the forward value, `grad` the accumulated partial derivative of
/// the backward root with respect to this node, and `grad_fn` the operation
/// context that produced the node (`None` for leaves). The operand edges of
/// the node live inside `grad_fn`; a leaf has no operands.
pub struct ValueData<T: Scalar> {
    pub data: T,
    pub grad: T,
    pub grad_fn: Option<Rc<dyn BackwardOp<T>>>,
}

/// A scalar value in the computation graph.
///
/// `Value` uses `Rc<RefCell<ValueData>>` internally to allow for:
/// 1. **Shared ownership:** every downstream node that consumes this value
///    holds a handle to the same payload (cheap clones, no data copies), so
///    diamond dependencies are ordinary aliasing rather than duplication.
/// 2. **Interior mutability:** `grad` (and, for training loops, `data`) can
///    be updated through an immutable handle during the backward pass.
///
/// The graph is acyclic by construction (a node is created strictly after
/// its operands), so strong operand references cannot form cycles.
#[derive(Clone)]
pub struct Value<T: Scalar = f64> {
    pub(crate) data: Rc<RefCell<ValueData<T>>>,
}

impl<T: Scalar> Value<T> {
    /// Creates a leaf node from a plain number. Gradient starts at zero.
    pub fn new(data: T) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData {
                data,
                grad: T::zero(),
                grad_fn: None,
            })),
        }
    }

    /// Creates a non-leaf node produced by an operation. Only the `ops`
    /// modules construct these; a failing operation never reaches this point.
    pub(crate) fn from_op(data: T, grad_fn: Rc<dyn BackwardOp<T>>) -> Self {
        Value {
            data: Rc::new(RefCell::new(ValueData {
                data,
                grad: T::zero(),
                grad_fn: Some(grad_fn),
            })),
        }
    }

    /// Returns the forward value.
    pub fn data(&self) -> T {
        self.data.borrow().data
    }

    /// Overwrites the forward value.
    ///
    /// Intended for leaves (parameter updates in a training loop). Writing a
    /// non-leaf is allowed but does not re-evaluate anything downstream or
    /// upstream, so the graph becomes stale; a warning is logged.
    pub fn set_data(&self, value: T) {
        let mut guard = self.data.borrow_mut();
        if guard.grad_fn.is_some() {
            log::warn!(
                "set_data on a non-leaf value: stored operands are not re-evaluated"
            );
        }
        guard.data = value;
    }

    /// Returns the accumulated gradient.
    pub fn grad(&self) -> T {
        self.data.borrow().grad
    }

    /// Overwrites the gradient. Callers use this (or [`Value::zero_grad`])
    /// to reset state between independent backward passes; the engine never
    /// resets gradients on its own.
    pub fn set_grad(&self, grad: T) {
        self.data.borrow_mut().grad = grad;
    }

    /// True for input/constant nodes that no operation produced.
    pub fn is_leaf(&self) -> bool {
        self.data.borrow().grad_fn.is_none()
    }

    /// Returns a clone of the `Rc` pointing to the backward operation
    /// context (`grad_fn`), if any.
    pub fn grad_fn(&self) -> Option<Rc<dyn BackwardOp<T>>> {
        self.data.borrow().grad_fn.clone()
    }

    /// Stable node identity for graph traversal: the payload address.
    /// Handles cloned from the same node compare equal.
    pub(crate) fn node_id(&self) -> NodeId<T> {
        Rc::as_ptr(&self.data)
    }
}

// A derived Debug would descend through `grad_fn` into the whole operand
// graph, which blows up on diamonds. Print the node itself only.
impl<T: Scalar> fmt::Debug for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.data.borrow();
        f.debug_struct("Value")
            .field("data", &guard.data)
            .field("grad", &guard.grad)
            .field("is_leaf", &guard.grad_fn.is_none())
            .finish()
    }
}

impl<T: Scalar> fmt::Display for Value<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value(data={}, grad={})", self.data(), self.grad())
    }
}
