use crate::autograd::graph::topological_sort;
use crate::ops::traits::Scalar;
use crate::value::Value;

impl<T: Scalar> Value<T> {
    /// Adds a backward contribution into this node's gradient.
    /// Accumulation, never overwrite: two sibling consumers of the same
    /// producer both land their contribution here.
    pub(crate) fn acc_grad(&self, grad_to_add: T) {
        let mut guard = self.data.borrow_mut();
        guard.grad = guard.grad + grad_to_add;
    }

    /// Resets the gradient to zero. Equivalent to `set_grad(0)`; callers run
    /// this over their parameters between optimization steps.
    pub fn zero_grad(&self) {
        self.set_grad(T::zero());
    }

    /// Performs the backward pass starting from this value.
    ///
    /// Computes, for every node reachable from `self` through operand edges
    /// (including `self`), the partial derivative of `self`'s value with
    /// respect to that node, accumulated into the node's `grad`.
    ///
    /// The pass seeds `self.grad = 1` (dSelf/dSelf), then invokes each
    /// node's backward rule exactly once in reverse topological order, so a
    /// rule only runs after every consumer of that node has contributed.
    ///
    /// Gradients are never cleared here: nodes with no path to `self` keep
    /// whatever gradient they had, and a second `backward` on the same graph
    /// without an external reset accumulates on top of the first.
    pub fn backward(&self) {
        let sorted = topological_sort(self);
        log::debug!("backward: propagating through {} nodes", sorted.len());

        // Seed gradient: dSelf/dSelf = 1. Assignment, not accumulation.
        self.data.borrow_mut().grad = T::one();

        for node in sorted.iter().rev() {
            if let Some(grad_fn) = node.grad_fn() {
                let grad_output = node.grad();
                let contributions = grad_fn.backward(grad_output);
                let inputs = grad_fn.inputs();
                debug_assert_eq!(
                    contributions.len(),
                    inputs.len(),
                    "backward rule returned {} contributions for {} inputs",
                    contributions.len(),
                    inputs.len()
                );
                for (input, contribution) in inputs.iter().zip(contributions) {
                    input.acc_grad(contribution);
                }
            }
        }
    }
}

// --- Tests ---
#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
