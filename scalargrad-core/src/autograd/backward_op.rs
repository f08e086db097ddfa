use crate::ops::traits::Scalar;
use crate::value::Value;
use std::fmt::Debug;

/// Defines the backward pass of a differentiable scalar operation.
///
/// Every operation that creates a non-leaf [`Value`] stores one of these in
/// the output's `grad_fn` field. During [`Value::backward`] the driver reads
/// the output's accumulated gradient (dRoot/dOutput), hands it to
/// [`BackwardOp::backward`], and adds the returned contributions into the
/// operands' gradients.
pub trait BackwardOp<T: Scalar>: Debug {
    /// Computes the chain-rule contribution for each input, given the
    /// gradient flowing into this operation's output.
    ///
    /// The order of the returned contributions **must** strictly match the
    /// order of the handles returned by [`BackwardOp::inputs`]. The method
    /// must not mutate any node; accumulation is the driver's job.
    fn backward(&self, grad_output: T) -> Vec<T>;

    /// The operand nodes that participated in the forward operation.
    ///
    /// These are the consumer-to-producer edges of the DAG. A node consumed
    /// twice (e.g. `x * x`) appears twice so that both contributions from
    /// [`BackwardOp::backward`] accumulate; the traversal deduplicates by
    /// node identity, so the duplicate never causes a double visit.
    fn inputs(&self) -> Vec<Value<T>>;
}
