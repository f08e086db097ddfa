use crate::value::Value;

/// The base trait for all neural network modules (neurons, layers, nets).
pub trait Module {
    /// Returns every learnable parameter (weights and biases) of the module,
    /// including those of sub-modules. The returned handles alias the live
    /// parameters, so mutating them through `set_data` updates the module.
    fn parameters(&self) -> Vec<Value<f64>>;

    /// Resets the gradient of every parameter to zero. Callers run this
    /// between optimization steps; gradients accumulate otherwise.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }
}
