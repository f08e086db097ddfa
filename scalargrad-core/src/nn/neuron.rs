use crate::nn::init;
use crate::nn::module::Module;
use crate::value::Value;

/// A single scalar neuron: `tanh(w . x + b)`.
#[derive(Debug)]
pub struct Neuron {
    weights: Vec<Value<f64>>,
    bias: Value<f64>,
}

impl Neuron {
    /// Creates a neuron with `in_features` Gaussian-initialized weights and
    /// a Gaussian-initialized bias.
    pub fn new(in_features: usize) -> Self {
        Neuron {
            weights: (0..in_features)
                .map(|_| Value::new(init::randn()))
                .collect(),
            bias: Value::new(init::randn()),
        }
    }

    /// Weighted sum of the inputs plus bias, squashed through tanh.
    ///
    /// # Panics
    /// If `inputs` does not match the neuron's input width.
    pub fn forward(&self, inputs: &[Value<f64>]) -> Value<f64> {
        assert_eq!(
            inputs.len(),
            self.weights.len(),
            "input feature count mismatch"
        );
        let mut activation = self.bias.clone();
        for (weight, input) in self.weights.iter().zip(inputs) {
            activation = activation + weight * input;
        }
        activation.tanh()
    }
}

impl Module for Neuron {
    fn parameters(&self) -> Vec<Value<f64>> {
        let mut params = self.weights.clone();
        params.push(self.bias.clone());
        params
    }
}
