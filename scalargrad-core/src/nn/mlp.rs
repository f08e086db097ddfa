use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::value::Value;

/// A multi-layer perceptron over scalar values.
#[derive(Debug)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// `layer_sizes` lists the width of every layer after the input, so
    /// `Mlp::new(2, &[4, 4, 1])` is a 2-input net with two hidden layers of
    /// four neurons and a single output.
    pub fn new(in_features: usize, layer_sizes: &[usize]) -> Self {
        let mut sizes = Vec::with_capacity(layer_sizes.len() + 1);
        sizes.push(in_features);
        sizes.extend_from_slice(layer_sizes);
        Mlp {
            layers: sizes
                .windows(2)
                .map(|pair| Layer::new(pair[0], pair[1]))
                .collect(),
        }
    }

    pub fn forward(&self, inputs: &[Value<f64>]) -> Vec<Value<f64>> {
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations);
        }
        activations
    }
}

impl Module for Mlp {
    fn parameters(&self) -> Vec<Value<f64>> {
        self.layers
            .iter()
            .flat_map(|layer| layer.parameters())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mlp_parameter_count() {
        let mlp = Mlp::new(2, &[4, 4, 1]);
        // 4*(2+1) + 4*(4+1) + 1*(4+1)
        assert_eq!(mlp.parameters().len(), 37);
    }

    #[test]
    fn test_mlp_forward_shape() {
        let mlp = Mlp::new(3, &[5, 2]);
        let inputs: Vec<Value<f64>> = (0..3).map(|_| Value::new(0.0)).collect();
        let outputs = mlp.forward(&inputs);
        assert_eq!(outputs.len(), 2);
    }

    #[test]
    fn test_mlp_zero_grad_resets_every_parameter() {
        let mlp = Mlp::new(2, &[3, 1]);
        let inputs = [Value::new(0.5), Value::new(-0.5)];
        let out = mlp.forward(&inputs).remove(0);
        out.backward();
        assert!(mlp.parameters().iter().any(|p| p.grad() != 0.0));

        mlp.zero_grad();
        assert!(mlp.parameters().iter().all(|p| p.grad() == 0.0));
    }
}
