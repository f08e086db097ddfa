use crate::nn::module::Module;
use crate::nn::neuron::Neuron;
use crate::value::Value;

/// A fully-connected layer: `out_features` independent neurons reading the
/// same inputs.
#[derive(Debug)]
pub struct Layer {
    neurons: Vec<Neuron>,
}

impl Layer {
    pub fn new(in_features: usize, out_features: usize) -> Self {
        Layer {
            neurons: (0..out_features).map(|_| Neuron::new(in_features)).collect(),
        }
    }

    pub fn forward(&self, inputs: &[Value<f64>]) -> Vec<Value<f64>> {
        self.neurons
            .iter()
            .map(|neuron| neuron.forward(inputs))
            .collect()
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn parameters(&self) -> Vec<Value<f64>> {
        self.neurons
            .iter()
            .flat_map(|neuron| neuron.parameters())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_shapes() {
        let layer = Layer::new(3, 2);
        assert_eq!(layer.out_features(), 2);
        // 2 neurons * (3 weights + 1 bias)
        assert_eq!(layer.parameters().len(), 8);

        let inputs: Vec<Value<f64>> = vec![Value::new(0.1), Value::new(0.2), Value::new(0.3)];
        assert_eq!(layer.forward(&inputs).len(), 2);
    }
}
