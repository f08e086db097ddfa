//! Trains a small scalar MLP with a hand-rolled gradient-descent loop.
//!
//! The loop shows the complete engine contract from the consumer side:
//! 1. build the loss expression (forward pass over every sample),
//! 2. `zero_grad` the parameters,
//! 3. `backward` on the loss,
//! 4. descend: `data += -learning_rate * grad`.
//!
//! Run with `cargo run --example train_mlp`.

use scalargrad_core::nn::{losses::mse_loss, Mlp, Module};
use scalargrad_core::Value;

fn main() {
    let mlp = Mlp::new(2, &[4, 4, 1]);

    // A 2-bit pattern the net has to memorize.
    let samples: [[f64; 2]; 4] = [[1.0, 1.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]];
    let targets = [1.0, 0.0, 0.0, 1.0];

    let learning_rate = 0.05;
    for epoch in 0..200 {
        let predictions: Vec<Value> = samples
            .iter()
            .map(|sample| {
                let inputs: Vec<Value> = sample.iter().map(|&x| Value::new(x)).collect();
                mlp.forward(&inputs).remove(0)
            })
            .collect();
        let loss = mse_loss(&predictions, &targets);

        mlp.zero_grad();
        loss.backward();

        for param in mlp.parameters() {
            param.set_data(param.data() - learning_rate * param.grad());
        }

        if epoch % 20 == 0 {
            println!("epoch {epoch:3}  loss {:.6}", loss.data());
        }
    }

    println!();
    for (sample, target) in samples.iter().zip(&targets) {
        let inputs: Vec<Value> = sample.iter().map(|&x| Value::new(x)).collect();
        let prediction = mlp.forward(&inputs).remove(0);
        println!(
            "input {:?} -> predicted {:+.4} (target {:+.1})",
            sample,
            prediction.data(),
            target
        );
    }
}
