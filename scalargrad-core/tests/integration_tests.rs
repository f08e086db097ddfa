use approx::assert_relative_eq;
use scalargrad_core::autograd::grad_check::check_grad;
use scalargrad_core::nn::{losses::mse_loss, Mlp, Module};
use scalargrad_core::Value;

#[test]
fn composed_expression_matches_finite_differences() {
    // f(x) = sin(x^2) * exp(cos x) + ln(x + 1)
    let inputs = vec![Value::new(0.5)];
    check_grad(
        |vars| {
            let x = &vars[0];
            let wave = x.powf(2.0)?.sin();
            let envelope = x.cos().exp();
            let offset = (x + 1.0).ln()?;
            Ok(&wave * &envelope + offset)
        },
        &inputs,
        1e-6,
        1e-6,
    )
    .unwrap();
}

#[test]
fn two_variable_expression_with_shared_subterms() {
    // f(a, b) = (a + b) * (a + b) + tanh(a * b)
    let inputs = vec![Value::new(0.3), Value::new(-1.1)];
    check_grad(
        |vars| {
            let a = &vars[0];
            let b = &vars[1];
            let sum = a + b;
            Ok(&sum * &sum + (a * b).tanh())
        },
        &inputs,
        1e-6,
        1e-6,
    )
    .unwrap();
}

#[test]
fn value_exponent_power_matches_finite_differences() {
    let inputs = vec![Value::new(2.0), Value::new(3.0)];
    check_grad(
        |vars| vars[0].pow(&vars[1]),
        &inputs,
        1e-6,
        1e-6,
    )
    .unwrap();
}

#[test]
fn generic_over_f32() {
    let x: Value<f32> = Value::new(3.0);
    let y = &x * &x;
    assert_eq!(y.data(), 9.0);

    y.backward();
    assert_eq!(x.grad(), 6.0);
}

#[test]
fn training_reduces_mse() {
    let mlp = Mlp::new(2, &[4, 1]);
    let samples: [[f64; 2]; 4] = [[1.0, 1.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]];
    let targets = [1.0, 0.0, 0.0, 1.0];

    let run_epoch = |update: bool| -> f64 {
        let predictions: Vec<Value> = samples
            .iter()
            .map(|sample| {
                let inputs: Vec<Value> = sample.iter().map(|&x| Value::new(x)).collect();
                mlp.forward(&inputs).remove(0)
            })
            .collect();
        let loss = mse_loss(&predictions, &targets);
        if update {
            mlp.zero_grad();
            loss.backward();
            for param in mlp.parameters() {
                param.set_data(param.data() - 0.05 * param.grad());
            }
        }
        loss.data()
    };

    let initial_loss = run_epoch(false);
    for _ in 0..100 {
        run_epoch(true);
    }
    let final_loss = run_epoch(false);

    assert!(
        final_loss < initial_loss,
        "loss did not decrease: {} -> {}",
        initial_loss,
        final_loss
    );
}

#[test]
fn gradients_survive_many_composition_layers() {
    // A deep chain: x -> ((x * 1.01 + 0.01) repeated) keeps a well-defined
    // gradient equal to 1.01^depth.
    let x = Value::new(0.5);
    let mut node = x.clone();
    let depth = 100;
    for _ in 0..depth {
        node = node * 1.01 + 0.01;
    }

    node.backward();
    assert_relative_eq!(x.grad(), 1.01f64.powi(depth), epsilon = 1e-9);
}
