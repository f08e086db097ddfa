use crate::error::ScalarGradError;
use crate::value::Value;
use approx::{abs_diff_eq, relative_eq};
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("gradient check failed for input {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad} (difference {difference})")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("forward function failed during gradient check: {0}")]
    ForwardPassError(#[from] ScalarGradError),

    #[error("numerical gradient is not finite for input {input_index} (loss+: {loss_plus}, loss-: {loss_minus})")]
    NumericalGradNotFinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("analytical gradient is not finite for input {input_index}: {value}")]
    AnalyticalGradNotFinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against central finite differences.
///
/// `func` must rebuild its expression from the supplied leaves on every
/// call: one clean build for the analytical backward pass, then two probe
/// builds per input for `(f(x+eps) - f(x-eps)) / 2eps`. The probes use fresh
/// leaf nodes, so they never disturb the caller's graph.
///
/// The comparison accepts either absolute or relative agreement within
/// `tolerance`, so it behaves sensibly for both tiny and large gradients.
/// Like the engine's `nn` surface this is `f64`-only.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value<f64>],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value<f64>]) -> Result<Value<f64>, ScalarGradError>,
{
    // --- 1. Analytical gradients from a clean backward pass ---
    for input in inputs {
        input.zero_grad();
    }
    let output = func(inputs)?;
    output.backward();
    let analytical_grads: Vec<f64> = inputs.iter().map(|v| v.grad()).collect();

    // --- 2. Numerical gradient per input ---
    for (i, original) in inputs.iter().enumerate() {
        let base = original.data();

        let loss_plus = func(&perturbed_inputs(inputs, i, base + epsilon))?.data();
        let loss_minus = func(&perturbed_inputs(inputs, i, base - epsilon))?.data();
        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNotFinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }
        let analytical_grad = analytical_grads[i];
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNotFinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        // --- 3. Compare ---
        if !(abs_diff_eq!(analytical_grad, numerical_grad, epsilon = tolerance)
            || relative_eq!(analytical_grad, numerical_grad, max_relative = tolerance))
        {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Fresh leaves for a probe build, with input `index` set to `value`.
fn perturbed_inputs(inputs: &[Value<f64>], index: usize, value: f64) -> Vec<Value<f64>> {
    inputs
        .iter()
        .enumerate()
        .map(|(j, v)| {
            if j == index {
                Value::new(value)
            } else {
                Value::new(v.data())
            }
        })
        .collect()
}

// --- Tests ---
