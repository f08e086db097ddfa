use crate::value::Value;

/// Checks that a value's forward data is within tolerance of the expected
/// number. Panics with a detailed message otherwise.
pub fn check_value_near(actual: &Value<f64>, expected: f64, tolerance: f64) {
    let data = actual.data();
    let diff = (data - expected).abs();
    if diff > tolerance {
        panic!(
            "data mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            data, expected, diff, tolerance
        );
    }
}

/// Checks that a value's accumulated gradient is within tolerance of the
/// expected number. Panics with a detailed message otherwise.
pub fn check_grad_near(actual: &Value<f64>, expected: f64, tolerance: f64) {
    let grad = actual.grad();
    let diff = (grad - expected).abs();
    if diff > tolerance {
        panic!(
            "grad mismatch: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            grad, expected, diff, tolerance
        );
    }
}
