use crate::value::Value;

/// Mean squared error between predictions and plain-number targets.
///
/// Builds the loss as part of the computation graph, so `backward()` on the
/// result reaches every parameter the predictions were computed from.
///
/// # Panics
/// If the slices differ in length or are empty.
pub fn mse_loss(predictions: &[Value<f64>], targets: &[f64]) -> Value<f64> {
    assert_eq!(
        predictions.len(),
        targets.len(),
        "prediction/target count mismatch"
    );
    assert!(!predictions.is_empty(), "mse_loss needs at least one sample");

    let mut total = Value::new(0.0);
    for (prediction, &target) in predictions.iter().zip(targets) {
        let diff = prediction - target;
        total = total + &diff * &diff;
    }
    total / predictions.len() as f64
}
