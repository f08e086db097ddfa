use crate::error::ScalarGradError;
use crate::ops::arithmetic::pow::{pow_op, powf_op};
use crate::value::Value;
use approx::assert_relative_eq;

#[test]
fn test_power_rule() {
    let x = Value::new(2.0);
    let y = powf_op(&x, 3.0).unwrap();
    assert_eq!(y.data(), 8.0);

    y.backward();
    assert_eq!(x.grad(), 12.0); // 3 * 2^2
}

#[test]
fn test_powf_fractional_exponent_on_positive_base() {
    let x = Value::new(4.0);
    let y = x.powf(0.5).unwrap();
    assert_relative_eq!(y.data(), 2.0, epsilon = 1e-12);

    y.backward();
    assert_relative_eq!(x.grad(), 0.25, epsilon = 1e-12); // 0.5 * 4^(-0.5)
}

#[test]
fn test_powf_negative_base_integer_exponent_is_allowed() {
    let x = Value::new(-2.0);
    let y = x.powf(3.0).unwrap();
    assert_eq!(y.data(), -8.0);

    y.backward();
    assert_eq!(x.grad(), 12.0); // 3 * (-2)^2
}

#[test]
fn test_powf_negative_base_fractional_exponent_is_invalid_domain() {
    let x = Value::new(-2.0);
    let err = x.powf(0.5).unwrap_err();
    assert_eq!(
        err,
        ScalarGradError::InvalidDomain {
            operation: "powf",
            value: -2.0,
        }
    );
    // The failing operation produced no node and left the operand untouched.
    assert_eq!(x.data(), -2.0);
    assert_eq!(x.grad(), 0.0);
    assert!(x.is_leaf());
}

#[test]
fn test_value_to_the_value_identity() {
    // base^exp computed as exp(exp * ln(base))
    let base = Value::new(2.0);
    let exponent = Value::new(3.0);
    let out = pow_op(&base, &exponent).unwrap();
    assert_relative_eq!(out.data(), 8.0, epsilon = 1e-9);
    assert_relative_eq!(out.data(), (3.0 * 2.0f64.ln()).exp(), epsilon = 1e-12);
}

#[test]
fn test_value_to_the_value_gradients() {
    // d(a^b)/da = b * a^(b-1), d(a^b)/db = a^b * ln a
    let base = Value::new(2.0);
    let exponent = Value::new(3.0);
    let out = base.pow(&exponent).unwrap();

    out.backward();
    assert_relative_eq!(base.grad(), 12.0, epsilon = 1e-9);
    assert_relative_eq!(exponent.grad(), 8.0 * 2.0f64.ln(), epsilon = 1e-9);
}

#[test]
fn test_value_to_the_value_non_positive_base_is_invalid_domain() {
    let exponent = Value::new(3.0);

    let zero_base = Value::new(0.0);
    assert_eq!(
        zero_base.pow(&exponent).unwrap_err(),
        ScalarGradError::InvalidDomain {
            operation: "pow",
            value: 0.0,
        }
    );

    let negative_base = Value::new(-1.5);
    assert!(negative_base.pow(&exponent).is_err());
    // No partial graph: both operands are still untouched leaves.
    assert_eq!(negative_base.grad(), 0.0);
    assert_eq!(exponent.grad(), 0.0);
    assert!(negative_base.is_leaf());
}

#[test]
fn test_powf_zero_base_negative_exponent_overflows_silently() {
    let x = Value::<f64>::new(0.0);
    let y = x.powf(-1.0).unwrap();
    assert!(y.data().is_infinite());
}
