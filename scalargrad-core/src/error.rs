use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
///
/// The engine has exactly one failure mode: an operation whose real-valued
/// result does not exist for the given operand. The error is raised at
/// construction time, before any output node is allocated, so a failing
/// operation leaves the graph untouched.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("invalid domain for operation '{operation}': input value {value}")]
    InvalidDomain {
        operation: &'static str,
        value: f64,
    },
}
