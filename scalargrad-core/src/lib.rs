//! # ScalarGrad core
//!
//! A scalar reverse-mode automatic differentiation engine. Arithmetic and
//! transcendental operations on [`Value`] handles lazily build a DAG; calling
//! [`Value::backward`] on a scalar root runs a single reverse traversal that
//! accumulates the exact partial derivative of the root into every upstream
//! node's `grad`.

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod utils;
pub mod value;

// Re-export the handle type so it is accessible directly via `scalargrad_core::Value`.
pub use value::Value;
// Re-export traits required by public functions/structs.
pub use num_traits;
pub use ops::traits::Scalar;

pub use error::ScalarGradError;
