use num_traits::Float;
use std::fmt::{Debug, Display};

/// Numeric bound for every value stored in the graph.
///
/// `Float` supplies the transcendental functions the operation set needs
/// (`ln`, `exp`, `sin`, `powf`, ...) plus `ToPrimitive` for error reporting.
/// `f32` and `f64` are the intended instantiations; the `nn` module commits
/// to `f64`.
pub trait Scalar: Float + Debug + Display + 'static {}

impl<T> Scalar for T where T: Float + Debug + Display + 'static {}
