//! Scalar neural-network building blocks on top of the engine.
//!
//! Everything here is an ordinary consumer of the public `Value` API: a
//! neuron is an expression template, and training is zero_grad, backward,
//! then descend on `data`. The whole module commits to `f64`.

pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::Neuron;
