pub mod cos;
pub mod exp;
pub mod ln;
pub mod sin;
pub mod tan;

pub use cos::cos_op;
pub use exp::exp_op;
pub use ln::ln_op;
pub use sin::sin_op;
pub use tan::tan_op;
