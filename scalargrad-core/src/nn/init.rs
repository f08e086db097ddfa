use rand::Rng;
use rand_distr::StandardNormal;

/// Samples one weight from the standard normal distribution.
pub fn randn() -> f64 {
    let mut rng = rand::thread_rng();
    rng.sample(StandardNormal)
}
