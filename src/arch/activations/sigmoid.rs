use super::clamped;

/// The logistic function, saturated outside of the activation bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sigmoid;

impl Sigmoid {
    pub fn f(&self, x: f64) -> f64 {
        clamped(x, |x| 1. / (1. + (-x).exp()))
    }
}
