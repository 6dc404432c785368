use super::{Gaussian, Sigmoid};

/// The transfer function applied to every neuron's weighted sum.
///
/// Training always uses the logistic derivative `y * (1 - y)` computed from a neuron's
/// output, which is only the true derivative for `Sigmoid`. Other functions still train,
/// but along that surrogate gradient.
#[derive(Clone, Copy, Debug)]
pub enum ActFn {
    Sigmoid(Sigmoid),
    Gaussian(Gaussian),
    Custom(fn(f64) -> f64),
}

impl ActFn {
    pub fn sigmoid() -> Self {
        Self::Sigmoid(Sigmoid)
    }

    pub fn gaussian() -> Self {
        Self::Gaussian(Gaussian)
    }

    pub fn custom(f: fn(f64) -> f64) -> Self {
        Self::Custom(f)
    }

    #[inline]
    pub fn f(&self, x: f64) -> f64 {
        match self {
            Self::Sigmoid(a) => a.f(x),
            Self::Gaussian(a) => a.f(x),
            Self::Custom(f) => f(x),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sigmoid(_) => "sigmoid",
            Self::Gaussian(_) => "gaussian",
            Self::Custom(_) => "custom",
        }
    }
}

impl Default for ActFn {
    fn default() -> Self {
        Self::sigmoid()
    }
}
