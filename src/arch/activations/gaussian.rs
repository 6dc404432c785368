use super::clamped;

/// The bell curve `e^(-x²)`, saturated like the sigmoid outside of the activation bounds.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gaussian;

impl Gaussian {
    pub fn f(&self, x: f64) -> f64 {
        clamped(x, |x| 1. / (x * x).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peak() {
        assert_eq!(Gaussian.f(0.), 1.);
        assert!((Gaussian.f(1.) - (-1f64).exp()).abs() < 1e-15);
        assert_eq!(Gaussian.f(2.), Gaussian.f(-2.));
    }

    #[test]
    fn saturates_outside_bounds() {
        assert_eq!(Gaussian.f(-31.), 0.);
        assert_eq!(Gaussian.f(31.), 1.);
    }
}
