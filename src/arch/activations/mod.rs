mod act_fn;
mod gaussian;
mod sigmoid;

pub use act_fn::ActFn;
pub use gaussian::Gaussian;
pub use sigmoid::Sigmoid;

/// Inputs below this bound saturate to `0`.
pub const LOWER_BOUND: f64 = -30.0;
/// Inputs above this bound saturate to `1`.
pub const UPPER_BOUND: f64 = 30.0;

/// Saturates `x` outside of `[LOWER_BOUND, UPPER_BOUND]`, otherwise applies `f`.
#[inline]
fn clamped(x: f64, f: impl FnOnce(f64) -> f64) -> f64 {
    if x < LOWER_BOUND {
        0.
    } else if x > UPPER_BOUND {
        1.
    } else {
        f(x)
    }
}
