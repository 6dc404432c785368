//! On-line training, the epoch loop and evaluation helpers.

mod backprop;
mod dataset;
mod eval;
mod fit;

pub use dataset::{Dataset, Sample};
pub use eval::THRESHOLD;
pub use fit::{FitConfig, Trainer, fit};
