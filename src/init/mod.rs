mod constant;
mod param_gen;
mod random;

pub use constant::ConstParamGen;
pub use param_gen::ParamGen;
pub use random::RandParamGen;

/// Inclusive lower limit of freshly randomized weights.
pub const WEIGHT_LOW: f64 = -0.5;
/// Exclusive upper limit of freshly randomized weights.
pub const WEIGHT_HIGH: f64 = 0.5;
