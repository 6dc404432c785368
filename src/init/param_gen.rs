/// A `ParamGen` generates values for the initial state of a network's weights.
pub trait ParamGen {
    /// Overwrites every element of `params` with a generated value.
    ///
    /// # Arguments
    /// * `params` - The weights to initialize.
    fn fill(&mut self, params: &mut [f64]);
}
