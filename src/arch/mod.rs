pub mod activations;
mod layout;
mod topology;

pub use layout::{LayerSpan, Layout};
pub use topology::{Topology, counts};
