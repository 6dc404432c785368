pub mod arch;
pub mod config;
pub mod error;
pub mod init;
pub mod network;
pub mod persistence;
pub mod training;

pub use arch::{Topology, activations::ActFn};
pub use error::{DiwaErr, Result};
pub use network::Network;
pub use training::{Dataset, FitConfig, fit};
