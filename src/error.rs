use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, DiwaErr>;

/// The network's error type.
#[derive(Debug)]
pub enum DiwaErr {
    /// The requested topology can't be built.
    InvalidParameters(&'static str),
    /// The backing buffer could not be obtained from the allocator.
    AllocationFailed {
        elements: usize,
    },
    /// The stream could not be opened or its first access failed.
    StreamNotOpen(io::Error),
    /// The stream doesn't start with the model's magic number.
    InvalidMagicNumber([u8; 4]),
    /// The stream ended or failed while reading a model.
    ModelRead(io::Error),
    /// The stream failed while writing a model.
    ModelSave(io::Error),
    /// A persisted count disagrees with the one derived from the persisted topology.
    HeaderMismatch {
        field: &'static str,
        stored: usize,
        derived: usize,
    },
}

impl Display for DiwaErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiwaErr::InvalidParameters(msg) => write!(f, "invalid network parameters: {msg}"),
            DiwaErr::AllocationFailed { elements } => {
                write!(f, "failed to allocate a buffer of {elements} elements")
            }
            DiwaErr::StreamNotOpen(e) => write!(f, "stream is not open: {e}"),
            DiwaErr::InvalidMagicNumber(magic) => write!(
                f,
                "invalid magic number {magic:?}, expected {:?}",
                crate::persistence::MAGIC
            ),
            DiwaErr::ModelRead(e) => write!(f, "failed to read model: {e}"),
            DiwaErr::ModelSave(e) => write!(f, "failed to save model: {e}"),
            DiwaErr::HeaderMismatch {
                field,
                stored,
                derived,
            } => write!(
                f,
                "model header stores {field} = {stored} but its topology derives {derived}"
            ),
        }
    }
}

impl Error for DiwaErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DiwaErr::StreamNotOpen(e) | DiwaErr::ModelRead(e) | DiwaErr::ModelSave(e) => Some(e),
            _ => None,
        }
    }
}
