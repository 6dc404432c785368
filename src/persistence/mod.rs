//! The binary model format: the magic number, a `Header` and the raw weights, all
//! little-endian.

mod header;

pub use header::Header;

use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::Path,
};

use log::debug;

use crate::{
    DiwaErr, Result,
    arch::Layout,
    network::{NetBuffer, Network},
};

/// The first four bytes of every model.
pub const MAGIC: [u8; 4] = *b"diwa";

/// Weights decoded per read while loading.
const CHUNK: usize = 512;

impl Network {
    /// Writes the network's topology and weights to `writer`.
    ///
    /// # Returns
    /// `StreamNotOpen` if the magic number can't be written, `ModelSave` if anything after it
    /// fails.
    pub fn save<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(&MAGIC).map_err(DiwaErr::StreamNotOpen)?;

        let header = Header::from_topology(self.topology());
        writer
            .write_all(&header.encode())
            .map_err(DiwaErr::ModelSave)?;

        for weight in self.weights() {
            writer
                .write_all(&weight.to_le_bytes())
                .map_err(DiwaErr::ModelSave)?;
        }

        writer.flush().map_err(DiwaErr::ModelSave)?;

        debug!(header:? = header; "model saved");
        Ok(())
    }

    /// Replaces the network with the one stored in `reader`.
    ///
    /// The network is only modified once the whole model has been read and validated, any
    /// error leaves it as it was. An all-zero header empties the network.
    ///
    /// # Returns
    /// `StreamNotOpen` if the stream fails before the magic number is read,
    /// `InvalidMagicNumber` if it doesn't start with `MAGIC`, `InvalidParameters` or
    /// `HeaderMismatch` if the header is invalid and `ModelRead` if the stream is cut short.
    pub fn load<R: Read>(&mut self, mut reader: R) -> Result<()> {
        let mut magic = [0; 4];
        reader.read_exact(&mut magic).map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => DiwaErr::InvalidMagicNumber(magic),
            _ => DiwaErr::StreamNotOpen(e),
        })?;

        if magic != MAGIC {
            return Err(DiwaErr::InvalidMagicNumber(magic));
        }

        let mut bytes = [0; Header::SIZE];
        reader.read_exact(&mut bytes).map_err(DiwaErr::ModelRead)?;

        let header = Header::decode(&bytes);
        let layout = Layout::new(header.topology()?);
        let mut buffer = NetBuffer::allocate(layout.weight_count(), layout.neuron_count())?;

        read_weights(&mut reader, buffer.weights_mut()).map_err(DiwaErr::ModelRead)?;

        debug!(header:? = header; "model loaded");
        self.install(layout, buffer);
        Ok(())
    }

    /// Saves the network to the file at `path`, creating or truncating it.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(DiwaErr::StreamNotOpen)?;
        self.save(BufWriter::new(file))
    }

    /// Loads the network from the file at `path`.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let file = File::open(path).map_err(DiwaErr::StreamNotOpen)?;
        self.load(BufReader::new(file))
    }
}

fn read_weights<R: Read>(reader: &mut R, weights: &mut [f64]) -> io::Result<()> {
    let mut bytes = [0; CHUNK * size_of::<f64>()];

    for chunk in weights.chunks_mut(CHUNK) {
        let bytes = &mut bytes[..chunk.len() * size_of::<f64>()];
        reader.read_exact(bytes)?;

        for (weight, raw) in chunk.iter_mut().zip(bytes.chunks_exact(size_of::<f64>())) {
            let mut le = [0; size_of::<f64>()];
            le.copy_from_slice(raw);
            *weight = f64::from_le_bytes(le);
        }
    }

    Ok(())
}
