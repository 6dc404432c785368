use crate::{DiwaErr, Result, arch::Topology};

/// The six little-endian `i32` fields following the magic number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub inputs: i32,
    pub hidden_neurons: i32,
    pub hidden_layers: i32,
    pub outputs: i32,
    pub weight_count: i32,
    pub neuron_count: i32,
}

impl Header {
    /// The encoded size in bytes.
    pub const SIZE: usize = 6 * size_of::<i32>();

    /// Creates the header describing `topology`.
    pub fn from_topology(topology: &Topology) -> Self {
        Self {
            inputs: field(topology.inputs()),
            hidden_neurons: field(topology.hidden_neurons()),
            hidden_layers: field(topology.hidden_layers()),
            outputs: field(topology.outputs()),
            weight_count: field(topology.weight_count()),
            neuron_count: field(topology.neuron_count()),
        }
    }

    pub fn encode(&self) -> [u8; Self::SIZE] {
        let fields = [
            self.inputs,
            self.hidden_neurons,
            self.hidden_layers,
            self.outputs,
            self.weight_count,
            self.neuron_count,
        ];

        let mut bytes = [0; Self::SIZE];
        for (chunk, field) in bytes.chunks_exact_mut(size_of::<i32>()).zip(fields) {
            chunk.copy_from_slice(&field.to_le_bytes());
        }

        bytes
    }

    pub fn decode(bytes: &[u8; Self::SIZE]) -> Self {
        let [
            inputs,
            hidden_neurons,
            hidden_layers,
            outputs,
            weight_count,
            neuron_count,
        ] = std::array::from_fn(|i| {
            let at = i * size_of::<i32>();
            i32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        });

        Self {
            inputs,
            hidden_neurons,
            hidden_layers,
            outputs,
            weight_count,
            neuron_count,
        }
    }

    /// Validates the stored topology and checks the stored counts against it.
    ///
    /// # Returns
    /// The topology, `InvalidParameters` if it can't be built or `HeaderMismatch` if a
    /// stored count isn't the derived one.
    pub fn topology(&self) -> Result<Topology> {
        let topology = Topology::from_signed(
            self.inputs,
            self.hidden_layers,
            self.hidden_neurons,
            self.outputs,
        )?;

        check("weight_count", self.weight_count, topology.weight_count())?;
        check("neuron_count", self.neuron_count, topology.neuron_count())?;

        Ok(topology)
    }
}

/// Every count of a valid `Topology` fits an `i32`.
fn field(n: usize) -> i32 {
    debug_assert!(n <= i32::MAX as usize);
    n as i32
}

fn check(field: &'static str, stored: i32, derived: usize) -> Result<()> {
    let stored = usize::try_from(stored)
        .map_err(|_| DiwaErr::InvalidParameters("stored counts can't be negative"))?;

    if stored != derived {
        return Err(DiwaErr::HeaderMismatch {
            field,
            stored,
            derived,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_order() {
        let header = Header::from_topology(&Topology::new(2, 1, 3, 1).unwrap());
        let bytes = header.encode();

        let expected: Vec<u8> = [2i32, 3, 1, 1, 13, 6]
            .iter()
            .flat_map(|n| n.to_le_bytes())
            .collect();

        assert_eq!(bytes.as_slice(), expected);
        assert_eq!(Header::decode(&bytes), header);
    }

    #[test]
    fn hidden_fields_are_not_swapped() {
        let topology = Topology::new(4, 2, 7, 3).unwrap();
        let header = Header::from_topology(&topology);

        assert_eq!(header.hidden_neurons, 7);
        assert_eq!(header.hidden_layers, 2);
        assert_eq!(header.topology().unwrap(), topology);
    }

    #[test]
    fn detects_count_mismatch() {
        let mut header = Header::from_topology(&Topology::new(2, 1, 3, 1).unwrap());
        header.weight_count = 12;

        assert!(matches!(
            header.topology(),
            Err(DiwaErr::HeaderMismatch {
                field: "weight_count",
                stored: 12,
                derived: 13,
            })
        ));
    }

    #[test]
    fn rejects_negative_fields() {
        let mut header = Header::from_topology(&Topology::new(2, 1, 3, 1).unwrap());
        header.neuron_count = -6;
        assert!(matches!(header.topology(), Err(DiwaErr::InvalidParameters(_))));

        header.neuron_count = 6;
        header.hidden_layers = -1;
        assert!(matches!(header.topology(), Err(DiwaErr::InvalidParameters(_))));
    }

    #[test]
    fn empty_topology() {
        let header = Header::from_topology(&Topology::EMPTY);
        assert_eq!(header.encode(), [0; Header::SIZE]);
        assert!(header.topology().unwrap().is_empty());
    }
}
