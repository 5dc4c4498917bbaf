use ark_serialize::{CanonicalSerialize, SerializationError};
use nizkp_utils::r1cs_utils::CircuitShape;
use std::{fmt, time::Duration};

/// Number of bytes of an object when serialized
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SerializedSize {
    pub compressed: usize,
    pub uncompressed: usize,
}

impl SerializedSize {
    /// Measures by serializing into a buffer
    pub fn of<T: CanonicalSerialize>(obj: &T) -> Result<Self, SerializationError> {
        let mut bytes = vec![];
        obj.serialize_compressed(&mut bytes)?;
        let compressed = bytes.len();
        bytes.clear();
        obj.serialize_uncompressed(&mut bytes)?;
        Ok(Self {
            compressed,
            uncompressed: bytes.len(),
        })
    }
}

impl fmt::Display for SerializedSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} compressed, {} uncompressed",
            self.compressed, self.uncompressed
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timings {
    /// Synthesizing the circuit without assignment
    pub compile: Duration,
    pub setup: Duration,
    pub prove: Duration,
    pub verify: Duration,
}

/// What a single Groth16 run of a circuit produced
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Groth16Metrics {
    pub shape: CircuitShape,
    pub proving_key: SerializedSize,
    pub verifying_key: SerializedSize,
    /// Public and private assignment
    pub witness: SerializedSize,
    pub public_witness: SerializedSize,
    pub proof: SerializedSize,
    pub timings: Timings,
}

impl fmt::Display for Groth16Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Circuit metrics:")?;
        writeln!(f, "\tConstraints: {}", self.shape.num_constraints)?;
        // The constant `1` is not a public input
        writeln!(
            f,
            "\tPublic inputs: {}",
            self.shape.num_instance_variables.saturating_sub(1)
        )?;
        writeln!(f, "\tWitness variables: {}", self.shape.num_witness_variables)?;
        writeln!(f, "CRS metrics:")?;
        writeln!(f, "\tSize serialized proving key (bytes): {}", self.proving_key)?;
        writeln!(
            f,
            "\tSize serialized verification key (bytes): {}",
            self.verifying_key
        )?;
        writeln!(f, "Witness metrics:")?;
        writeln!(f, "\tSize serialized full witness (bytes): {}", self.witness)?;
        writeln!(
            f,
            "\tSize serialized public witness (bytes): {}",
            self.public_witness
        )?;
        writeln!(f, "Proof metrics:")?;
        writeln!(f, "\tSize serialized (bytes): {}", self.proof)?;
        writeln!(f, "Timings:")?;
        writeln!(f, "\tCompile: {:?}", self.timings.compile)?;
        writeln!(f, "\tSetup: {:?}", self.timings.setup)?;
        writeln!(f, "\tProve: {:?}", self.timings.prove)?;
        write!(f, "\tVerify: {:?}", self.timings.verify)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bls12_381::Fr;
    use ark_ff::One;

    #[test]
    fn serialized_size() {
        let size = SerializedSize::of(&Fr::one()).unwrap();
        assert_eq!(size.compressed, 32);
        assert_eq!(size.uncompressed, 32);

        // Length prefix and elements
        let size = SerializedSize::of(&vec![Fr::one(); 3]).unwrap();
        assert_eq!(size.compressed, 8 + 3 * 32);
        assert_eq!(size.to_string(), "104 compressed, 104 uncompressed");
    }
}
