use ark_relations::r1cs::SynthesisError;
use ark_serialize::SerializationError;
use ark_std::{fmt::Debug, string::String};

#[derive(Debug)]
pub enum ZkSigError {
    /// The circuit was built for a number of keys but given a list of a different size.
    /// Contains (expected, found)
    KeyListLengthMismatch(usize, usize),
    InvalidSignature,
    /// A signature or key component that must be non-zero is zero
    ZeroScalar,
    Synthesis(SynthesisError),
    /// Witness does not satisfy the circuit. Contains the name of the failing constraint if known
    Unsatisfied(Option<String>),
    Serialization(SerializationError),
}

impl From<SynthesisError> for ZkSigError {
    fn from(e: SynthesisError) -> Self {
        Self::Synthesis(e)
    }
}

impl From<SerializationError> for ZkSigError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}
