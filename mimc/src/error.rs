use ark_relations::r1cs::SynthesisError;
use ark_serialize::SerializationError;
use ark_std::{fmt::Debug, string::String};

#[derive(Debug)]
pub enum MiMCError {
    /// The circuit was built for a round count but given a different number of round constants.
    /// Contains (expected, found)
    RoundCountMismatch(usize, usize),
    Synthesis(SynthesisError),
    /// Witness does not satisfy the circuit. Contains the name of the failing constraint if known
    Unsatisfied(Option<String>),
    Serialization(SerializationError),
}

impl From<SynthesisError> for MiMCError {
    fn from(e: SynthesisError) -> Self {
        Self::Synthesis(e)
    }
}

impl From<SerializationError> for MiMCError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}
