use ark_relations::r1cs::SynthesisError;
use ark_serialize::SerializationError;
use mimc::MiMCError;
use zk_signatures::ZkSigError;

#[derive(Debug)]
pub enum BenchmarkError {
    MiMC(MiMCError),
    ZkSig(ZkSigError),
    Synthesis(SynthesisError),
    /// Proof was created but the verifier rejected it
    InvalidProof,
    /// Signature membership needs at least the signer's key in the list
    EmptyKeyList,
    Serialization(SerializationError),
}

impl From<MiMCError> for BenchmarkError {
    fn from(e: MiMCError) -> Self {
        Self::MiMC(e)
    }
}

impl From<ZkSigError> for BenchmarkError {
    fn from(e: ZkSigError) -> Self {
        Self::ZkSig(e)
    }
}

impl From<SynthesisError> for BenchmarkError {
    fn from(e: SynthesisError) -> Self {
        Self::Synthesis(e)
    }
}

impl From<SerializationError> for BenchmarkError {
    fn from(e: SerializationError) -> Self {
        Self::Serialization(e)
    }
}
