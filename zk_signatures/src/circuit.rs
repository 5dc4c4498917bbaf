use crate::{
    ecdsa::ECDSAMembershipCircuit, eddsa::EdDSAMembershipCircuit, error::ZkSigError,
};
use ark_bn254::Fr;
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use ark_std::vec::Vec;

/// A membership circuit for one of the supported signature schemes. All are over the BN254 scalar
/// field.
#[derive(Clone, Debug)]
pub enum MembershipCircuit {
    EdDsa(EdDSAMembershipCircuit),
    Ecdsa(ECDSAMembershipCircuit),
}

impl MembershipCircuit {
    pub fn key_list_len(&self) -> usize {
        match self {
            Self::EdDsa(c) => c.key_list_len(),
            Self::Ecdsa(c) => c.key_list_len(),
        }
    }

    pub fn public_inputs(&self) -> Result<Vec<Fr>, ZkSigError> {
        match self {
            Self::EdDsa(c) => c.public_inputs(),
            Self::Ecdsa(c) => c.public_inputs(),
        }
    }

    pub fn is_solved(&self) -> Result<(), ZkSigError> {
        match self {
            Self::EdDsa(c) => c.is_solved(),
            Self::Ecdsa(c) => c.is_solved(),
        }
    }
}

impl From<EdDSAMembershipCircuit> for MembershipCircuit {
    fn from(c: EdDSAMembershipCircuit) -> Self {
        Self::EdDsa(c)
    }
}

impl From<ECDSAMembershipCircuit> for MembershipCircuit {
    fn from(c: ECDSAMembershipCircuit) -> Self {
        Self::Ecdsa(c)
    }
}

impl ConstraintSynthesizer<Fr> for MembershipCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        match self {
            Self::EdDsa(c) => c.generate_constraints(cs),
            Self::Ecdsa(c) => c.generate_constraints(cs),
        }
    }
}
