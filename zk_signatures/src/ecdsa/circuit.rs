use super::{
    constraints::{verify_ecdsa_gadget, BaseVar, PointVar, ScalarVar, SignatureVar},
    ConstraintF, MessageHash, PublicKey, Signature,
};
use crate::{
    error::ZkSigError,
    membership::{enforce_key_membership, PublicKeyVar},
};
use ark_ff::PrimeField;
use ark_r1cs_std::{
    fields::nonnative::{params::OptimizationType, AllocatedNonNativeFieldVar},
    prelude::*,
};
use ark_relations::{
    ns,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError},
};
use ark_std::{end_timer, start_timer, vec::Vec};
use nizkp_utils::r1cs_utils::{check_satisfaction, Satisfaction};

/// Proves that `signature` on `message` is valid under a public key that is one of `key_list`
/// without revealing which one. The message is hashed outside the circuit with `hash` and the hash
/// `z` is public.
///
/// Emulated field elements are public as their limbs. The public inputs are, in order, the limbs of
/// `r`, `s` and `z` and then the limbs of the `x` and `y` coordinates of each listed key. The used
/// key is not checked to be on the curve, it is equal to one of the listed keys which the verifier
/// checks outside the circuit.
#[derive(Clone, Debug)]
pub struct ECDSAMembershipCircuit {
    key_list_len: usize,
    pub hash: MessageHash,
    pub public_key: Option<PublicKey>,
    pub signature: Option<Signature>,
    pub message: Option<Vec<u8>>,
    pub key_list: Option<Vec<PublicKey>>,
}

fn limbs<F: PrimeField>(v: &F) -> Result<Vec<ConstraintF>, SynthesisError> {
    AllocatedNonNativeFieldVar::<F, ConstraintF>::get_limbs_representations(
        v,
        OptimizationType::Constraints,
    )
}

impl ECDSAMembershipCircuit {
    pub fn new(
        key_list_len: usize,
        hash: MessageHash,
        public_key: Option<PublicKey>,
        signature: Option<Signature>,
        message: Option<Vec<u8>>,
        key_list: Option<Vec<PublicKey>>,
    ) -> Result<Self, ZkSigError> {
        if let Some(l) = &key_list {
            if l.len() != key_list_len {
                return Err(ZkSigError::KeyListLengthMismatch(key_list_len, l.len()));
            }
        }
        Ok(Self {
            key_list_len,
            hash,
            public_key,
            signature,
            message,
            key_list,
        })
    }

    pub fn key_list_len(&self) -> usize {
        self.key_list_len
    }

    /// Public inputs in the order they are allocated. Assumes the prover optimizes for the number
    /// of constraints, which is the default.
    pub fn public_inputs(&self) -> Result<Vec<ConstraintF>, ZkSigError> {
        let sig = self.signature.ok_or(SynthesisError::AssignmentMissing)?;
        let message = self
            .message
            .as_ref()
            .ok_or(SynthesisError::AssignmentMissing)?;
        let key_list = self
            .key_list
            .as_ref()
            .ok_or(SynthesisError::AssignmentMissing)?;
        let mut inputs = Vec::new();
        inputs.append(&mut limbs(&sig.r)?);
        inputs.append(&mut limbs(&sig.s)?);
        inputs.append(&mut limbs(&self.hash.hash_to_scalar(message))?);
        for k in key_list {
            inputs.append(&mut limbs(&k.0.x)?);
            inputs.append(&mut limbs(&k.0.y)?);
        }
        Ok(inputs)
    }

    /// Check the assignment against the constraints without creating a proof
    pub fn is_solved(&self) -> Result<(), ZkSigError> {
        match check_satisfaction(self.clone())? {
            Satisfaction::Satisfied => Ok(()),
            Satisfaction::Unsatisfied(c) => Err(ZkSigError::Unsatisfied(c)),
        }
    }
}

impl ConstraintSynthesizer<ConstraintF> for ECDSAMembershipCircuit {
    fn generate_constraints(
        self,
        cs: ConstraintSystemRef<ConstraintF>,
    ) -> Result<(), SynthesisError> {
        let t = start_timer!(|| "ECDSA membership circuit synthesis");
        let signature = SignatureVar::new_input(ns!(cs, "signature"), || {
            self.signature.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let z = ScalarVar::new_input(ns!(cs, "z"), || {
            self.message
                .as_ref()
                .map(|m| self.hash.hash_to_scalar(m))
                .ok_or(SynthesisError::AssignmentMissing)
        })?;
        let mut key_list = Vec::with_capacity(self.key_list_len);
        for i in 0..self.key_list_len {
            let key = self.key_list.as_ref().and_then(|l| l.get(i));
            key_list.push(PublicKeyVar::new(
                BaseVar::new_input(ns!(cs, "key_x"), || {
                    key.map(|k| k.0.x).ok_or(SynthesisError::AssignmentMissing)
                })?,
                BaseVar::new_input(ns!(cs, "key_y"), || {
                    key.map(|k| k.0.y).ok_or(SynthesisError::AssignmentMissing)
                })?,
            ));
        }
        let public_key = PublicKeyVar::new(
            BaseVar::new_witness(ns!(cs, "public_key_x"), || {
                self.public_key
                    .map(|k| k.0.x)
                    .ok_or(SynthesisError::AssignmentMissing)
            })?,
            BaseVar::new_witness(ns!(cs, "public_key_y"), || {
                self.public_key
                    .map(|k| k.0.y)
                    .ok_or(SynthesisError::AssignmentMissing)
            })?,
        );

        enforce_key_membership(&public_key, &key_list)?;
        verify_ecdsa_gadget(
            &PointVar::new(public_key.x, public_key.y),
            &signature,
            &z,
        )?;
        end_timer!(t);
        Ok(())
    }
}
