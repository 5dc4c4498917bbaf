use super::{
    constraints::{verify_eddsa_gadget, FqVar, SignatureVar},
    scalar_as_base, PublicKey, Signature,
};
use crate::{
    error::ZkSigError,
    membership::{enforce_key_membership, PublicKeyVar},
};
use ark_ed_on_bn254::{constraints::EdwardsVar, EdwardsProjective, Fq};
use ark_r1cs_std::prelude::*;
use ark_relations::{
    ns,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError},
};
use ark_std::{end_timer, start_timer, vec::Vec};
use mimc::{constraints::MiMCSpongeGadget, MiMCSponge};
use nizkp_utils::r1cs_utils::{check_satisfaction, Satisfaction};

/// Proves that `signature` on `message` is valid under a public key that is one of `key_list`
/// without revealing which one. The used public key is the only witness. The public inputs are, in
/// order, `R.x`, `R.y`, `s`, the message and then the `x` and `y` coordinates of each listed key.
///
/// The list size is fixed when the circuit is created, a circuit created for setup with `None`
/// assignments has the same shape as the one with assignments.
#[derive(Clone, Debug)]
pub struct EdDSAMembershipCircuit {
    key_list_len: usize,
    sponge: MiMCSponge<Fq>,
    pub public_key: Option<PublicKey>,
    pub signature: Option<Signature>,
    pub message: Option<Fq>,
    pub key_list: Option<Vec<PublicKey>>,
}

impl EdDSAMembershipCircuit {
    pub fn new(
        key_list_len: usize,
        sponge: MiMCSponge<Fq>,
        public_key: Option<PublicKey>,
        signature: Option<Signature>,
        message: Option<Fq>,
        key_list: Option<Vec<PublicKey>>,
    ) -> Result<Self, ZkSigError> {
        if let Some(l) = &key_list {
            if l.len() != key_list_len {
                return Err(ZkSigError::KeyListLengthMismatch(key_list_len, l.len()));
            }
        }
        Ok(Self {
            key_list_len,
            sponge,
            public_key,
            signature,
            message,
            key_list,
        })
    }

    pub fn key_list_len(&self) -> usize {
        self.key_list_len
    }

    pub fn sponge(&self) -> &MiMCSponge<Fq> {
        &self.sponge
    }

    /// Public inputs in the order they are allocated
    pub fn public_inputs(&self) -> Result<Vec<Fq>, ZkSigError> {
        let sig = self.signature.ok_or(SynthesisError::AssignmentMissing)?;
        let message = self.message.ok_or(SynthesisError::AssignmentMissing)?;
        let key_list = self
            .key_list
            .as_ref()
            .ok_or(SynthesisError::AssignmentMissing)?;
        let mut inputs = Vec::with_capacity(4 + 2 * key_list.len());
        inputs.push(sig.r.x);
        inputs.push(sig.r.y);
        inputs.push(scalar_as_base(&sig.s));
        inputs.push(message);
        for k in key_list {
            inputs.push(k.0.x);
            inputs.push(k.0.y);
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

impl ConstraintSynthesizer<Fq> for EdDSAMembershipCircuit {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fq>) -> Result<(), SynthesisError> {
        let t = start_timer!(|| "EdDSA membership circuit synthesis");
        let signature = SignatureVar::new_input(ns!(cs, "signature"), || {
            self.signature.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let message = FqVar::new_input(ns!(cs, "message"), || {
            self.message.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let mut key_list = Vec::with_capacity(self.key_list_len);
        for i in 0..self.key_list_len {
            let key = self.key_list.as_ref().and_then(|l| l.get(i));
            key_list.push(PublicKeyVar::new(
                FqVar::new_input(ns!(cs, "key_x"), || {
                    key.map(|k| k.0.x).ok_or(SynthesisError::AssignmentMissing)
                })?,
                FqVar::new_input(ns!(cs, "key_y"), || {
                    key.map(|k| k.0.y).ok_or(SynthesisError::AssignmentMissing)
                })?,
            ));
        }
        // Checks that the key is on the curve and in the prime order subgroup
        let public_key = EdwardsVar::new_witness(ns!(cs, "public_key"), || {
            self.public_key
                .map(|pk| EdwardsProjective::from(pk.0))
                .ok_or(SynthesisError::AssignmentMissing)
        })?;

        enforce_key_membership(
            &PublicKeyVar::new(public_key.x.clone(), public_key.y.clone()),
            &key_list,
        )?;
        verify_eddsa_gadget(
            &MiMCSpongeGadget::new(&self.sponge),
            &public_key,
            &signature,
            &message,
        )?;
        end_timer!(t);
        Ok(())
    }
}
