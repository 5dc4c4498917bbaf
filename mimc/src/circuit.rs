use crate::{
    constants::RoundConstants, constraints::enforce_mimc_image, error::MiMCError,
    permutation::mimc,
};
use alloc::vec::Vec;
use ark_ff::PrimeField;
use ark_r1cs_std::{alloc::AllocVar, fields::fp::FpVar};
use ark_relations::r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError};
use ark_std::{end_timer, start_timer};
use nizkp_utils::r1cs_utils::{check_satisfaction, Satisfaction};

/// Proves knowledge of a preimage `(xl, xr)` such that MiMC of it under the round constants is the
/// image. The preimage is the witness, the round constants (one input per round, in order) followed
/// by the image are the public inputs.
///
/// The round count is fixed when the circuit is created so a circuit created with `None` witnesses
/// for setup has the same shape as the one used for proving.
#[derive(Clone, Debug)]
pub struct MiMCCircuit<F: PrimeField> {
    rounds: usize,
    constants: RoundConstants<F>,
    pub xl: Option<F>,
    pub xr: Option<F>,
    pub image: Option<F>,
}

impl<F: PrimeField> MiMCCircuit<F> {
    pub fn new(
        rounds: usize,
        constants: RoundConstants<F>,
        xl: Option<F>,
        xr: Option<F>,
        image: Option<F>,
    ) -> Result<Self, MiMCError> {
        if constants.rounds() != rounds {
            return Err(MiMCError::RoundCountMismatch(rounds, constants.rounds()));
        }
        Ok(Self {
            rounds,
            constants,
            xl,
            xr,
            image,
        })
    }

    /// Create a circuit with all assignments, computing the image from the preimage
    pub fn new_with_preimage(constants: RoundConstants<F>, xl: F, xr: F) -> Self {
        let image = mimc(xl, xr, &constants);
        Self {
            rounds: constants.rounds(),
            constants,
            xl: Some(xl),
            xr: Some(xr),
            image: Some(image),
        }
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn constants(&self) -> &RoundConstants<F> {
        &self.constants
    }

    /// Public inputs in the order they are allocated, i.e. the round constants and then the image
    pub fn public_inputs(&self) -> Result<Vec<F>, MiMCError> {
        let image = self.image.ok_or(SynthesisError::AssignmentMissing)?;
        let mut inputs = Vec::with_capacity(self.rounds + 1);
        inputs.extend_from_slice(&self.constants);
        inputs.push(image);
        Ok(inputs)
    }

    /// Check the assignment against the constraints without creating a proof
    pub fn is_solved(&self) -> Result<(), MiMCError> {
        match check_satisfaction(self.clone())? {
            Satisfaction::Satisfied => Ok(()),
            Satisfaction::Unsatisfied(c) => Err(MiMCError::Unsatisfied(c)),
        }
    }
}

impl<F: PrimeField> ConstraintSynthesizer<F> for MiMCCircuit<F> {
    fn generate_constraints(self, cs: ConstraintSystemRef<F>) -> Result<(), SynthesisError> {
        let t = start_timer!(|| "MiMC circuit synthesis");
        let xl = FpVar::new_witness(cs.clone(), || {
            self.xl.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let xr = FpVar::new_witness(cs.clone(), || {
            self.xr.ok_or(SynthesisError::AssignmentMissing)
        })?;
        let constants = self
            .constants
            .iter()
            .map(|c| FpVar::new_input(cs.clone(), || Ok(*c)))
            .collect::<Result<Vec<_>, _>>()?;
        let image = FpVar::new_input(cs, || self.image.ok_or(SynthesisError::AssignmentMissing))?;
        enforce_mimc_image(&xl, &xr, &constants, &image)?;
        end_timer!(t);
        Ok(())
    }
}
