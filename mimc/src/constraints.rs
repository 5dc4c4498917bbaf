//! R1CS gadgets for the MiMC permutation and sponge. Each round costs 2 constraints, one for
//! squaring and one for the multiplication that completes the cube. Additions are free.

use crate::sponge::MiMCSponge;
use alloc::vec::Vec;
use ark_ff::PrimeField;
use ark_r1cs_std::{eq::EqGadget, fields::fp::FpVar, fields::FieldVar};
use ark_relations::r1cs::SynthesisError;

/// In-circuit counterpart of [`crate::mimc_feistel`]. Returns the final `(xl, xr)`.
pub fn mimc_feistel_gadget<F: PrimeField>(
    xl: &FpVar<F>,
    xr: &FpVar<F>,
    constants: &[FpVar<F>],
) -> Result<(FpVar<F>, FpVar<F>), SynthesisError> {
    let mut xl = xl.clone();
    let mut xr = xr.clone();
    for c in constants {
        let t = &xl + c;
        let next = t.square()? * &t + &xr;
        xr = xl;
        xl = next;
    }
    Ok((xl, xr))
}

/// In-circuit counterpart of [`crate::mimc`]
pub fn mimc_gadget<F: PrimeField>(
    xl: &FpVar<F>,
    xr: &FpVar<F>,
    constants: &[FpVar<F>],
) -> Result<FpVar<F>, SynthesisError> {
    Ok(mimc_feistel_gadget(xl, xr, constants)?.0)
}

/// Enforce that MiMC of `(xl, xr)` under `constants` is `image`
pub fn enforce_mimc_image<F: PrimeField>(
    xl: &FpVar<F>,
    xr: &FpVar<F>,
    constants: &[FpVar<F>],
    image: &FpVar<F>,
) -> Result<(), SynthesisError> {
    mimc_gadget(xl, xr, constants)?.enforce_equal(image)
}

/// In-circuit counterpart of [`MiMCSponge`]. The round constants are circuit constants.
#[derive(Clone)]
pub struct MiMCSpongeGadget<F: PrimeField> {
    pub constants: Vec<FpVar<F>>,
}

impl<F: PrimeField> MiMCSpongeGadget<F> {
    pub fn new(sponge: &MiMCSponge<F>) -> Self {
        Self {
            constants: sponge
                .constants
                .iter()
                .map(|c| FpVar::constant(*c))
                .collect(),
        }
    }

    pub fn hash(&self, inputs: &[FpVar<F>]) -> Result<FpVar<F>, SynthesisError> {
        let mut xl = FpVar::<F>::zero();
        let mut xr = FpVar::<F>::zero();
        for m in inputs {
            xl += m;
            (xl, xr) = mimc_feistel_gadget(&xl, &xr, &self.constants)?;
        }
        Ok(xl)
    }
}
