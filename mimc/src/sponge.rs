use crate::{constants::RoundConstants, permutation::mimc_feistel};
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use blake2::Blake2b512;
use serde::{Deserialize, Serialize};

/// Rounds of the permutation used by the sponge, as in MiMC LongsightF322p3
pub const DEFAULT_SPONGE_ROUNDS: usize = 322;

pub const SPONGE_CONSTANTS_LABEL: &[u8] = b"MiMC-Feistel-sponge";

/// Sponge with rate 1 and capacity 1 over the MiMC Feistel permutation with key 0. Each absorbed
/// element is added to the left half of the state which is then permuted. The output is the left
/// half of the final state.
#[derive(
    Clone, PartialEq, Eq, Debug, CanonicalSerialize, CanonicalDeserialize, Serialize, Deserialize,
)]
#[serde(bound = "")]
pub struct MiMCSponge<F: PrimeField> {
    pub constants: RoundConstants<F>,
}

impl<F: PrimeField> Default for MiMCSponge<F> {
    fn default() -> Self {
        Self::new_from_label(SPONGE_CONSTANTS_LABEL, DEFAULT_SPONGE_ROUNDS)
    }
}

impl<F: PrimeField> MiMCSponge<F> {
    pub fn new(constants: RoundConstants<F>) -> Self {
        Self { constants }
    }

    pub fn new_from_label(label: &[u8], rounds: usize) -> Self {
        Self::new(RoundConstants::new_from_label::<Blake2b512>(label, rounds))
    }

    /// Hash the given elements to a single field element
    pub fn hash(&self, inputs: &[F]) -> F {
        let (mut xl, mut xr) = (F::zero(), F::zero());
        for m in inputs {
            xl += m;
            (xl, xr) = mimc_feistel(xl, xr, &self.constants);
        }
        xl
    }
}
