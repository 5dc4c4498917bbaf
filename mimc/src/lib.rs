#![cfg_attr(not(feature = "std"), no_std)]

//! MiMC with cubic rounds in Feistel mode, as described in [MiMC: Efficient Encryption and Cryptographic Hashing with Minimal Multiplicative Complexity](https://eprint.iacr.org/2016/492).
//!
//! Each round maps `(xl, xr)` to `((xl + c_i)^3 + xr, xl)` with a public round constant `c_i`. Since
//! the construction is a Feistel network, the round is a permutation for any prime field, even when
//! cubing is not a permutation of the field.
//!
//! The crate provides:
//! - [`RoundConstants`], generated randomly or deterministically from a label.
//! - the reference evaluator [`mimc`] and the full-state [`mimc_feistel`].
//! - [`MiMCSponge`], a rate-1 sponge over the permutation that hashes field elements to a field element.
//! - R1CS gadgets mirroring the above in [`constraints`].
//! - [`MiMCCircuit`] which proves knowledge of a preimage `(xl, xr)` of a public image under public
//!   round constants.

extern crate alloc;

pub mod circuit;
pub mod constants;
pub mod constraints;
pub mod error;
pub mod permutation;
pub mod sponge;

pub use circuit::MiMCCircuit;
pub use constants::{RoundConstants, BENCHMARK_MIMC_ROUNDS, DEFAULT_MIMC_ROUNDS};
pub use error::MiMCError;
pub use permutation::{mimc, mimc_feistel};
pub use sponge::{MiMCSponge, DEFAULT_SPONGE_ROUNDS, SPONGE_CONSTANTS_LABEL};
