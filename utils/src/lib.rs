#![cfg_attr(not(feature = "std"), no_std)]

//! Common code shared by the MiMC, signature-membership and benchmark crates.
//!
//! - [`hashing_utils`]: deterministic hashing of byte strings to field elements
//! - [`serde_utils`]: serde adapters for arkworks types
//! - [`r1cs_utils`]: satisfiability checks, shape and assignments of a constraint synthesizer

extern crate alloc;

#[macro_use]
pub mod macros;
pub mod hashing_utils;
pub mod r1cs_utils;
pub mod serde_utils;
