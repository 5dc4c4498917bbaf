#![cfg_attr(not(feature = "std"), no_std)]

//! Circuits proving that a message was signed by one of a public list of keys without revealing
//! which key, also called anonymous set membership.
//!
//! Two signature schemes are supported:
//! - [EdDSA](eddsa) over Baby Jubjub whose base field is the BN254 scalar field so the circuit uses
//!   native arithmetic. The challenge is computed with the MiMC sponge.
//! - [ECDSA](ecdsa) over secp256k1 whose fields are both emulated in the BN254 scalar field.
//!
//! Both circuits share the [`membership`] gadget and are over the BN254 scalar field so they can be
//! used with Groth16 over BN254. [`MembershipCircuit`] selects one of them at build time.

pub mod circuit;
pub mod ecdsa;
pub mod eddsa;
pub mod error;
pub mod membership;

pub use circuit::MembershipCircuit;
pub use ecdsa::ECDSAMembershipCircuit;
pub use eddsa::EdDSAMembershipCircuit;
pub use error::ZkSigError;
