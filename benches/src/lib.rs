//! Benchmarks of zero-knowledge proofs with Groth16: knowledge of a MiMC preimage and anonymous
//! signature membership with EdDSA or ECDSA signatures.
//!
//! Each run creates an instance, then compiles the circuit, runs the trusted setup, proves and
//! verifies while recording the timings and sizes in [`Groth16Metrics`].

pub mod error;
pub mod groth16;
pub mod metrics;
pub mod preimage;

pub use config::{BenchmarkConfig, DEFAULT_KEY_LIST_LEN, RANDOMNESS_SEED};
pub use error::BenchmarkError;
pub use metrics::Groth16Metrics;
pub use preimage::{run_mimc, MiMCInstance};
pub use signatures::{run_ecdsa, run_eddsa, ECDSAInstance, EdDSAInstance};
