//! Fixtures shared by tests and benchmarks

#[macro_use]
pub mod serialization;

use ark_ff::PrimeField;
use ark_std::{rand::RngCore, UniformRand};
use mimc::RoundConstants;
use zk_signatures::{ecdsa, eddsa};

/// A random preimage `(xl, xr)` and its image
pub fn mimc_preimage<F: PrimeField, R: RngCore>(
    rng: &mut R,
    constants: &RoundConstants<F>,
) -> (F, F, F) {
    let xl = F::rand(rng);
    let xr = F::rand(rng);
    (xl, xr, mimc::mimc(xl, xr, constants))
}

/// A signer and a list of `list_len` public keys ending with the signer's. `list_len` must be at
/// least 1.
pub fn eddsa_key_list<R: RngCore>(
    rng: &mut R,
    list_len: usize,
) -> (eddsa::Keypair, Vec<eddsa::PublicKey>) {
    let signer = eddsa::Keypair::generate_using_rng(rng);
    let mut keys = (1..list_len)
        .map(|_| eddsa::Keypair::generate_using_rng(rng).public_key)
        .collect::<Vec<_>>();
    keys.push(signer.public_key);
    (signer, keys)
}

/// A signer and a list of `list_len` public keys ending with the signer's. `list_len` must be at
/// least 1.
pub fn ecdsa_key_list<R: RngCore>(
    rng: &mut R,
    list_len: usize,
) -> (ecdsa::Keypair, Vec<ecdsa::PublicKey>) {
    let signer = ecdsa::Keypair::generate_using_rng(rng);
    let mut keys = (1..list_len)
        .map(|_| ecdsa::Keypair::generate_using_rng(rng).public_key)
        .collect::<Vec<_>>();
    keys.push(signer.public_key);
    (signer, keys)
}

/// A random message for the EdDSA circuit
pub fn eddsa_message<R: RngCore>(rng: &mut R) -> ark_bn254::Fr {
    ark_bn254::Fr::rand(rng)
}
