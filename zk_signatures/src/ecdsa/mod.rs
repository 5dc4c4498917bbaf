//! ECDSA over secp256k1. In a BN254 circuit neither the base field nor the scalar field of secp256k1
//! is native so both are emulated, see [`emulated`].
//!
//! Signing uses the usual `r = (k*G).x mod n`, `s = k^-1 * (z + r*d)` where `z` is the message hash
//! reduced modulo the group order `n`. How a message becomes `z` is chosen with [`MessageHash`].

pub mod circuit;
pub mod constraints;
pub mod emulated;

use crate::error::ZkSigError;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::{BigInteger, Field, PrimeField, Zero};
use ark_secp256k1::{Affine, Fq, Fr};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{cmp::min, rand::RngCore, UniformRand};
use nizkp_utils::serde_utils::ArkObjectBytes;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

pub use circuit::ECDSAMembershipCircuit;

/// The field of the constraint system the ECDSA circuit is expressed in
pub type ConstraintF = ark_bn254::Fr;

/// Number of bytes of a message hash, the size of the group order
pub const HASH_SIZE: usize = 32;

/// How a message is mapped to the scalar `z` that is signed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageHash {
    /// The message is taken as the hash. Its first 32 bytes are read as a big-endian integer and
    /// reduced modulo the group order
    #[default]
    Identity,
    /// SHA-256 of the message, read as a big-endian integer and reduced modulo the group order
    Sha256,
}

impl MessageHash {
    pub fn hash_to_scalar(&self, message: &[u8]) -> Fr {
        match self {
            Self::Identity => Fr::from_be_bytes_mod_order(&message[..min(HASH_SIZE, message.len())]),
            Self::Sha256 => Fr::from_be_bytes_mod_order(&Sha256::digest(message)),
        }
    }
}

/// Secret key used to sign messages
#[serde_as]
#[derive(
    Clone,
    PartialEq,
    Eq,
    Debug,
    CanonicalSerialize,
    CanonicalDeserialize,
    Zeroize,
    ZeroizeOnDrop,
    Serialize,
    Deserialize,
)]
pub struct SecretKey(#[serde_as(as = "ArkObjectBytes")] pub Fr);

/// Public key used to verify signatures
#[serde_as]
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    CanonicalSerialize,
    CanonicalDeserialize,
    Serialize,
    Deserialize,
)]
pub struct PublicKey(#[serde_as(as = "ArkObjectBytes")] pub Affine);

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Keypair {
    pub secret_key: SecretKey,
    pub public_key: PublicKey,
}

#[serde_as]
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    CanonicalSerialize,
    CanonicalDeserialize,
    Serialize,
    Deserialize,
)]
pub struct Signature {
    #[serde_as(as = "ArkObjectBytes")]
    pub r: Fr,
    #[serde_as(as = "ArkObjectBytes")]
    pub s: Fr,
}

impl SecretKey {
    pub fn new<R: RngCore>(rng: &mut R) -> Self {
        let mut d = Fr::rand(rng);
        while d.is_zero() {
            d = Fr::rand(rng);
        }
        Self(d)
    }
}

impl PublicKey {
    pub fn generate_using_secret_key(secret_key: &SecretKey) -> Self {
        Self((Affine::generator() * secret_key.0).into_affine())
    }

    /// Public key must be a non-zero point on the curve. The curve has prime order so no subgroup
    /// check is needed.
    pub fn is_valid(&self) -> bool {
        !AffineRepr::is_zero(&self.0) && self.0.is_on_curve()
    }
}

impl Keypair {
    pub fn generate_using_rng<R: RngCore>(rng: &mut R) -> Self {
        let secret_key = SecretKey::new(rng);
        let public_key = PublicKey::generate_using_secret_key(&secret_key);
        Self {
            secret_key,
            public_key,
        }
    }
}

/// Reduce a base field element, like the x coordinate of a point, modulo the group order
pub fn base_to_scalar(x: &Fq) -> Fr {
    Fr::from_le_bytes_mod_order(&x.into_bigint().to_bytes_le())
}

impl Signature {
    pub fn new<R: RngCore>(
        rng: &mut R,
        message: &[u8],
        keypair: &Keypair,
        hash: MessageHash,
    ) -> Self {
        let z = hash.hash_to_scalar(message);
        loop {
            let mut k = Fr::rand(rng);
            let mut k_inv = match k.inverse() {
                Some(k_inv) => k_inv,
                None => continue,
            };
            let r = base_to_scalar(&(Affine::generator() * k).into_affine().x);
            let s = (z + r * keypair.secret_key.0) * k_inv;
            k.zeroize();
            k_inv.zeroize();
            if !r.is_zero() && !s.is_zero() {
                return Self { r, s };
            }
        }
    }

    pub fn verify(
        &self,
        message: &[u8],
        public_key: &PublicKey,
        hash: MessageHash,
    ) -> Result<(), ZkSigError> {
        if !public_key.is_valid() {
            return Err(ZkSigError::InvalidSignature);
        }
        let w = self.s.inverse().ok_or(ZkSigError::ZeroScalar)?;
        if self.r.is_zero() {
            return Err(ZkSigError::ZeroScalar);
        }
        let z = hash.hash_to_scalar(message);
        let p = (Affine::generator() * (z * w) + public_key.0 * (self.r * w)).into_affine();
        if AffineRepr::is_zero(&p) || base_to_scalar(&p.x) != self.r {
            return Err(ZkSigError::InvalidSignature);
        }
        Ok(())
    }
}
