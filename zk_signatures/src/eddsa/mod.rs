//! EdDSA over Baby Jubjub, the twisted Edwards curve whose base field is the scalar field of BN254,
//! so that points and signatures can be verified with native arithmetic in a BN254 circuit.
//!
//! The challenge is `h = MiMC-sponge(R.x, R.y, A.x, A.y, M)` where `R` is the signature's nonce
//! commitment, `A` the public key and `M` the message as a base field element. A signature `(R, s)`
//! is valid if `[s]B = R + [h]A` where `B` is the generator of the prime order subgroup.
//! `h` lives in the base field and is reduced modulo the subgroup order when used as a scalar.

pub mod circuit;
pub mod constraints;

use crate::error::ZkSigError;
use ark_ec::{AffineRepr, CurveGroup};
use ark_ed_on_bn254::{EdwardsAffine, EdwardsProjective, Fq, Fr};
use ark_ff::{BigInteger, PrimeField, Zero};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::RngCore, UniformRand};
use mimc::MiMCSponge;
use nizkp_utils::serde_utils::ArkObjectBytes;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub use circuit::EdDSAMembershipCircuit;

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
pub struct PublicKey(#[serde_as(as = "ArkObjectBytes")] pub EdwardsAffine);

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
    pub r: EdwardsAffine,
    #[serde_as(as = "ArkObjectBytes")]
    pub s: Fr,
}

impl SecretKey {
    pub fn new<R: RngCore>(rng: &mut R) -> Self {
        let mut s = Fr::rand(rng);
        while s.is_zero() {
            s = Fr::rand(rng);
        }
        Self(s)
    }
}

impl PublicKey {
    pub fn generate_using_secret_key(secret_key: &SecretKey) -> Self {
        Self((EdwardsAffine::generator() * secret_key.0).into_affine())
    }

    /// Public key must be a non-zero point of the prime order subgroup
    pub fn is_valid(&self) -> bool {
        !AffineRepr::is_zero(&self.0)
            && self.0.is_on_curve()
            && self.0.is_in_correct_subgroup_assuming_on_curve()
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

/// The challenge as a base field element, as computed in the circuit
pub fn challenge(
    r: &EdwardsAffine,
    public_key: &PublicKey,
    message: &Fq,
    sponge: &MiMCSponge<Fq>,
) -> Fq {
    sponge.hash(&[r.x, r.y, public_key.0.x, public_key.0.y, *message])
}

/// Reduce a base field element modulo the order of the prime order subgroup
fn to_scalar(h: &Fq) -> Fr {
    Fr::from_le_bytes_mod_order(&h.into_bigint().to_bytes_le())
}

/// A scalar as a base field element. The subgroup order is smaller than the base field modulus so
/// this never wraps.
pub fn scalar_as_base(s: &Fr) -> Fq {
    Fq::from_le_bytes_mod_order(&s.into_bigint().to_bytes_le())
}

impl Signature {
    pub fn new<R: RngCore>(
        rng: &mut R,
        message: &Fq,
        keypair: &Keypair,
        sponge: &MiMCSponge<Fq>,
    ) -> Self {
        let mut k = Fr::rand(rng);
        while k.is_zero() {
            k = Fr::rand(rng);
        }
        let r = (EdwardsAffine::generator() * k).into_affine();
        let h = to_scalar(&challenge(&r, &keypair.public_key, message, sponge));
        let s = k + h * keypair.secret_key.0;
        k.zeroize();
        Self { r, s }
    }

    pub fn verify(
        &self,
        message: &Fq,
        public_key: &PublicKey,
        sponge: &MiMCSponge<Fq>,
    ) -> Result<(), ZkSigError> {
        if !public_key.is_valid() || !self.r.is_on_curve() {
            return Err(ZkSigError::InvalidSignature);
        }
        let h = to_scalar(&challenge(&self.r, public_key, message, sponge));
        let lhs = EdwardsAffine::generator() * self.s;
        let rhs = EdwardsProjective::from(self.r) + public_key.0 * h;
        if lhs != rhs {
            return Err(ZkSigError::InvalidSignature);
        }
        Ok(())
    }
}
