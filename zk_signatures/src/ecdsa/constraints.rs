use super::{emulated::EmulatedAffineVar, ConstraintF, Signature};
use ark_ec::AffineRepr;
use ark_ff::{BigInteger256, One, PrimeField};
use ark_r1cs_std::{
    fields::{fp::FpVar, nonnative::NonNativeFieldVar},
    prelude::*,
};
use ark_relations::{
    ns,
    r1cs::{Namespace, SynthesisError},
};
use ark_secp256k1::{Affine, Config, Fq, Fr};
use ark_std::{borrow::Borrow, vec::Vec};

/// An element of the secp256k1 base field
pub type BaseVar = NonNativeFieldVar<Fq, ConstraintF>;
/// An element of the secp256k1 scalar field
pub type ScalarVar = NonNativeFieldVar<Fr, ConstraintF>;
/// A secp256k1 point other than infinity
pub type PointVar = EmulatedAffineVar<Config, ConstraintF>;

#[derive(Clone, Debug)]
pub struct SignatureVar {
    pub r: ScalarVar,
    pub s: ScalarVar,
}

impl AllocVar<Signature, ConstraintF> for SignatureVar {
    /// Allocates `r` and then `s`
    fn new_variable<T: Borrow<Signature>>(
        cs: impl Into<Namespace<ConstraintF>>,
        f: impl FnOnce() -> Result<T, SynthesisError>,
        mode: AllocationMode,
    ) -> Result<Self, SynthesisError> {
        let ns = cs.into();
        let cs = ns.cs();
        let sig = f().map(|s| *s.borrow());
        let r = ScalarVar::new_variable(ns!(cs, "r"), || sig.map(|s| s.r), mode)?;
        let s = ScalarVar::new_variable(ns!(cs, "s"), || sig.map(|s| s.s), mode)?;
        Ok(Self { r, s })
    }
}

/// Canonical little-endian bits padded or cut to 256. Bits beyond the modulus size are already
/// constrained to be 0.
fn bits_256<F: PrimeField>(
    v: &NonNativeFieldVar<F, ConstraintF>,
) -> Result<Vec<Boolean<ConstraintF>>, SynthesisError> {
    let mut bits = v.to_bits_le()?;
    bits.resize(256, Boolean::constant(false));
    Ok(bits)
}

/// Low and high 128 bits of a 256 bit integer
fn split_u128(b: &BigInteger256) -> (u128, u128) {
    (
        b.0[0] as u128 | (b.0[1] as u128) << 64,
        b.0[2] as u128 | (b.0[3] as u128) << 64,
    )
}

/// Enforce `r == x mod n` where `x` is a base field element and `n` the group order.
///
/// As `n < p < 2n`, this is `x = r + wrapped*n` with a boolean `wrapped`. Both sides are compared as
/// integers in 128-bit halves, which fit in the constraint field, with a boolean `carry` out of the
/// low half.
pub fn enforce_x_mod_n_equals(x: &BaseVar, r: &ScalarVar) -> Result<(), SynthesisError> {
    let cs = x.cs().or(r.cs());
    let x_bits = bits_256(x)?;
    let r_bits = bits_256(r)?;
    let x_lo = Boolean::le_bits_to_fp_var(&x_bits[..128])?;
    let x_hi = Boolean::le_bits_to_fp_var(&x_bits[128..])?;
    let r_lo = Boolean::le_bits_to_fp_var(&r_bits[..128])?;
    let r_hi = Boolean::le_bits_to_fp_var(&r_bits[128..])?;

    let (n_lo, n_hi) = split_u128(&Fr::MODULUS);
    let wrapped = Boolean::new_witness(ns!(cs, "wrapped"), || {
        Ok(x.value()?.into_bigint() >= Fr::MODULUS)
    })?;
    let carry = Boolean::new_witness(ns!(cs, "carry"), || {
        let wrapped = x.value()?.into_bigint() >= Fr::MODULUS;
        let (r_lo, _) = split_u128(&r.value()?.into_bigint());
        Ok(wrapped && r_lo.checked_add(n_lo).is_none())
    })?;

    let two_128 = ConstraintF::from(u128::MAX) + ConstraintF::one();
    let wrapped = FpVar::from(wrapped);
    let carry = FpVar::from(carry);
    (x_lo + &carry * two_128).enforce_equal(&(r_lo + &wrapped * ConstraintF::from(n_lo)))?;
    x_hi.enforce_equal(&(r_hi + wrapped * ConstraintF::from(n_hi) + carry))
}

/// Enforce that `signature` is valid for the message hash `z` under `public_key`, i.e. with
/// `w = s^-1`, the point `P = [z*w]G + [r*w]Q` has `P.x mod n == r`. Fails for `r = 0`, `s = 0` and
/// when `P` is the point at infinity.
///
/// Costs over a million constraints over BN254, almost all of them in the 256 steps of the joint
/// scalar multiplication.
pub fn verify_ecdsa_gadget(
    public_key: &PointVar,
    signature: &SignatureVar,
    z: &ScalarVar,
) -> Result<(), SynthesisError> {
    signature.r.enforce_not_equal(&ScalarVar::zero())?;
    let w = signature.s.inverse()?;
    let u1 = z * &w;
    let u2 = &signature.r * &w;

    let scalar_bits = Fr::MODULUS_BIT_SIZE as usize;
    let mut u1_bits = u1.to_bits_le()?;
    u1_bits.truncate(scalar_bits);
    let mut u2_bits = u2.to_bits_le()?;
    u2_bits.truncate(scalar_bits);

    let p = PointVar::joint_scalar_mul_le(&Affine::generator(), &u1_bits, public_key, &u2_bits)?;
    enforce_x_mod_n_equals(&p.affine_x()?, &signature.r)
}
