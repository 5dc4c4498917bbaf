use super::{scalar_as_base, Signature};
use ark_ec::{twisted_edwards::TECurveConfig, AffineRepr};
use ark_ed_on_bn254::{constraints::EdwardsVar, EdwardsAffine, EdwardsConfig, Fq};
use ark_ff::One;
use ark_r1cs_std::{fields::fp::FpVar, prelude::*};
use ark_relations::{
    ns,
    r1cs::{Namespace, SynthesisError},
};
use ark_std::borrow::Borrow;
use mimc::constraints::MiMCSpongeGadget;

pub type FqVar = FpVar<Fq>;

/// A signature in the circuit. The scalar `s` is kept as a base field element which is possible
/// since the subgroup order is smaller than the base field modulus.
#[derive(Clone, Debug)]
pub struct SignatureVar {
    pub r: EdwardsVar,
    pub s: FqVar,
}

impl AllocVar<Signature, Fq> for SignatureVar {
    /// Allocates `R.x`, `R.y` and `s` in that order and checks that `R` is on the curve
    fn new_variable<T: Borrow<Signature>>(
        cs: impl Into<Namespace<Fq>>,
        f: impl FnOnce() -> Result<T, SynthesisError>,
        mode: AllocationMode,
    ) -> Result<Self, SynthesisError> {
        let ns = cs.into();
        let cs = ns.cs();
        let sig = f().map(|s| *s.borrow());
        let x = FqVar::new_variable(ns!(cs, "r_x"), || sig.map(|s| s.r.x), mode)?;
        let y = FqVar::new_variable(ns!(cs, "r_y"), || sig.map(|s| s.r.y), mode)?;
        let s = FqVar::new_variable(ns!(cs, "s"), || sig.map(|s| scalar_as_base(&s.s)), mode)?;
        enforce_on_curve(&x, &y)?;
        Ok(Self {
            r: EdwardsVar::new(x, y),
            s,
        })
    }
}

/// Enforce `a*x^2 + y^2 = 1 + d*x^2*y^2`
pub fn enforce_on_curve(x: &FqVar, y: &FqVar) -> Result<(), SynthesisError> {
    let x2 = x.square()?;
    let y2 = y.square()?;
    let lhs = &x2 * EdwardsConfig::COEFF_A + &y2;
    let rhs = (&x2 * &y2) * EdwardsConfig::COEFF_D + Fq::one();
    lhs.enforce_equal(&rhs)
}

/// Enforce that `signature` is valid for `message` under `public_key`, i.e. `[s]B = R + [h]A`.
/// The challenge `h` is used with all its bits without reducing it which gives the same point as
/// long as `public_key` is in the prime order subgroup.
pub fn verify_eddsa_gadget(
    sponge: &MiMCSpongeGadget<Fq>,
    public_key: &EdwardsVar,
    signature: &SignatureVar,
    message: &FqVar,
) -> Result<(), SynthesisError> {
    let h = sponge.hash(&[
        signature.r.x.clone(),
        signature.r.y.clone(),
        public_key.x.clone(),
        public_key.y.clone(),
        message.clone(),
    ])?;
    let generator = EdwardsVar::constant(EdwardsAffine::generator().into_group());
    let s_b = generator.scalar_mul_le(signature.s.to_bits_le()?.iter())?;
    let h_a = public_key.scalar_mul_le(h.to_bits_le()?.iter())?;
    s_b.enforce_equal(&(h_a + &signature.r))
}
