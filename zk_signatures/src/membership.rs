//! Gadget to prove that a key is one of a public list of keys without revealing which one.
//!
//! A running product `is_unknown` starts at 1 and is multiplied, for every key of the list, by a
//! boolean which is 0 only when both coordinates of the used key match the listed key. The used key
//! is in the list exactly when the product ends at 0. The coordinates can be any field gadget so the
//! same gadget works for keys whose coordinates are native to the constraint field (Baby Jubjub over
//! BN254) and for keys with emulated coordinates (secp256k1 over BN254).

use ark_ff::{Field, PrimeField};
use ark_r1cs_std::{
    boolean::Boolean,
    eq::EqGadget,
    fields::{fp::FpVar, FieldVar},
    R1CSVar,
};
use ark_relations::r1cs::SynthesisError;
use ark_std::marker::PhantomData;

/// Affine coordinates of a public key in a circuit. `F` is the field of the coordinates and
/// `ConstraintF` the field of the constraint system.
#[derive(Clone, Debug)]
pub struct PublicKeyVar<F: Field, ConstraintF: PrimeField, FV: FieldVar<F, ConstraintF>> {
    pub x: FV,
    pub y: FV,
    _params: PhantomData<(F, ConstraintF)>,
}

impl<F, ConstraintF, FV> PublicKeyVar<F, ConstraintF, FV>
where
    F: Field,
    ConstraintF: PrimeField,
    FV: FieldVar<F, ConstraintF>,
{
    pub fn new(x: FV, y: FV) -> Self {
        Self {
            x,
            y,
            _params: PhantomData,
        }
    }

    /// Returns a boolean that is true iff both coordinates are equal
    fn is_same_key(&self, other: &Self) -> Result<Boolean<ConstraintF>, SynthesisError> {
        let equal_x = self.x.is_eq(&other.x)?;
        let equal_y = self.y.is_eq(&other.y)?;
        equal_x.and(&equal_y)
    }
}

/// Returns 0 if `used` is one of `key_list` and 1 otherwise. The result is also constrained to be
/// boolean after every step.
pub fn is_unknown_key<F, ConstraintF, FV>(
    used: &PublicKeyVar<F, ConstraintF, FV>,
    key_list: &[PublicKeyVar<F, ConstraintF, FV>],
) -> Result<FpVar<ConstraintF>, SynthesisError>
where
    F: Field,
    ConstraintF: PrimeField,
    FV: FieldVar<F, ConstraintF>,
{
    let mut is_unknown = FpVar::<ConstraintF>::one();
    for key in key_list {
        // 0 when the keys are the same, 1 otherwise
        let different_key = used.is_same_key(key)?.not();
        is_unknown *= FpVar::from(different_key);
        is_unknown.mul_equals(&(&is_unknown - ConstraintF::one()), &FpVar::zero())?;
    }
    Ok(is_unknown)
}

/// Enforce that `used` is one of `key_list`. An empty list can never be satisfied.
pub fn enforce_key_membership<F, ConstraintF, FV>(
    used: &PublicKeyVar<F, ConstraintF, FV>,
    key_list: &[PublicKeyVar<F, ConstraintF, FV>],
) -> Result<(), SynthesisError>
where
    F: Field,
    ConstraintF: PrimeField,
    FV: FieldVar<F, ConstraintF>,
{
    let is_unknown = is_unknown_key(used, key_list)?;
    // A constant, like for the empty list, produces no constraint so it has to be decided here
    if is_unknown.is_constant() {
        return if is_unknown.value()?.is_zero() {
            Ok(())
        } else {
            Err(SynthesisError::Unsatisfiable)
        };
    }
    is_unknown.enforce_equal(&FpVar::zero())
}
