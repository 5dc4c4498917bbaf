//! Short Weierstrass curve points whose coordinates are emulated in a foreign constraint field, like
//! secp256k1 points in a BN254 circuit.
//!
//! Every emulated multiplication costs hundreds of constraints, so scalar multiplication works on
//! non-zero affine points, [`EmulatedAffineVar`], with incomplete formulas where each slope is a
//! witness checked with one multiplication. A constant offset point, hashed to the curve, is added
//! at every step so that the incomplete formulas never meet equal or opposite points unless the
//! discrete logarithm of the offset is known. The offset is removed at the end with the complete
//! projective addition of [Renes, Costello, Batina 2015](https://eprint.iacr.org/2015/1060) on
//! [`EmulatedProjectiveVar`], which also handles a result at infinity.

use ark_ec::{
    short_weierstrass::{Affine as SWAffine, Projective as SWProjective, SWCurveConfig},
    AffineRepr, CurveGroup,
};
use ark_ff::{Field, PrimeField, Zero};
use ark_r1cs_std::{fields::nonnative::NonNativeFieldVar, prelude::*};
use ark_relations::{ns, r1cs::SynthesisError};
use ark_std::{cmp::max, marker::PhantomData};
use blake2::Blake2b512;
use nizkp_utils::hashing_utils::affine_group_elem_from_try_and_incr;

/// Hashed to the offset point of [`EmulatedAffineVar::joint_scalar_mul_le`]
pub const OFFSET_POINT_LABEL: &[u8] = b"emulated-joint-scalar-mul-offset";

type CoordinateVar<P, ConstraintF> =
    NonNativeFieldVar<<P as ark_ec::CurveConfig>::BaseField, ConstraintF>;

#[must_use]
pub struct EmulatedProjectiveVar<P: SWCurveConfig, ConstraintF: PrimeField>
where
    P::BaseField: PrimeField,
{
    pub x: CoordinateVar<P, ConstraintF>,
    pub y: CoordinateVar<P, ConstraintF>,
    pub z: CoordinateVar<P, ConstraintF>,
    _params: PhantomData<P>,
}

impl<P: SWCurveConfig, ConstraintF: PrimeField> Clone for EmulatedProjectiveVar<P, ConstraintF>
where
    P::BaseField: PrimeField,
{
    fn clone(&self) -> Self {
        Self::new(self.x.clone(), self.y.clone(), self.z.clone())
    }
}

fn mul_by_coeff_a<P: SWCurveConfig, ConstraintF: PrimeField>(
    f: &CoordinateVar<P, ConstraintF>,
) -> CoordinateVar<P, ConstraintF>
where
    P::BaseField: PrimeField,
{
    if !P::COEFF_A.is_zero() {
        f * P::COEFF_A
    } else {
        CoordinateVar::<P, ConstraintF>::zero()
    }
}

impl<P: SWCurveConfig, ConstraintF: PrimeField> EmulatedProjectiveVar<P, ConstraintF>
where
    P::BaseField: PrimeField,
{
    pub fn new(
        x: CoordinateVar<P, ConstraintF>,
        y: CoordinateVar<P, ConstraintF>,
        z: CoordinateVar<P, ConstraintF>,
    ) -> Self {
        Self {
            x,
            y,
            z,
            _params: PhantomData,
        }
    }

    /// The point `(x : y : 1)`. The caller is responsible for `(x, y)` being on the curve.
    pub fn from_affine_coordinates(
        x: CoordinateVar<P, ConstraintF>,
        y: CoordinateVar<P, ConstraintF>,
    ) -> Self {
        Self::new(x, y, CoordinateVar::<P, ConstraintF>::one())
    }

    /// The point at infinity `(0 : 1 : 0)`
    pub fn zero() -> Self {
        Self::new(
            CoordinateVar::<P, ConstraintF>::zero(),
            CoordinateVar::<P, ConstraintF>::one(),
            CoordinateVar::<P, ConstraintF>::zero(),
        )
    }

    pub fn constant(point: SWProjective<P>) -> Self {
        let point = point.into_affine();
        if AffineRepr::is_zero(&point) {
            Self::zero()
        } else {
            Self::from_affine_coordinates(
                CoordinateVar::<P, ConstraintF>::constant(point.x),
                CoordinateVar::<P, ConstraintF>::constant(point.y),
            )
        }
    }

    pub fn value(&self) -> Result<SWProjective<P>, SynthesisError> {
        let (x, y, z) = (self.x.value()?, self.y.value()?, self.z.value()?);
        Ok(match z.inverse() {
            Some(z_inv) => SWAffine::new_unchecked(x * z_inv, y * z_inv).into_group(),
            None => SWProjective::zero(),
        })
    }

    /// Complete addition, algorithm 1 of Renes, Costello, Batina 2015. Trailing comments are the
    /// steps of the algorithm that each line covers.
    pub fn add(&self, other: &Self) -> Result<Self, SynthesisError> {
        let three_b = P::COEFF_B.double() + P::COEFF_B;
        let (x1, y1, z1) = (&self.x, &self.y, &self.z);
        let (x2, y2, z2) = (&other.x, &other.y, &other.z);

        let xx = x1 * x2; // 1
        let yy = y1 * y2; // 2
        let zz = z1 * z2; // 3
        let xy_pairs = ((x1 + y1) * &(x2 + y2)) - (&xx + &yy); // 4, 5, 6, 7, 8
        let xz_pairs = ((x1 + z1) * &(x2 + z2)) - (&xx + &zz); // 9, 10, 11, 12, 13
        let yz_pairs = ((y1 + z1) * &(y2 + z2)) - (&yy + &zz); // 14, 15, 16, 17, 18

        let axz = mul_by_coeff_a::<P, ConstraintF>(&xz_pairs); // 19

        let bzz3_part = &axz + &zz * three_b; // 20, 21

        let yy_m_bzz3 = &yy - &bzz3_part; // 22
        let yy_p_bzz3 = &yy + &bzz3_part; // 23

        let azz = mul_by_coeff_a::<P, ConstraintF>(&zz); // 27
        let xx3_p_azz = xx.double()? + &xx + &azz; // 25, 26, 29

        let bxz3 = &xz_pairs * three_b; // 28
        let b3_xz_pairs = mul_by_coeff_a::<P, ConstraintF>(&(&xx - &azz)) + &bxz3; // 30, 31, 32

        let x = (&yy_m_bzz3 * &xy_pairs) - &(&yz_pairs * &b3_xz_pairs); // 35, 36, 37
        let y = (&yy_p_bzz3 * &yy_m_bzz3) + &(&xx3_p_azz * &b3_xz_pairs); // 24, 33, 34
        let z = (&yy_p_bzz3 * &yz_pairs) + &(&xy_pairs * &xx3_p_azz); // 38, 39, 40

        Ok(Self::new(x, y, z))
    }

    /// The affine `x` coordinate `X/Z`. Unsatisfiable for the point at infinity.
    pub fn affine_x(&self) -> Result<CoordinateVar<P, ConstraintF>, SynthesisError> {
        let z_inv = self.z.inverse()?;
        Ok(&self.x * &z_inv)
    }
}


/// Witness `num / den` checked with one multiplication. When `den` is 0 the check holds for any
/// quotient if `num` is 0 too and never otherwise.
fn div_unchecked<P: SWCurveConfig, ConstraintF: PrimeField>(
    num: &CoordinateVar<P, ConstraintF>,
    den: &CoordinateVar<P, ConstraintF>,
) -> Result<CoordinateVar<P, ConstraintF>, SynthesisError>
where
    P::BaseField: PrimeField,
{
    if num.is_constant() && den.is_constant() {
        let den_inv = den
            .value()?
            .inverse()
            .ok_or(SynthesisError::DivisionByZero)?;
        return Ok(CoordinateVar::<P, ConstraintF>::constant(
            num.value()? * den_inv,
        ));
    }
    let cs = num.cs().or(den.cs());
    let quotient = CoordinateVar::<P, ConstraintF>::new_witness(ns!(cs, "quotient"), || {
        Ok(num.value()? * den.value()?.inverse().unwrap_or_else(P::BaseField::zero))
    })?;
    quotient.mul_equals(den, num)?;
    Ok(quotient)
}

/// A point other than infinity in affine coordinates. Its formulas are incomplete, adding `p` and
/// `q` requires `p != q` and `p != -q`.
#[must_use]
pub struct EmulatedAffineVar<P: SWCurveConfig, ConstraintF: PrimeField>
where
    P::BaseField: PrimeField,
{
    pub x: CoordinateVar<P, ConstraintF>,
    pub y: CoordinateVar<P, ConstraintF>,
    _params: PhantomData<P>,
}

impl<P: SWCurveConfig, ConstraintF: PrimeField> Clone for EmulatedAffineVar<P, ConstraintF>
where
    P::BaseField: PrimeField,
{
    fn clone(&self) -> Self {
        Self::new(self.x.clone(), self.y.clone())
    }
}

impl<P: SWCurveConfig, ConstraintF: PrimeField> EmulatedAffineVar<P, ConstraintF>
where
    P::BaseField: PrimeField,
{
    /// The caller is responsible for `(x, y)` being on the curve
    pub fn new(x: CoordinateVar<P, ConstraintF>, y: CoordinateVar<P, ConstraintF>) -> Self {
        Self {
            x,
            y,
            _params: PhantomData,
        }
    }

    /// `point` must not be the point at infinity
    pub fn constant(point: SWAffine<P>) -> Self {
        Self::new(
            CoordinateVar::<P, ConstraintF>::constant(point.x),
            CoordinateVar::<P, ConstraintF>::constant(point.y),
        )
    }

    pub fn value(&self) -> Result<SWAffine<P>, SynthesisError> {
        Ok(SWAffine::new_unchecked(self.x.value()?, self.y.value()?))
    }

    pub fn to_projective(&self) -> EmulatedProjectiveVar<P, ConstraintF> {
        EmulatedProjectiveVar::from_affine_coordinates(self.x.clone(), self.y.clone())
    }

    /// `self + other` for `self != ±other`
    pub fn add_unchecked(&self, other: &Self) -> Result<Self, SynthesisError> {
        let (x1, y1) = (&self.x, &self.y);
        let (x2, y2) = (&other.x, &other.y);
        let lambda = div_unchecked::<P, ConstraintF>(&(y2 - y1), &(x2 - x1))?;
        let x3 = lambda.square()? - x1 - x2;
        let y3 = lambda * &(x1 - &x3) - y1;
        Ok(Self::new(x3, y3))
    }

    /// `2*self + other` as `(self + other) + self`, skipping the `y` coordinate of the
    /// intermediate sum. Requires `self != ±other` and `self + other != -self`.
    pub fn double_and_add_unchecked(&self, other: &Self) -> Result<Self, SynthesisError> {
        let (x1, y1) = (&self.x, &self.y);
        let (x2, y2) = (&other.x, &other.y);
        let lambda_1 = div_unchecked::<P, ConstraintF>(&(y2 - y1), &(x2 - x1))?;
        let x3 = lambda_1.square()? - x1 - x2;
        // Slope from `self` to `self + other`, whose `y` is `lambda_1 * (x1 - x3) - y1`
        let lambda_2 =
            (lambda_1 + div_unchecked::<P, ConstraintF>(&y1.double()?, &(&x3 - x1))?).negate()?;
        let x4 = lambda_2.square()? - x1 - &x3;
        let y4 = lambda_2 * &(x1 - &x4) - y1;
        Ok(Self::new(x4, y4))
    }

    /// Computes `[a]base + [b]other` for a constant `base`, where `a_bits` and `b_bits` are
    /// little-endian. Both scalars are processed together from the most significant bit with one
    /// [`Self::double_and_add_unchecked`] per bit, adding `[a_i]base + [b_i]other + offset`.
    ///
    /// After `k` steps the accumulator holds `(3*2^k - 1)*offset` besides multiples of `base` and
    /// `other`. For scalars of up to 256 bits over secp256k1 that multiple is never `±offset` and
    /// twice it never `-offset`, so an exceptional case of the incomplete formulas would give the
    /// discrete logarithm of the offset.
    pub fn joint_scalar_mul_le(
        base: &SWAffine<P>,
        a_bits: &[Boolean<ConstraintF>],
        other: &Self,
        b_bits: &[Boolean<ConstraintF>],
    ) -> Result<EmulatedProjectiveVar<P, ConstraintF>, SynthesisError> {
        let offset =
            affine_group_elem_from_try_and_incr::<SWAffine<P>, Blake2b512>(OFFSET_POINT_LABEL);
        let offset_var = Self::constant(offset);
        let base_offset = Self::constant((*base + offset).into_affine());
        let other_offset = other.add_unchecked(&offset_var)?;
        let both_offset = other_offset.add_unchecked(&Self::constant(*base))?;

        let mut correction = offset + offset;
        let mut acc = Self::constant(correction.into_affine());
        for i in (0..max(a_bits.len(), b_bits.len())).rev() {
            let a = a_bits.get(i).cloned().unwrap_or(Boolean::constant(false));
            let b = b_bits.get(i).cloned().unwrap_or(Boolean::constant(false));
            let with_other = a.select(&both_offset, &other_offset)?;
            let without_other = a.select(&base_offset, &offset_var)?;
            acc = acc.double_and_add_unchecked(&b.select(&with_other, &without_other)?)?;
            correction = correction + correction + offset;
        }
        acc.to_projective()
            .add(&EmulatedProjectiveVar::constant(-correction))
    }
}

impl<P: SWCurveConfig, ConstraintF: PrimeField> CondSelectGadget<ConstraintF>
    for EmulatedAffineVar<P, ConstraintF>
where
    P::BaseField: PrimeField,
{
    fn conditionally_select(
        cond: &Boolean<ConstraintF>,
        true_value: &Self,
        false_value: &Self,
    ) -> Result<Self, SynthesisError> {
        Ok(Self::new(
            cond.select(&true_value.x, &false_value.x)?,
            cond.select(&true_value.y, &false_value.y)?,
        ))
    }
}
