use alloc::vec::Vec;
use ark_ec::AffineRepr;
use ark_ff::PrimeField;
use digest::Digest;

/// Hash bytes to a field element. This is vulnerable to timing attack and is only used when input
/// is public anyway like when generating round constants or other public parameters
pub fn field_elem_from_try_and_incr<F: PrimeField, D: Digest>(bytes: &[u8]) -> F {
    let mut hash = D::digest(bytes);
    let mut j = 1u64;
    loop {
        if let Some(f) = F::from_random_bytes(&hash) {
            return f;
        }
        hash = D::digest(concat_slices!(bytes, b"-attempt-", j.to_le_bytes()));
        j += 1;
    }
}

/// Create `count` field elements by hashing `label || i` for `i` in `0..count`.
pub fn field_elems_from_label<F: PrimeField, D: Digest>(label: &[u8], count: usize) -> Vec<F> {
    (0..count as u64)
        .map(|i| field_elem_from_try_and_incr::<F, D>(&concat_slices!(label, i.to_le_bytes())))
        .collect()
}

/// Hash bytes to a point of the prime order subgroup. Like [`field_elem_from_try_and_incr`], only
/// for public inputs. The digest output must be long enough to hold a base field element and the
/// point's flags.
pub fn affine_group_elem_from_try_and_incr<G: AffineRepr, D: Digest>(bytes: &[u8]) -> G {
    let mut hash = D::digest(bytes);
    let mut j = 1u64;
    loop {
        if let Some(g) = G::from_random_bytes(&hash) {
            let g = g.mul_by_cofactor();
            if !g.is_zero() {
                return g;
            }
        }
        hash = D::digest(concat_slices!(bytes, b"-attempt-", j.to_le_bytes()));
        j += 1;
    }
}
