use ark_ff::Field;

/// Apply the Feistel rounds to `(xl, xr)` and return the full state `(xl, xr)`. Round `i` computes
/// `xl, xr = (xl + constants[i])^3 + xr, xl`.
pub fn mimc_feistel<F: Field>(mut xl: F, mut xr: F, constants: &[F]) -> (F, F) {
    for c in constants {
        let t = xl + c;
        let mut next = t.square();
        next *= t;
        next += xr;
        xr = xl;
        xl = next;
    }
    (xl, xr)
}

/// Evaluate MiMC on `(xl, xr)` and return the left half of the final state as the image.
pub fn mimc<F: Field>(xl: F, xr: F, constants: &[F]) -> F {
    mimc_feistel(xl, xr, constants).0
}
