use ff::PrimeField;
use num_bigint::BigUint;

/// Little-endian 64-bit limbs, zero-padded to exactly `len` limbs, or `None`
/// when `x` is wider than `len` limbs.
pub fn try_biguint_to_limbs(x: &BigUint, len: usize) -> Option<Vec<u64>> {
    let mut limbs = x.to_u64_digits();
    if limbs.len() > len {
        return None;
    }
    limbs.resize(len, 0);
    Some(limbs)
}

pub fn limbs_to_biguint(limbs: &[u64]) -> BigUint {
    limbs
        .iter()
        .rev()
        .fold(BigUint::from(0u8), |acc, &limb| (acc << 64) + limb)
}

pub fn biguint_to_field<F: PrimeField>(x: &BigUint, len: usize) -> Option<Vec<F>> {
    let limbs = try_biguint_to_limbs(x, len)?;
    Some(limbs.into_iter().map(F::from).collect())
}
