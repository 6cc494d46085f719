use num_bigint::{BigInt, BigUint};
use num_integer::Integer;

use super::poly_mul::poly_mul;
use super::trace_gen::{MulStep, Trace};
use super::utils::try_biguint_to_limbs;
use crate::exponent::PublicExponent;
use crate::pkcs1v15::{self, DIGEST_LEN};

fn signed_limbs(x: &BigUint, len: usize) -> Option<Vec<BigInt>> {
    let limbs = try_biguint_to_limbs(x, len)?;
    Some(limbs.into_iter().map(BigInt::from).collect())
}

/*
    a * b = q * n + r holds as integers iff the limb-wise difference

        d(X) = a(X) * b(X) - q(X) * n(X) - r(X)

    vanishes at X = 2^64. Walking from the lowest coefficient, every partial
    sum d_k + carry must be divisible by 2^64 and the final carry must be 0.

    An operand wider than `limbs` limbs is rejected outright.
*/
pub fn check_carry_to_zero(step: &MulStep, n: &BigUint, limbs: usize) -> bool {
    if limbs == 0 {
        return false;
    }
    let operands = (
        signed_limbs(&step.a, limbs),
        signed_limbs(&step.b, limbs),
        signed_limbs(&step.q, limbs),
        signed_limbs(n, limbs),
        signed_limbs(&step.r, limbs),
    );
    let (a, b, q, n, r) = match operands {
        (Some(a), Some(b), Some(q), Some(n), Some(r)) => (a, b, q, n, r),
        _ => return false,
    };

    let ab = poly_mul(&a, &b);
    let qn = poly_mul(&q, &n);

    let base = BigInt::from(1u8) << 64;
    let mut carry = BigInt::from(0u8);

    for (k, (ab, qn)) in ab.into_iter().zip(qn).enumerate() {
        let mut coeff = ab - qn + carry;
        if let Some(r) = r.get(k) {
            coeff -= r;
        }

        let (c, rem) = coeff.div_mod_floor(&base);
        if rem != BigInt::from(0u8) {
            return false;
        }
        carry = c;
    }

    carry == BigInt::from(0u8)
}

/// Checks a trace produced for `sig` and `exponent` end to end.
///
/// The steps must follow the ladder shape (squarings of the running value,
/// then one multiplication by `sig`), every step must be a correct reduction
/// and the final remainder must be the PKCS#1 v1.5 encoding of `digest`.
pub fn check_trace<const NUM_BYTES: usize>(
    trace: &Trace<NUM_BYTES>,
    steps: &[MulStep],
    sig: &BigUint,
    exponent: PublicExponent,
    digest: &[u8; DIGEST_LEN],
) -> bool {
    let n = trace.modulus();
    let limbs = Trace::<NUM_BYTES>::LIMBS;

    let (last, squares) = match steps.split_last() {
        Some(split) if steps.len() == exponent.multiplications() => split,
        _ => return false,
    };

    let mut acc = sig;
    for step in squares {
        if step.a != *acc || step.b != *acc {
            return false;
        }
        acc = &step.r;
    }
    if last.a != *acc || last.b != *sig {
        return false;
    }

    let reduced = steps
        .iter()
        .all(|step| step.r < *n && check_carry_to_zero(step, n, limbs));
    if !reduced {
        log::debug!("trace has an unreduced step");
        return false;
    }

    let bytes = last.r.to_bytes_le();
    if bytes.len() > NUM_BYTES {
        return false;
    }
    let mut padded = [0u8; NUM_BYTES];
    padded[..bytes.len()].copy_from_slice(&bytes);

    pkcs1v15::validate(&padded, digest)
}
