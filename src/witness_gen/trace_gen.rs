use ff::PrimeField;
use num_bigint::BigUint;
use num_integer::Integer;

use super::poly_mul::poly_mul;
use super::utils::{biguint_to_field, try_biguint_to_limbs};
use crate::bignum::BigNumInstance;
use crate::error::{Error, Result};
use crate::exponent::{ladder, PublicExponent};

/// One modular multiplication, `a * b = q * n + r` with `r < n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MulStep {
    pub a: BigUint,
    pub b: BigUint,
    pub q: BigUint,
    pub r: BigUint,
}

/// Limb polynomials of a [`MulStep`] in base `2^64`, little-endian.
///
/// `ab` and `qn` are the unreduced products `a(X) * b(X)` and `q(X) * n(X)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FpMulWitness<F: PrimeField> {
    pub a: Vec<F>,
    pub b: Vec<F>,
    pub q: Vec<F>,
    pub r: Vec<F>,
    pub ab: Vec<F>,
    pub qn: Vec<F>,
}

pub struct Trace<const NUM_BYTES: usize> {
    n: BigUint,
    n_limbs: Vec<u64>,
}

impl<const NUM_BYTES: usize> Trace<NUM_BYTES> {
    /// 64-bit limbs per operand.
    pub const LIMBS: usize = {
        assert!(NUM_BYTES % 8 == 0, "modulus width must be a whole number of limbs");
        NUM_BYTES / 8
    };

    pub fn new<I: BigNumInstance<NUM_BYTES>>(instance: &I) -> Result<Self> {
        let n = instance.modulus().clone();
        let n_limbs =
            try_biguint_to_limbs(&n, Self::LIMBS).ok_or_else(|| Error::InvalidModulusWidth {
                expected: NUM_BYTES,
                actual: ((n.bits() + 7) / 8) as usize,
            })?;

        Ok(Self { n, n_limbs })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    fn register_mul(&self, a: &BigUint, b: &BigUint) -> MulStep {
        let (q, r) = (a * b).div_rem(&self.n);
        log::trace!("registered mul, r has {} bits", r.bits());

        MulStep {
            a: a.clone(),
            b: b.clone(),
            q,
            r,
        }
    }

    /// Replays the exponentiation ladder for `sig`, recording every modular
    /// multiplication in order. The last step's `r` is `sig^e mod n`.
    pub fn compute_trace(&self, sig: &BigUint, exponent: PublicExponent) -> Vec<MulStep> {
        let mut steps = Vec::with_capacity(exponent.multiplications());

        ladder(sig, exponent, |a, b| {
            let step = self.register_mul(a, b);
            let r = step.r.clone();
            steps.push(step);
            r
        });

        log::debug!("trace for e={} has {} steps", exponent.value(), steps.len());
        steps
    }

    pub fn n_witness<F: PrimeField>(&self) -> Vec<F> {
        self.n_limbs.iter().map(|&limb| F::from(limb)).collect()
    }

    /// Limb polynomials of `step`, or `None` if an operand does not fit in
    /// [`Self::LIMBS`] limbs.
    pub fn witness<F: PrimeField>(&self, step: &MulStep) -> Option<FpMulWitness<F>> {
        let a = biguint_to_field(&step.a, Self::LIMBS)?;
        let b = biguint_to_field(&step.b, Self::LIMBS)?;
        let q = biguint_to_field(&step.q, Self::LIMBS)?;
        let r = biguint_to_field(&step.r, Self::LIMBS)?;

        let ab = poly_mul(&a, &b);
        let qn = poly_mul(&q, &self.n_witness::<F>());

        Some(FpMulWitness { a, b, q, r, ab, qn })
    }
}
