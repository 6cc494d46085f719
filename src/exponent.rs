use num_bigint::BigUint;

use crate::bignum::BigNumInstance;
use crate::error::Error;

/// The two public exponents a verifier accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PublicExponent {
    /// e = 3, `0b11`
    Three,
    /// e = 65537, `0b1_0000_0000_0000_0001`
    F4,
}

impl PublicExponent {
    pub const fn value(self) -> u32 {
        match self {
            PublicExponent::Three => 3,
            PublicExponent::F4 => 65537,
        }
    }

    /// Modular multiplications performed by [`ladder`] for this exponent.
    pub const fn multiplications(self) -> usize {
        match self {
            PublicExponent::Three => 2,
            PublicExponent::F4 => 17,
        }
    }
}

impl TryFrom<u32> for PublicExponent {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(PublicExponent::Three),
            65537 => Ok(PublicExponent::F4),
            _ => Err(Error::InvalidExponent(value)),
        }
    }
}

/// Left-to-right square-and-multiply over the bits of `exponent` below its
/// most significant one.
///
/// The sequence of `mul` calls depends only on the exponent, never on the
/// value of `base`.
pub fn ladder<T, M>(base: &T, exponent: PublicExponent, mut mul: M) -> T
where
    T: Clone,
    M: FnMut(&T, &T) -> T,
{
    let e = exponent.value();
    let top = 31 - e.leading_zeros();

    let mut acc = base.clone();
    for bit in (0..top).rev() {
        acc = mul(&acc, &acc);
        if (e >> bit) & 1 == 1 {
            acc = mul(&acc, base);
        }
    }
    acc
}

/// `signature^exponent mod n`.
pub fn modexp<const NUM_BYTES: usize, I: BigNumInstance<NUM_BYTES>>(
    instance: &I,
    signature: &BigUint,
    exponent: PublicExponent,
) -> BigUint {
    let mut step = 0;
    ladder(signature, exponent, |a, b| {
        step += 1;
        log::trace!("modexp e={} mul {}", exponent.value(), step);
        instance.mul(a, b)
    })
}
