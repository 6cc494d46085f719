use num_bigint::BigUint;
use num_integer::Integer;

use crate::error::{Error, Result};
use crate::witness_gen::utils::limbs_to_biguint;

/// Arithmetic a verifier needs from a big-integer backend configured for a
/// `NUM_BYTES`-wide modulus.
pub trait BigNumInstance<const NUM_BYTES: usize> {
    fn modulus(&self) -> &BigUint;

    /// `a * b mod n`, always `< n`.
    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint;

    /// Fixed-width little-endian encoding of `x`. A value that does not fit in
    /// `NUM_BYTES` must not be truncated; [`RsaModulus`] returns all zeros.
    fn to_le_bytes(&self, x: &BigUint) -> [u8; NUM_BYTES];
}

/// RSA public modulus with a precomputed Barrett reduction parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RsaModulus<const NUM_BYTES: usize> {
    n: BigUint,
    // floor(4^k / n)
    mu: BigUint,
    // bit length of n
    k: u64,
}

pub type Rsa1024 = RsaModulus<128>;
pub type Rsa2048 = RsaModulus<256>;

impl<const NUM_BYTES: usize> RsaModulus<NUM_BYTES> {
    pub fn from_biguint(n: BigUint) -> Result<Self> {
        let actual = ((n.bits() + 7) / 8) as usize;
        if actual != NUM_BYTES {
            return Err(Error::InvalidModulusWidth {
                expected: NUM_BYTES,
                actual,
            });
        }
        if n.is_even() {
            return Err(Error::EvenModulus);
        }

        let k = n.bits();
        let mu = (BigUint::from(1u8) << (2 * k)) / &n;
        log::debug!("loaded {}-bit modulus", k);

        Ok(Self { n, mu, k })
    }

    pub fn from_be_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_biguint(BigUint::from_bytes_be(bytes))
    }

    /// Builds the modulus from little-endian 64-bit limbs.
    pub fn from_limbs(limbs: &[u64]) -> Result<Self> {
        Self::from_biguint(limbs_to_biguint(limbs))
    }

    /// Decodes a big-endian signature, rejecting values `>= n`.
    pub fn signature_from_be_bytes(&self, bytes: &[u8]) -> Result<BigUint> {
        let sig = BigUint::from_bytes_be(bytes);
        if sig >= self.n {
            return Err(Error::SignatureOutOfRange);
        }
        Ok(sig)
    }

    fn reduce(&self, x: BigUint) -> BigUint {
        // Barrett's estimate only holds below 4^k, which a caller can exceed
        // by handing in a signature >= n.
        if x.bits() > 2 * self.k {
            return x.mod_floor(&self.n);
        }

        let q = ((&x >> (self.k - 1)) * &self.mu) >> (self.k + 1);
        let mut r = x - q * &self.n;
        // at most twice
        while r >= self.n {
            r -= &self.n;
        }
        r
    }
}

impl<const NUM_BYTES: usize> BigNumInstance<NUM_BYTES> for RsaModulus<NUM_BYTES> {
    fn modulus(&self) -> &BigUint {
        &self.n
    }

    fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        self.reduce(a * b)
    }

    /// A value wider than `NUM_BYTES` comes back as all zeros, which no
    /// padded message matches.
    fn to_le_bytes(&self, x: &BigUint) -> [u8; NUM_BYTES] {
        let bytes = x.to_bytes_le();
        let mut out = [0u8; NUM_BYTES];
        if bytes.len() > NUM_BYTES {
            log::warn!("{}-byte value does not fit in {} bytes", bytes.len(), NUM_BYTES);
            return out;
        }

        out[..bytes.len()].copy_from_slice(&bytes);
        out
    }
}
