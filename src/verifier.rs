use num_bigint::BigUint;
use rsa::sha2::{Digest, Sha256};

use crate::bignum::{BigNumInstance, Rsa1024, Rsa2048};
use crate::error::Result;
use crate::exponent::{modexp, PublicExponent};
use crate::pkcs1v15::{self, DIGEST_LEN};

/// Verifies a PKCS#1 v1.5 / SHA-256 signature over a precomputed digest.
///
/// Returns `Err(InvalidExponent)` without touching the signature when
/// `exponent` is neither 3 nor 65537. Otherwise `Ok(false)` means the
/// signature was rejected.
pub fn verify_sha256_pkcs1v15<const NUM_BYTES: usize, I: BigNumInstance<NUM_BYTES>>(
    instance: &I,
    digest: &[u8; DIGEST_LEN],
    signature: &BigUint,
    exponent: u32,
) -> Result<bool> {
    let exponent: PublicExponent = exponent.try_into()?;
    Ok(verify_with(instance, digest, signature, exponent))
}

fn verify_with<const NUM_BYTES: usize, I: BigNumInstance<NUM_BYTES>>(
    instance: &I,
    digest: &[u8; DIGEST_LEN],
    signature: &BigUint,
    exponent: PublicExponent,
) -> bool {
    let padded = modexp(instance, signature, exponent);
    let padded = instance.to_le_bytes(&padded);
    let valid = pkcs1v15::validate(&padded, digest);

    log::debug!(
        "{}-bit signature, e={}: {}",
        NUM_BYTES * 8,
        exponent.value(),
        if valid { "valid" } else { "rejected" }
    );
    valid
}

pub fn sha256_digest(message: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::digest(message).into()
}

/// A public key paired with its exponent, checked once up front.
#[derive(Clone, Debug)]
pub struct Pkcs1v15Verifier<const NUM_BYTES: usize, I> {
    instance: I,
    exponent: PublicExponent,
}

pub type Rsa1024Verifier = Pkcs1v15Verifier<128, Rsa1024>;
pub type Rsa2048Verifier = Pkcs1v15Verifier<256, Rsa2048>;

impl<const NUM_BYTES: usize, I: BigNumInstance<NUM_BYTES>> Pkcs1v15Verifier<NUM_BYTES, I> {
    pub fn new(instance: I, exponent: u32) -> Result<Self> {
        let exponent: PublicExponent = exponent.try_into()?;
        log::debug!(
            "configured {}-bit verifier with e={}",
            NUM_BYTES * 8,
            exponent.value()
        );
        Ok(Self { instance, exponent })
    }

    pub fn instance(&self) -> &I {
        &self.instance
    }

    pub fn exponent(&self) -> PublicExponent {
        self.exponent
    }

    pub fn verify(&self, digest: &[u8; DIGEST_LEN], signature: &BigUint) -> bool {
        verify_with(&self.instance, digest, signature, self.exponent)
    }

    /// Hashes `message` with SHA-256 and verifies `signature` over it.
    pub fn verify_message(&self, message: &[u8], signature: &BigUint) -> bool {
        self.verify(&sha256_digest(message), signature)
    }
}
