use rsa::pkcs1v15::Pkcs1v15Sign;
use rsa::sha2::Sha256;
use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

use crate::verifier::sha256_digest;

/// Generates a fresh `key_bits` key with public exponent `exponent` and signs
/// `data` with PKCS#1 v1.5 / SHA-256.
///
/// Returns the big-endian modulus and signature.
pub fn sign(data: &[u8], key_bits: usize, exponent: u32) -> rsa::Result<(Vec<u8>, Vec<u8>)> {
    let mut rng = rand_core::OsRng;

    let private_key =
        RsaPrivateKey::new_with_exp(&mut rng, key_bits, &rsa::BigUint::from(exponent))?;
    let sig = private_key.sign_with_rng(
        &mut rng,
        Pkcs1v15Sign::new::<Sha256>(),
        &sha256_digest(data),
    )?;
    let pk = private_key.to_public_key();

    Ok((pk.n().to_bytes_be(), sig))
}
