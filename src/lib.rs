//! RSA PKCS#1 v1.5 / SHA-256 signature verification for 1024 and 2048-bit
//! moduli with public exponent 3 or 65537.

/*
    verification is two steps:

    1. em = sig^e mod n, with a ladder whose shape is fixed by e alone
        e = 3     = 0b11                 -> sig^2, * sig                 (2 muls)
        e = 65537 = 0b10000000000000001  -> 16 squarings, * sig          (17 muls)

    2. write em out little-endian in NUM_BYTES bytes and compare it byte by
       byte with

        EM = 0x00 || 0x01 || PS || 0x00 || DigestInfo || digest

       read backwards, so digest and DigestInfo come out reversed at the low
       end and the 0x01 0x00 markers sit at the top.

    NUM_BYTES = 54 + len(PS), so a 1024-bit key has 74 bytes of PS and a
    2048-bit key 202.
*/

pub mod bignum;
pub mod error;
pub mod exponent;
pub mod pkcs1v15;
pub mod verifier;
pub mod witness_gen;

#[cfg(test)]
mod test_vectors;

pub use bignum::{BigNumInstance, Rsa1024, Rsa2048, RsaModulus};
pub use error::{Error, Result};
pub use exponent::{modexp, PublicExponent};
pub use num_bigint::BigUint;
pub use verifier::{
    sha256_digest, verify_sha256_pkcs1v15, Pkcs1v15Verifier, Rsa1024Verifier, Rsa2048Verifier,
};
