//! EMSA-PKCS1-v1_5 layout for SHA-256, read in little-endian byte order.
//!
//! The big-endian encoded message is
//!
//! ```text
//! EM = 0x00 || 0x01 || PS || 0x00 || DigestInfo prefix || digest
//! ```
//!
//! so once `s^e mod n` is written out little-endian the digest occupies bytes
//! `0..32` reversed, the 19-byte prefix bytes `32..51` reversed, the separator
//! byte `51`, then `PS` (`NUM_BYTES - 54` bytes of `0xff`), `0x01` and a final
//! `0x00` in the most significant byte.

/// DER `DigestInfo` header for SHA-256
/// (`3031300d060960864801650304020105000420`) with its bytes reversed.
pub const SHA256_PREFIX_LE: [u8; 19] = [
    32, 4, 0, 5, 1, 2, 4, 3, 101, 1, 72, 134, 96, 9, 6, 13, 48, 49, 48,
];

pub const DIGEST_LEN: usize = 32;

/// Digest, prefix, separator, `0x01` and leading `0x00`.
pub const FIXED_LEN: usize = DIGEST_LEN + SHA256_PREFIX_LE.len() + 3;

/// PKCS#1 v1.5 requires at least 8 bytes of padding.
pub const MIN_PS_LEN: usize = 8;

/// Padding geometry for a `NUM_BYTES`-wide modulus. Naming `PS_LEN` for a
/// modulus too small to hold 8 bytes of padding fails to compile.
pub struct Layout<const NUM_BYTES: usize>;

impl<const NUM_BYTES: usize> Layout<NUM_BYTES> {
    pub const PS_LEN: usize = {
        assert!(
            NUM_BYTES >= FIXED_LEN + MIN_PS_LEN,
            "modulus too small for a SHA-256 PKCS#1 v1.5 signature"
        );
        NUM_BYTES - FIXED_LEN
    };
}

/// Length of the `0xff` padding string for a `NUM_BYTES`-wide modulus.
pub const fn ps_len<const NUM_BYTES: usize>() -> usize {
    Layout::<NUM_BYTES>::PS_LEN
}

/// Checks that `padded` is the little-endian PKCS#1 v1.5 encoding of `digest`.
///
/// Every byte is compared; the result carries no hint of where a mismatch was.
pub fn validate<const NUM_BYTES: usize>(
    padded: &[u8; NUM_BYTES],
    digest: &[u8; DIGEST_LEN],
) -> bool {
    let ps_len = ps_len::<NUM_BYTES>();
    let mut valid = true;

    for i in 0..DIGEST_LEN {
        valid &= padded[DIGEST_LEN - 1 - i] == digest[i];
    }

    for i in DIGEST_LEN..51 {
        valid &= padded[i] == SHA256_PREFIX_LE[i - DIGEST_LEN];
    }

    valid &= padded[51] == 0x00;

    for i in 52..NUM_BYTES {
        let expected = if i < 52 + ps_len {
            0xff
        } else if i == 52 + ps_len {
            0x01
        } else if i == 53 + ps_len {
            0x00
        } else {
            // unreachable while NUM_BYTES == 54 + ps_len
            0x00
        };
        valid &= padded[i] == expected;
    }

    valid
}

/// Little-endian PKCS#1 v1.5 encoding of `digest`, the value a valid
/// signature exponentiates to.
pub fn encode<const NUM_BYTES: usize>(digest: &[u8; DIGEST_LEN]) -> [u8; NUM_BYTES] {
    let ps_len = ps_len::<NUM_BYTES>();
    let mut out = [0u8; NUM_BYTES];

    for (dst, src) in out[..DIGEST_LEN].iter_mut().zip(digest.iter().rev()) {
        *dst = *src;
    }
    out[DIGEST_LEN..51].copy_from_slice(&SHA256_PREFIX_LE);
    for b in &mut out[52..52 + ps_len] {
        *b = 0xff;
    }
    out[52 + ps_len] = 0x01;

    out
}
