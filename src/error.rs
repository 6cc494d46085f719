use thiserror::Error;

/// Configuration errors raised before any arithmetic runs.
///
/// A signature that fails verification is not an error: `verify` returns
/// `Ok(false)` for it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unsupported public exponent {0}, expected 3 or 65537")]
    InvalidExponent(u32),
    #[error("modulus must be exactly {expected} bytes wide, got {actual}")]
    InvalidModulusWidth { expected: usize, actual: usize },
    #[error("modulus must be odd")]
    EvenModulus,
    #[error("signature is not less than the modulus")]
    SignatureOutOfRange,
}

pub type Result<T> = std::result::Result<T, Error>;
