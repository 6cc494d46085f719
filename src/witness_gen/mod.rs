//! Witness generation for proving an RSA verification.
//!
//! A proving backend cannot divide, so every modular multiplication of the
//! exponentiation ladder is recorded together with its quotient:
//!
//! ```text
//! a * b = q * n + r,  r < n
//! ```
//!
//! Operands are split into 64-bit limbs and treated as polynomials in
//! `X = 2^64`. The backend then only has to show that `a(X) * b(X)` and
//! `q(X) * n(X) + r(X)` agree at a random point and that their difference
//! carries to zero limb by limb, which [`check_trace::check_carry_to_zero`]
//! replays over the integers.
//!
//! For e = 65537 the trace has 17 steps: sixteen squarings followed by one
//! multiplication by the signature. For e = 3 it has two.

pub mod check_trace;
mod poly_mul;
#[cfg(any(test, feature = "test-utils"))]
pub mod signature;
pub mod trace_gen;
pub mod utils;

pub use check_trace::{check_carry_to_zero, check_trace};
pub use trace_gen::{FpMulWitness, MulStep, Trace};
