//! Schnorr signature verification over the embedded curve of BN254.
//!
//! This library verifies signatures using:
//! - The Grumpkin curve `y^2 = x^3 - 17` over the BN254 scalar field
//! - A Pedersen hash to compress the commitment and public key
//! - BLAKE2s-256 for the Fiat-Shamir challenge over the message bytes
//!
//! # Overview
//!
//! A signature is 64 bytes: a response scalar `s` followed by a challenge
//! `e`. Verification recomputes the commitment
//!
//! ```text
//! R = s*G + e*pk
//! ```
//!
//! and accepts iff `blake2s(pedersen(R.x, pk.x, pk.y) || msg)` equals `e`
//! byte for byte. Scalars are taken as plain 256-bit integers; nothing is
//! reduced or range-checked beyond rejecting zero.
//!
//! Signing and key generation are out of scope.
//!
//! # Example
//!
//! ```
//! use curve::Affine;
//! use schnorr::{SignatureError, check_signature, verify_signature};
//!
//! let public_key = Affine::GENERATOR;
//! let signature = [0u8; 64];
//!
//! assert!(!verify_signature(&public_key, &signature, b"hello"));
//! assert_eq!(
//!     check_signature(&public_key, &signature, b"hello"),
//!     Err(SignatureError::ZeroResponse)
//! );
//! ```

mod constants;
mod errors;
mod hash;
mod keys;
mod scalar;
mod signatures;
mod verifier;

#[cfg(test)]
mod tests;

pub use constants::{CHALLENGE_SIZE, SCALAR_SIZE, SIG_SIZE};
pub use errors::SignatureError;
pub use hash::Blake2sHasher;
pub use keys::VerifyingKey;
pub use scalar::{Scalar, decode_scalar};
pub use signatures::Signature;
pub use verifier::{
    SchnorrVerifier, assert_valid_signature, check_signature, compute_challenge, verify_signature,
};
