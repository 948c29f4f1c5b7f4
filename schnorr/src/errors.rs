//! Error types for the Schnorr signature scheme.

use thiserror::Error;

/// Reasons a signature fails verification.
///
/// The variants are listed in the order the checks run; verification reports
/// the first one that fails.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The public key does not satisfy the curve equation.
    #[error("public key is not on the curve")]
    PublicKeyNotOnCurve,

    /// The public key is the point at infinity.
    #[error("public key is the point at infinity")]
    PublicKeyAtInfinity,

    /// The response scalar `s` decodes to zero.
    #[error("signature response scalar is zero")]
    ZeroResponse,

    /// The challenge scalar `e` decodes to zero.
    #[error("signature challenge scalar is zero")]
    ZeroChallenge,

    /// The recomputed commitment `R = s*G + e*pk` is the point at infinity.
    #[error("recomputed commitment is the point at infinity")]
    CommitmentAtInfinity,

    /// The recomputed challenge differs from the signature's challenge.
    #[error("challenge mismatch at byte {index}")]
    ChallengeMismatch {
        /// Index of the first differing byte.
        index: usize,
    },
}
