//! The 64-byte signature encoding.

use core::fmt;

use crate::constants::{CHALLENGE_OFFSET, CHALLENGE_SIZE, RESPONSE_OFFSET, SIG_SIZE};
use crate::scalar::{Scalar, decode_scalar};

/// A Schnorr signature `(s, e)` in its wire form.
///
/// The signature is the concatenation of:
/// - `s`, the response scalar, 32 bytes big-endian
/// - `e`, the challenge, the 32-byte BLAKE2s digest the signer computed
///
/// It satisfies `e == H(pedersen(R.x, pk.x, pk.y) || msg)` where
/// `R = s*G + e*pk`.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIG_SIZE]);

impl Signature {
    pub const fn from_bytes(bytes: [u8; SIG_SIZE]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; SIG_SIZE] {
        &self.0
    }

    pub const fn to_bytes(&self) -> [u8; SIG_SIZE] {
        self.0
    }

    /// The response scalar `s`.
    pub fn response(&self) -> Scalar {
        decode_scalar(&self.0, RESPONSE_OFFSET)
    }

    /// The challenge `e` read as a scalar.
    pub fn challenge(&self) -> Scalar {
        decode_scalar(&self.0, CHALLENGE_OFFSET)
    }

    /// The raw challenge bytes, as compared during verification.
    pub fn challenge_bytes(&self) -> &[u8] {
        &self.0[CHALLENGE_OFFSET..CHALLENGE_OFFSET + CHALLENGE_SIZE]
    }
}

impl From<[u8; SIG_SIZE]> for Signature {
    fn from(bytes: [u8; SIG_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Signature> for [u8; SIG_SIZE] {
    fn from(sig: Signature) -> Self {
        sig.0
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = core::array::TryFromSliceError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Ok(Self(bytes.try_into()?))
    }
}

impl AsRef<[u8; SIG_SIZE]> for Signature {
    fn as_ref(&self) -> &[u8; SIG_SIZE] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signature")
            .field("s", &self.response())
            .field("e", &self.challenge())
            .finish()
    }
}
