//! 256-bit scalars as they appear inside a signature.

use core::fmt;

use curve::ScalarBits;
use serde::{Deserialize, Serialize};

use crate::constants::{SCALAR_SIZE, SIG_SIZE};

/// A 256-bit unsigned integer decoded from 32 big-endian bytes.
///
/// The value is used as-is for scalar multiplication: it is neither reduced
/// modulo the curve order nor range-checked. Since the group has prime order
/// `q`, multiplying by `v` and by `v mod q` give the same point.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scalar {
    /// Little-endian 64-bit limbs.
    limbs: [u64; 4],
}

impl Scalar {
    pub const ZERO: Self = Self { limbs: [0; 4] };

    /// Decodes 32 big-endian bytes.
    pub fn from_be_bytes(bytes: &[u8; SCALAR_SIZE]) -> Self {
        let mut limbs = [0u64; 4];
        for (i, chunk) in bytes.rchunks_exact(8).enumerate() {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            limbs[i] = u64::from_be_bytes(word);
        }
        Self { limbs }
    }

    /// Builds a scalar from its low and high 128-bit halves.
    pub const fn from_halves(lo: u128, hi: u128) -> Self {
        Self {
            limbs: [lo as u64, (lo >> 64) as u64, hi as u64, (hi >> 64) as u64],
        }
    }

    /// Low 128 bits.
    pub const fn lo(&self) -> u128 {
        (self.limbs[0] as u128) | ((self.limbs[1] as u128) << 64)
    }

    /// High 128 bits.
    pub const fn hi(&self) -> u128 {
        (self.limbs[2] as u128) | ((self.limbs[3] as u128) << 64)
    }

    pub const fn limbs(&self) -> [u64; 4] {
        self.limbs
    }

    pub fn is_zero(&self) -> bool {
        self.limbs == [0; 4]
    }

    /// The 32 big-endian bytes this scalar was decoded from.
    pub fn to_be_bytes(&self) -> [u8; SCALAR_SIZE] {
        let mut out = [0u8; SCALAR_SIZE];
        for (i, limb) in self.limbs.iter().rev().enumerate() {
            out[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_be_bytes());
        }
        out
    }
}

impl ScalarBits for Scalar {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.limbs
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{:032x}{:032x})", self.hi(), self.lo())
    }
}

/// Decodes the 32-byte big-endian scalar at `offset` in a signature.
///
/// `bytes[offset..offset + 16]` is the high half and
/// `bytes[offset + 16..offset + 32]` the low half. Callers pass `0` for the
/// response scalar and `32` for the challenge.
///
/// # Panics
///
/// Panics if `offset + 32 > 64`.
pub fn decode_scalar(bytes: &[u8; SIG_SIZE], offset: usize) -> Scalar {
    debug_assert!(offset + SCALAR_SIZE <= SIG_SIZE, "scalar offset out of range");
    let mut field = [0u8; SCALAR_SIZE];
    field.copy_from_slice(&bytes[offset..offset + SCALAR_SIZE]);
    Scalar::from_be_bytes(&field)
}
