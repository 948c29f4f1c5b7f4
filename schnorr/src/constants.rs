//! Sizes of the byte encodings used by the signature scheme.

/// Size of a serialized signature in bytes.
///
/// A signature consists of:
/// - the response scalar `s` (32 bytes, big-endian)
/// - the challenge `e` (32 bytes, the raw BLAKE2s digest)
///
/// Total: 64 bytes
pub const SIG_SIZE: usize = 64;

/// Size of one big-endian scalar inside a signature.
pub const SCALAR_SIZE: usize = 32;

/// Size of the challenge digest.
pub const CHALLENGE_SIZE: usize = 32;

/// Offset of the response scalar `s` inside a signature.
pub(crate) const RESPONSE_OFFSET: usize = 0;

/// Offset of the challenge `e` inside a signature.
pub(crate) const CHALLENGE_OFFSET: usize = SCALAR_SIZE;

/// Number of field elements absorbed by the Pedersen hash: `R.x, pk.x, pk.y`.
pub(crate) const PEDERSEN_INPUTS: usize = 3;
