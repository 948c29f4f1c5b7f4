//! Challenge recomputation and the verification entry points.

use curve::{Affine, BaseField, PedersenHasher, multi_scalar_mul};
use p3_symmetric::CryptographicHasher;

use crate::constants::{CHALLENGE_OFFSET, CHALLENGE_SIZE, PEDERSEN_INPUTS, RESPONSE_OFFSET, SIG_SIZE};
use crate::errors::SignatureError;
use crate::hash::Blake2sHasher;
use crate::scalar::{Scalar, decode_scalar};

/// Schnorr verifier over the embedded curve, generic over its two hashes.
///
/// - `A` compresses `(R.x, pk.x, pk.y)` to one field element
/// - `B` hashes that element's 32 big-endian bytes followed by the message
///   into the 32-byte challenge
///
/// The default instance uses the Pedersen hash and BLAKE2s, which is the
/// scheme implemented by the free functions [`verify_signature`],
/// [`check_signature`] and [`assert_valid_signature`].
///
/// # Example
///
/// ```
/// use curve::Affine;
/// use schnorr::SchnorrVerifier;
///
/// let verifier: SchnorrVerifier = SchnorrVerifier::default();
/// let signature = [0u8; 64];
/// assert!(!verifier.verify(&Affine::GENERATOR, &signature, b"message"));
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct SchnorrVerifier<A = PedersenHasher, B = Blake2sHasher> {
    arithmetic_hasher: A,
    byte_hasher: B,
}

impl<A, B> SchnorrVerifier<A, B>
where
    A: CryptographicHasher<BaseField, BaseField>,
    B: CryptographicHasher<u8, [u8; CHALLENGE_SIZE]>,
{
    pub const fn new(arithmetic_hasher: A, byte_hasher: B) -> Self {
        Self {
            arithmetic_hasher,
            byte_hasher,
        }
    }

    /// Recomputes the challenge for `(sig_s, sig_e)` under `public_key`.
    ///
    /// 1. `R = sig_s * G + sig_e * public_key`
    /// 2. `h = A(R.x, public_key.x, public_key.y)`
    /// 3. `challenge = B(h as 32 big-endian bytes || message)`
    ///
    /// Returns whether `R` is the point at infinity together with the
    /// challenge. When `R` is at infinity its x-coordinate hashes as zero.
    /// No validation is performed here.
    pub fn compute_challenge(
        &self,
        public_key: &Affine,
        sig_s: &Scalar,
        sig_e: &Scalar,
        message: &[u8],
    ) -> (bool, [u8; CHALLENGE_SIZE]) {
        let r = multi_scalar_mul(&[Affine::GENERATOR, *public_key], &[*sig_s, *sig_e]);

        let inputs: [BaseField; PEDERSEN_INPUTS] = [r.x, public_key.x, public_key.y];
        let hashed = self.arithmetic_hasher.hash_iter(inputs).to_be_bytes();

        let challenge = self
            .byte_hasher
            .hash_iter_slices([hashed.as_slice(), message]);

        (r.is_infinity(), challenge)
    }

    /// Verifies `signature` over `message`, reporting the first failed check.
    ///
    /// Checks run in this order:
    /// 1. the public key is on the curve
    /// 2. the public key is not the point at infinity
    /// 3. `s` is non-zero
    /// 4. `e` is non-zero
    /// 5. the recomputed `R` is not the point at infinity
    /// 6. the recomputed challenge equals `signature[32..64]` byte for byte
    ///
    /// Checks 1-4 run before any scalar multiplication.
    #[tracing::instrument(skip_all, name = "SchnorrVerifier::check")]
    pub fn check(
        &self,
        public_key: &Affine,
        signature: &[u8; SIG_SIZE],
        message: &[u8],
    ) -> Result<(), SignatureError> {
        if !public_key.is_on_curve() {
            return Err(SignatureError::PublicKeyNotOnCurve);
        }
        if public_key.is_infinity() {
            return Err(SignatureError::PublicKeyAtInfinity);
        }

        let sig_s = decode_scalar(signature, RESPONSE_OFFSET);
        if sig_s.is_zero() {
            return Err(SignatureError::ZeroResponse);
        }
        let sig_e = decode_scalar(signature, CHALLENGE_OFFSET);
        if sig_e.is_zero() {
            return Err(SignatureError::ZeroChallenge);
        }

        let (r_is_infinity, challenge) =
            self.compute_challenge(public_key, &sig_s, &sig_e, message);
        if r_is_infinity {
            return Err(SignatureError::CommitmentAtInfinity);
        }

        let expected = &signature[CHALLENGE_OFFSET..CHALLENGE_OFFSET + CHALLENGE_SIZE];
        match challenge.iter().zip(expected).position(|(a, b)| a != b) {
            Some(index) => Err(SignatureError::ChallengeMismatch { index }),
            None => Ok(()),
        }
    }

    /// Returns `true` iff `signature` is valid for `message` under
    /// `public_key`. Never panics; rejections are logged at debug level.
    pub fn verify(&self, public_key: &Affine, signature: &[u8; SIG_SIZE], message: &[u8]) -> bool {
        match self.check(public_key, signature, message) {
            Ok(()) => true,
            Err(err) => {
                tracing::debug!(reason = %err, "signature rejected");
                false
            }
        }
    }

    /// Like [`Self::verify`] but panics on an invalid signature.
    ///
    /// # Panics
    ///
    /// Panics with the first failed check's description.
    pub fn assert_valid(&self, public_key: &Affine, signature: &[u8; SIG_SIZE], message: &[u8]) {
        if let Err(err) = self.check(public_key, signature, message) {
            panic!("invalid signature: {err}");
        }
    }
}

/// Verifies a signature with the default hashes. See [`SchnorrVerifier::verify`].
///
/// # Example
///
/// ```
/// use curve::{Affine, BaseField};
/// use schnorr::verify_signature;
///
/// // a point that is not on the curve is never a valid key
/// let public_key = Affine::new(BaseField::ONE, BaseField::ONE);
/// assert!(!verify_signature(&public_key, &[1u8; 64], b"message"));
/// ```
pub fn verify_signature(public_key: &Affine, signature: &[u8; SIG_SIZE], message: &[u8]) -> bool {
    <SchnorrVerifier>::default().verify(public_key, signature, message)
}

/// Checks a signature with the default hashes. See [`SchnorrVerifier::check`].
pub fn check_signature(
    public_key: &Affine,
    signature: &[u8; SIG_SIZE],
    message: &[u8],
) -> Result<(), SignatureError> {
    <SchnorrVerifier>::default().check(public_key, signature, message)
}

/// Asserts a signature is valid with the default hashes.
///
/// # Panics
///
/// Panics if the signature does not verify. See [`SchnorrVerifier::assert_valid`].
pub fn assert_valid_signature(public_key: &Affine, signature: &[u8; SIG_SIZE], message: &[u8]) {
    <SchnorrVerifier>::default().assert_valid(public_key, signature, message)
}

/// Recomputes the challenge with the default hashes. See
/// [`SchnorrVerifier::compute_challenge`].
pub fn compute_challenge(
    public_key: &Affine,
    sig_s: &Scalar,
    sig_e: &Scalar,
    message: &[u8],
) -> (bool, [u8; CHALLENGE_SIZE]) {
    <SchnorrVerifier>::default().compute_challenge(public_key, sig_s, sig_e, message)
}
