//! Verifying keys, and a signer used to produce test signatures.

use curve::{Affine, BaseField};
use serde::{Deserialize, Serialize};

use crate::errors::SignatureError;
use crate::signatures::Signature;
use crate::verifier::SchnorrVerifier;

/// A public verifying key: a point on the embedded curve.
///
/// Construction does not validate the point; an off-curve or infinite key is
/// rejected when a signature is checked against it.
///
/// # Example
///
/// ```
/// use curve::{Affine, BaseField};
/// use schnorr::VerifyingKey;
///
/// let key = VerifyingKey::from_coordinates(BaseField::ONE, BaseField::ONE);
/// assert!(!key.is_valid());
///
/// let key = VerifyingKey::from(Affine::GENERATOR);
/// assert!(key.is_valid());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerifyingKey {
    point: Affine,
}

impl VerifyingKey {
    pub const fn new(point: Affine) -> Self {
        Self { point }
    }

    pub const fn from_coordinates(x: BaseField, y: BaseField) -> Self {
        Self {
            point: Affine::new(x, y),
        }
    }

    pub const fn point(&self) -> &Affine {
        &self.point
    }

    /// Whether the key is a finite point on the curve.
    pub fn is_valid(&self) -> bool {
        self.point.is_on_curve() && !self.point.is_infinity()
    }

    /// Verifies a signature on a message under this key.
    ///
    /// Returns `true` iff the signature is valid; see
    /// [`SchnorrVerifier::verify`] for the checks performed.
    pub fn verify(&self, msg: &[u8], sig: &Signature) -> bool {
        <SchnorrVerifier>::default().verify(&self.point, sig.as_bytes(), msg)
    }

    /// Like [`Self::verify`] but reports why a signature was rejected.
    pub fn check(&self, msg: &[u8], sig: &Signature) -> Result<(), SignatureError> {
        <SchnorrVerifier>::default().check(&self.point, sig.as_bytes(), msg)
    }
}

impl From<Affine> for VerifyingKey {
    fn from(point: Affine) -> Self {
        Self::new(point)
    }
}

impl From<VerifyingKey> for Affine {
    fn from(key: VerifyingKey) -> Self {
        key.point
    }
}

#[cfg(test)]
pub(crate) use signing::SigningKey;
