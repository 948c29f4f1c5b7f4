use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::{BaseField, ScalarField};

/// Uniform sampling of field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;

    /// Samples until a non-zero element comes up. Used for secret scalars and
    /// nonces, where zero would degenerate to the identity.
    fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_random_field {
    ($($field:ty),*) => {
        $(
            impl RandomField for $field {
                #[inline]
                fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    StandardUniform.sample(rng)
                }

                fn random_nonzero<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    loop {
                        let candidate = Self::random(rng);
                        if !candidate.is_zero() {
                            return candidate;
                        }
                    }
                }
            }
        )*
    };
}

impl_random_field!(BaseField, ScalarField);
