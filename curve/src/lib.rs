//! The embedded curve of the BN254 proving system.
//!
//! `y^2 = x^3 - 17` over the BN254 scalar field. The curve has prime order
//! equal to the BN254 base field modulus, so every point other than the
//! identity generates the whole group.
//!
//! This crate provides both prime fields, affine and Jacobian points,
//! multi-scalar multiplication, deterministic generator derivation and the
//! Pedersen hash built on top of it.

mod affine;
mod basefield;
mod generators;
mod group;
mod montgomery;
mod msm;
mod pedersen;
mod projective;
mod random;
mod scalarfield;

pub use affine::Affine;
pub use basefield::BaseField;
pub use generators::{
    derive_generators, generator_table, hash_to_curve, GeneratorTable, DEFAULT_DOMAIN_SEPARATOR,
    DEFAULT_GENERATOR_COUNT, LENGTH_DOMAIN_SEPARATOR,
};
pub use group::{Group, ScalarBits};
pub use msm::multi_scalar_mul;
pub use pedersen::{pedersen_commitment, pedersen_hash, pedersen_hash_with_separator, PedersenHasher};
pub use projective::Projective;
pub use random::RandomField;
pub use scalarfield::ScalarField;
