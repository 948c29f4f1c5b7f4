//! Nothing-up-my-sleeve generator derivation for Pedersen hashing.
//!
//! Generators are obtained by hashing a domain separator and an index to the
//! curve with blake3. The derivation is deterministic and matches the
//! generators used by the reference constraint-system stdlib, so hashes
//! computed here agree with hashes computed in-circuit.

use std::sync::OnceLock;

use crate::{Affine, BaseField};

/// Domain separator for the Pedersen input generators.
pub const DEFAULT_DOMAIN_SEPARATOR: &[u8] = b"DEFAULT_DOMAIN_SEPARATOR";

/// Domain separator for the generator that absorbs the input length.
pub const LENGTH_DOMAIN_SEPARATOR: &[u8] = b"pedersen_hash_length";

/// Number of default generators derived once and cached per process.
pub const DEFAULT_GENERATOR_COUNT: usize = 8;

/// Hashes `seed` to a curve point by try-and-increment.
///
/// Each attempt expands `seed || attempt || 0` and `seed || attempt || 1` with
/// blake3 into 64 bytes, reduces them to an x-coordinate and keeps the first x
/// that lands on the curve. The top bit of the first hash selects the parity
/// of y.
pub fn hash_to_curve(seed: &[u8]) -> Affine {
    let mut target = Vec::with_capacity(seed.len() + 2);
    target.extend_from_slice(seed);
    target.extend_from_slice(&[0, 0]);
    let attempt_idx = seed.len();

    let mut attempt: u8 = 0;
    loop {
        target[attempt_idx] = attempt;
        target[attempt_idx + 1] = 0;
        let hash_hi = blake3::hash(&target);
        target[attempt_idx + 1] = 1;
        let hash_lo = blake3::hash(&target);

        let mut wide = [0u8; 64];
        wide[..32].copy_from_slice(hash_hi.as_bytes());
        wide[32..].copy_from_slice(hash_lo.as_bytes());
        let x = BaseField::from_be_bytes_wide(&wide);
        let odd_y = hash_hi.as_bytes()[0] > 127;

        if let Some(point) = Affine::from_x_coordinate(x, odd_y) {
            return point;
        }
        attempt = attempt.wrapping_add(1);
    }
}

/// Derives `count` generators for `domain_separator`, starting at
/// `starting_index`.
///
/// The preimage of generator `i` is `blake3(domain_separator)` followed by
/// `i` as a big-endian u32 and 28 zero bytes. Indices wrap modulo `2^32`, so
/// a range starting near `u32::MAX` continues at index 0.
#[tracing::instrument(skip_all, name = "derive_generators")]
pub fn derive_generators(domain_separator: &[u8], count: usize, starting_index: u32) -> Vec<Affine> {
    let domain_hash = blake3::hash(domain_separator);
    (0..count as u32)
        .map(|offset| {
            let index = starting_index.wrapping_add(offset);
            let preimage = generator_preimage(domain_hash.as_bytes(), index);
            hash_to_curve(&preimage)
        })
        .collect()
}

fn generator_preimage(domain_hash: &[u8; 32], index: u32) -> [u8; 64] {
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(domain_hash);
    preimage[32..36].copy_from_slice(&index.to_be_bytes());
    preimage
}

/// Process-wide cache of the generators every Pedersen hash needs.
#[derive(Clone, Debug)]
pub struct GeneratorTable {
    /// `DEFAULT_DOMAIN_SEPARATOR` generators `0..DEFAULT_GENERATOR_COUNT`.
    pub default: Vec<Affine>,
    /// The single `LENGTH_DOMAIN_SEPARATOR` generator.
    pub length: Affine,
}

impl GeneratorTable {
    /// `count` default generators starting at `starting_index`, served from
    /// the cache when the range is covered.
    pub fn default_generators(&self, count: usize, starting_index: u32) -> Vec<Affine> {
        let start = starting_index as usize;
        let cached = start.checked_add(count).and_then(|end| self.default.get(start..end));
        match cached {
            Some(cached) => cached.to_vec(),
            None => derive_generators(DEFAULT_DOMAIN_SEPARATOR, count, starting_index),
        }
    }
}

/// The cached generator table, derived on first use.
pub fn generator_table() -> &'static GeneratorTable {
    static TABLE: OnceLock<GeneratorTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        tracing::debug!(count = DEFAULT_GENERATOR_COUNT, "deriving pedersen generators");
        let length_domain = blake3::hash(LENGTH_DOMAIN_SEPARATOR);
        GeneratorTable {
            default: derive_generators(DEFAULT_DOMAIN_SEPARATOR, DEFAULT_GENERATOR_COUNT, 0),
            length: hash_to_curve(&generator_preimage(length_domain.as_bytes(), 0)),
        }
    })
}
