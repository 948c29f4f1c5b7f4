//! Pedersen commitments and hashes over the embedded curve.
//!
//! `commit(v) = Σ v[i] * G_i` and `hash(v) = (n * H + commit(v)).x` where the
//! `G_i` are the default generators, `H` is the length generator and `n` is
//! the number of inputs. Field elements are used directly as scalars; they
//! are smaller than the curve order, so no reduction happens.

use p3_symmetric::CryptographicHasher;

use crate::generators::generator_table;
use crate::{multi_scalar_mul, Affine, BaseField};

/// `Σ inputs[i] * G_{starting_index + i}`
pub fn pedersen_commitment(inputs: &[BaseField], starting_index: u32) -> Affine {
    let generators = generator_table().default_generators(inputs.len(), starting_index);
    multi_scalar_mul(&generators, inputs)
}

/// Pedersen hash of `inputs` with generator offset 0.
pub fn pedersen_hash(inputs: &[BaseField]) -> BaseField {
    pedersen_hash_with_separator(inputs, 0)
}

/// Pedersen hash whose input generators start at `separator`.
pub fn pedersen_hash_with_separator(inputs: &[BaseField], separator: u32) -> BaseField {
    let table = generator_table();
    let mut points = table.default_generators(inputs.len(), separator);
    points.push(table.length);

    let mut scalars = inputs.to_vec();
    scalars.push(BaseField::from_canonical_u64(inputs.len() as u64));

    multi_scalar_mul(&points, &scalars).x
}

/// Pedersen hash as a Plonky3 hasher over field elements.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PedersenHasher {
    /// Index of the first input generator.
    pub starting_index: u32,
}

impl PedersenHasher {
    pub const fn new(starting_index: u32) -> Self {
        Self { starting_index }
    }
}

impl CryptographicHasher<BaseField, BaseField> for PedersenHasher {
    fn hash_iter<I>(&self, input: I) -> BaseField
    where
        I: IntoIterator<Item = BaseField>,
    {
        let inputs: Vec<BaseField> = input.into_iter().collect();
        pedersen_hash_with_separator(&inputs, self.starting_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_field(s: &str) -> BaseField {
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes).expect("valid hex");
        BaseField::from_be_bytes(&bytes)
    }

    #[test]
    fn test_hash_known_answers() {
        let one = BaseField::ONE;
        let two = BaseField::from_canonical_u64(2);
        let three = BaseField::from_canonical_u64(3);

        assert_eq!(
            pedersen_hash(&[one]),
            hex_field("03542cb720369f19a74fd05b4edfbedb27a78514ad3283f1b3270a1656cced8e")
        );
        assert_eq!(
            pedersen_hash(&[BaseField::ZERO, one]),
            hex_field("0d98561fb02ca04d00801dfdc118b2a24cea0351963587712a28d368041370e1")
        );
        assert_eq!(
            pedersen_hash(&[one, two, three]),
            hex_field("0c21b8e26f60b476d9568df4807131ff70d8b7fffb03fa07960aa1cac9be7c46")
        );
    }

    #[test]
    fn test_hasher_matches_free_function() {
        let inputs = [
            BaseField::from_canonical_u64(11),
            BaseField::from_canonical_u64(22),
            BaseField::from_canonical_u64(33),
        ];
        let hasher = PedersenHasher::default();
        assert_eq!(hasher.hash_iter(inputs), pedersen_hash(&inputs));
        assert_eq!(hasher.hash_slice(&inputs), pedersen_hash(&inputs));
    }

    #[test]
    fn test_length_is_bound() {
        // trailing zeros change the length term, so they change the hash
        let one = BaseField::ONE;
        assert_ne!(pedersen_hash(&[one]), pedersen_hash(&[one, BaseField::ZERO]));
    }

    #[test]
    fn test_separator_changes_hash() {
        let inputs = [BaseField::from_canonical_u64(5)];
        assert_ne!(
            pedersen_hash_with_separator(&inputs, 0),
            pedersen_hash_with_separator(&inputs, 1)
        );
        assert_eq!(
            PedersenHasher::new(1).hash_slice(&inputs),
            pedersen_hash_with_separator(&inputs, 1)
        );
    }

    #[test]
    fn test_separator_near_u32_max() {
        let inputs = [BaseField::ONE, BaseField::from_canonical_u64(2)];
        let hash = PedersenHasher::new(u32::MAX).hash_slice(&inputs);
        assert_eq!(hash, pedersen_hash_with_separator(&inputs, u32::MAX));
        assert_ne!(hash, pedersen_hash(&inputs));
    }

    #[test]
    fn test_commitment_is_homomorphic() {
        let a = [BaseField::from_canonical_u64(3), BaseField::from_canonical_u64(4)];
        let b = [BaseField::from_canonical_u64(10), BaseField::from_canonical_u64(20)];
        let sum = [a[0] + b[0], a[1] + b[1]];

        assert_eq!(
            pedersen_commitment(&sum, 0),
            pedersen_commitment(&a, 0) + pedersen_commitment(&b, 0)
        );
    }

    #[test]
    fn test_commitment_of_empty_input_is_identity() {
        assert_eq!(pedersen_commitment(&[], 0), Affine::INFINITY);
    }
}
