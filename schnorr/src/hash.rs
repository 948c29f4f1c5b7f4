//! Byte hash used for the Fiat-Shamir challenge.

use blake2::{Blake2s256, Digest};
use p3_symmetric::CryptographicHasher;

use crate::constants::CHALLENGE_SIZE;

/// BLAKE2s-256 as a Plonky3 byte hasher.
#[derive(Copy, Clone, Debug, Default)]
pub struct Blake2sHasher;

impl CryptographicHasher<u8, [u8; CHALLENGE_SIZE]> for Blake2sHasher {
    fn hash_iter<I>(&self, input: I) -> [u8; CHALLENGE_SIZE]
    where
        I: IntoIterator<Item = u8>,
    {
        let bytes: Vec<u8> = input.into_iter().collect();
        self.hash_iter_slices([bytes.as_slice()])
    }

    fn hash_iter_slices<'a, I>(&self, input: I) -> [u8; CHALLENGE_SIZE]
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut hasher = Blake2s256::new();
        for chunk in input {
            hasher.update(chunk);
        }
        let mut out = [0u8; CHALLENGE_SIZE];
        out.copy_from_slice(&hasher.finalize());
        out
    }
}
