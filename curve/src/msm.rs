use crate::group::ScalarBits;
use crate::{Affine, Projective};

const WINDOW_BITS: usize = 4;
const TABLE_SIZE: usize = 1 << WINDOW_BITS;

/// Compute `Σ scalars[i] * points[i]` with interleaved 4-bit windows (Straus).
///
/// All points share one doubling chain, so the cost is roughly one scalar
/// multiplication plus one table lookup-and-add per point per window.
/// Scalars are arbitrary 256-bit integers; they are not reduced first.
///
/// # Panics
///
/// Panics if `points` and `scalars` have different lengths.
pub fn multi_scalar_mul<S: ScalarBits>(points: &[Affine], scalars: &[S]) -> Affine {
    assert_eq!(
        points.len(),
        scalars.len(),
        "Points and scalars must have same length"
    );

    let tables: Vec<[Projective; TABLE_SIZE]> = points.iter().map(window_table).collect();
    let limbs: Vec<[u64; 4]> = scalars.iter().map(ScalarBits::to_u64_limbs).collect();

    let mut result = Projective::INFINITY;

    for limb_idx in (0..4).rev() {
        for shift in (0..64).step_by(WINDOW_BITS).rev() {
            for _ in 0..WINDOW_BITS {
                result = result.double();
            }

            for (table, scalar) in tables.iter().zip(limbs.iter()) {
                let window = ((scalar[limb_idx] >> shift) & (TABLE_SIZE as u64 - 1)) as usize;
                if window != 0 {
                    result += table[window];
                }
            }
        }
    }

    result.to_affine()
}

/// `[0*P, 1*P, ..., 15*P]`
fn window_table(point: &Affine) -> [Projective; TABLE_SIZE] {
    let mut table = [Projective::INFINITY; TABLE_SIZE];
    let base = Projective::from_affine(point);
    for i in 1..TABLE_SIZE {
        table[i] = table[i - 1] + base;
    }
    table
}
