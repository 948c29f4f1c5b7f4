use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Anything that can act as a scalar multiplier: an unsigned integer of at
/// most 256 bits, exposed as little-endian limbs.
///
/// Field elements expose their canonical value; raw decoded scalars may exceed
/// the group order, which is harmless since multiplication is repeated
/// addition.
pub trait ScalarBits {
    fn to_u64_limbs(&self) -> [u64; 4];
}

impl ScalarBits for [u64; 4] {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        *self
    }
}

impl ScalarBits for u64 {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        [*self, 0, 0, 0]
    }
}

pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Double-and-add, most significant bit first.
    #[inline]
    fn scalar_mul<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();

        for &limb in scalar_limbs.iter().rev() {
            for bit in (0..64).rev() {
                result = result.double();
                if (limb >> bit) & 1 == 1 {
                    result = result + *self;
                }
            }
        }

        result
    }

    fn scalar_mul_windowed<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        if self.is_identity() {
            return Self::identity();
        }

        let mut table = [Self::identity(); 16];
        table[1] = *self;

        for i in 2..16 {
            table[i] = if i % 2 == 0 {
                table[i / 2].double()
            } else {
                table[i - 1] + table[1]
            };
        }

        let scalar_limbs = scalar.to_u64_limbs();
        let mut result = Self::identity();

        for &limb in scalar_limbs.iter().rev() {
            for shift in (0..64).step_by(4).rev() {
                result = result.double();
                result = result.double();
                result = result.double();
                result = result.double();

                let window = ((limb >> shift) & 0xF) as usize;
                if window != 0 {
                    result = result + table[window];
                }
            }
        }

        result
    }

    fn mul_u64(&self, n: u64) -> Self {
        self.scalar_mul(&n)
    }
}
