//! Four-limb Montgomery arithmetic shared by the base and scalar fields.
//!
//! Both fields of the embedded curve are ~254-bit primes, so every element fits
//! in `[u64; 4]` little-endian limbs with two spare top bits. The helpers here
//! are `const fn` so field constants can be converted into Montgomery form at
//! compile time. The [`montgomery_field!`] macro wires them into a concrete
//! field type.

/// Carrying addition
#[inline]
pub(crate) const fn carrying_add(a: u64, b: u64, carry: bool) -> (u64, bool) {
    let (sum, overflow1) = a.overflowing_add(b);
    let (sum, overflow2) = sum.overflowing_add(carry as u64);
    (sum, overflow1 || overflow2)
}

/// Borrowing subtraction
#[inline]
pub(crate) const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

/// Raw 256-bit subtraction, returning the final borrow.
#[inline]
pub(crate) const fn sub_with_borrow(a: [u64; 4], b: [u64; 4]) -> ([u64; 4], bool) {
    let (r0, borrow) = a[0].overflowing_sub(b[0]);
    let (r1, borrow) = borrowing_sub(a[1], b[1], borrow);
    let (r2, borrow) = borrowing_sub(a[2], b[2], borrow);
    let (r3, borrow) = borrowing_sub(a[3], b[3], borrow);
    ([r0, r1, r2, r3], borrow)
}

/// `a < modulus`
#[inline]
pub(crate) const fn is_canonical(a: [u64; 4], modulus: [u64; 4]) -> bool {
    sub_with_borrow(a, modulus).1
}

/// `(a + b) mod p` for canonical inputs.
#[inline]
pub(crate) const fn add_mod(a: [u64; 4], b: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    // p < 2^254, so the sum of two canonical values never leaves 256 bits.
    let (r0, carry) = a[0].overflowing_add(b[0]);
    let (r1, carry) = carrying_add(a[1], b[1], carry);
    let (r2, carry) = carrying_add(a[2], b[2], carry);
    let (r3, _) = carrying_add(a[3], b[3], carry);
    let sum = [r0, r1, r2, r3];

    let (reduced, borrow) = sub_with_borrow(sum, modulus);
    if borrow {
        sum
    } else {
        reduced
    }
}

/// `(a - b) mod p` for canonical inputs.
#[inline]
pub(crate) const fn sub_mod(a: [u64; 4], b: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    let (diff, borrow) = sub_with_borrow(a, b);
    if borrow {
        let (r0, carry) = diff[0].overflowing_add(modulus[0]);
        let (r1, carry) = carrying_add(diff[1], modulus[1], carry);
        let (r2, carry) = carrying_add(diff[2], modulus[2], carry);
        let (r3, _) = carrying_add(diff[3], modulus[3], carry);
        [r0, r1, r2, r3]
    } else {
        diff
    }
}

/// `-a mod p`
#[inline]
pub(crate) const fn neg_mod(a: [u64; 4], modulus: [u64; 4]) -> [u64; 4] {
    if a[0] == 0 && a[1] == 0 && a[2] == 0 && a[3] == 0 {
        return [0, 0, 0, 0];
    }
    sub_mod(modulus, a, modulus)
}

/// Montgomery multiplication: `a * b * 2^-256 mod p`.
///
/// `a` may be any 256-bit value as long as `b < p`; the product then stays
/// below `2^256 * p` and a single conditional subtraction canonicalizes the
/// result. This is what lets `from_canonical_limbs` reduce arbitrary input.
pub(crate) const fn montgomery_mul(
    a: [u64; 4],
    b: [u64; 4],
    modulus: [u64; 4],
    inv: u64,
) -> [u64; 4] {
    let mut t = [0u64; 9];

    let mut i = 0;
    while i < 4 {
        let mut carry = 0u128;
        let mut j = 0;
        while j < 4 {
            let product = (a[i] as u128) * (b[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
            j += 1;
        }
        t[i + 4] = carry as u64;
        i += 1;
    }

    let mut i = 0;
    while i < 4 {
        let k = t[i].wrapping_mul(inv);
        let mut carry = 0u128;
        let mut j = 0;
        while j < 4 {
            let product = (k as u128) * (modulus[j] as u128) + (t[i + j] as u128) + carry;
            t[i + j] = product as u64;
            carry = product >> 64;
            j += 1;
        }
        let mut idx = i + 4;
        while idx < 9 && carry != 0 {
            let sum = (t[idx] as u128) + carry;
            t[idx] = sum as u64;
            carry = sum >> 64;
            idx += 1;
        }
        i += 1;
    }

    let result = [t[4], t[5], t[6], t[7]];
    let (reduced, borrow) = sub_with_borrow(result, modulus);
    if borrow {
        result
    } else {
        reduced
    }
}

/// Big-endian 32 bytes to little-endian limbs.
#[inline]
pub(crate) const fn limbs_from_be_bytes(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    let mut i = 0;
    while i < 32 {
        // byte 0 is the most significant
        let limb = 3 - i / 8;
        limbs[limb] = (limbs[limb] << 8) | bytes[i] as u64;
        i += 1;
    }
    limbs
}

/// Little-endian limbs to big-endian 32 bytes.
#[inline]
pub(crate) fn limbs_to_be_bytes(limbs: [u64; 4]) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, limb) in out.chunks_exact_mut(8).zip(limbs.iter().rev()) {
        chunk.copy_from_slice(&limb.to_be_bytes());
    }
    out
}

/// Defines a prime field over four Montgomery limbs.
///
/// The generated type implements the `p3-field` trait family so it can be
/// used anywhere a Plonky3 field is expected, plus inherent helpers for byte
/// conversion and exponentiation.
macro_rules! montgomery_field {
    (
        $(#[$meta:meta])*
        $name:ident,
        modulus: $modulus:expr,
        r2: $r2:expr,
        inv: $inv:expr,
        generator: $generator:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, Eq, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            /// Montgomery form: value * R mod p, where R = 2^256
            limbs: [u64; 4],
        }

        impl $name {
            /// Field modulus, little-endian limbs.
            pub const MODULUS: [u64; 4] = $modulus;
            const R2: [u64; 4] = $r2;
            const INV: u64 = $inv;

            pub const ZERO: Self = Self { limbs: [0, 0, 0, 0] };
            pub const ONE: Self = Self::from_canonical_limbs([1, 0, 0, 0]);

            /// Converts little-endian limbs into the field, reducing modulo p.
            #[inline]
            pub const fn from_canonical_limbs(limbs: [u64; 4]) -> Self {
                Self {
                    limbs: $crate::montgomery::montgomery_mul(
                        limbs,
                        Self::R2,
                        Self::MODULUS,
                        Self::INV,
                    ),
                }
            }

            #[inline]
            pub const fn from_canonical_u64(val: u64) -> Self {
                Self::from_canonical_limbs([val, 0, 0, 0])
            }

            /// Canonical (non-Montgomery) little-endian limbs.
            #[inline]
            pub const fn to_canonical_limbs(&self) -> [u64; 4] {
                $crate::montgomery::montgomery_mul(
                    self.limbs,
                    [1, 0, 0, 0],
                    Self::MODULUS,
                    Self::INV,
                )
            }

            /// Interprets 32 big-endian bytes as an integer and reduces it modulo p.
            #[inline]
            pub const fn from_be_bytes(bytes: &[u8; 32]) -> Self {
                Self::from_canonical_limbs($crate::montgomery::limbs_from_be_bytes(bytes))
            }

            /// Like [`Self::from_be_bytes`] but for 64 bytes, treated as one 512-bit
            /// big-endian integer.
            pub fn from_be_bytes_wide(bytes: &[u8; 64]) -> Self {
                let mut hi = [0u8; 32];
                let mut lo = [0u8; 32];
                hi.copy_from_slice(&bytes[..32]);
                lo.copy_from_slice(&bytes[32..]);
                // hi * 2^256 + lo; the Montgomery form of 2^256 is R2.
                Self::from_be_bytes(&hi) * Self { limbs: Self::R2 } + Self::from_be_bytes(&lo)
            }

            /// Canonical value as 32 big-endian bytes.
            #[inline]
            pub fn to_be_bytes(&self) -> [u8; 32] {
                $crate::montgomery::limbs_to_be_bytes(self.to_canonical_limbs())
            }

            /// Check if this field element is zero
            #[inline]
            pub fn is_zero(&self) -> bool {
                self.limbs == [0, 0, 0, 0]
            }

            #[inline]
            pub fn square(&self) -> Self {
                *self * *self
            }

            #[inline]
            pub fn double(&self) -> Self {
                *self + *self
            }

            /// Variable-time exponentiation by a little-endian exponent.
            pub fn pow_vartime(&self, exp: [u64; 4]) -> Self {
                let mut result = Self::ONE;
                for &limb in exp.iter().rev() {
                    for bit in (0..64).rev() {
                        result = result.square();
                        if (limb >> bit) & 1 == 1 {
                            result *= *self;
                        }
                    }
                }
                result
            }

            /// Multiplicative inverse via Fermat; zero maps to zero.
            pub fn inverse(&self) -> Self {
                let exp = $crate::montgomery::sub_mod(Self::MODULUS, [2, 0, 0, 0], Self::MODULUS);
                self.pow_vartime(exp)
            }
        }

        impl ::p3_field::PrimeCharacteristicRing for $name {
            type PrimeSubfield = Self;

            const ZERO: Self = Self::ZERO;
            const ONE: Self = Self::ONE;
            const TWO: Self = Self::from_canonical_u64(2);
            const NEG_ONE: Self = Self {
                limbs: $crate::montgomery::neg_mod(Self::ONE.limbs, Self::MODULUS),
            };

            #[inline]
            fn from_prime_subfield(elem: Self::PrimeSubfield) -> Self {
                elem
            }
        }

        impl ::p3_field::Packable for $name {}

        impl ::p3_field::RawDataSerializable for $name {
            const NUM_BYTES: usize = 32;

            fn into_bytes(self) -> impl IntoIterator<Item = u8> {
                let mut bytes = self.to_be_bytes();
                bytes.reverse();
                bytes
            }
        }

        impl ::rand::distr::Distribution<$name> for ::rand::distr::StandardUniform {
            fn sample<R: ::rand::Rng + ?Sized>(&self, rng: &mut R) -> $name {
                loop {
                    let mut limbs: [u64; 4] = rng.random();
                    limbs[3] &= u64::MAX >> 2;
                    if $crate::montgomery::is_canonical(limbs, $name::MODULUS) {
                        return $name::from_canonical_limbs(limbs);
                    }
                }
            }
        }

        impl ::p3_field::Field for $name {
            type Packing = Self;

            const GENERATOR: Self = Self::from_canonical_u64($generator);

            fn try_inverse(&self) -> Option<Self> {
                if self.is_zero() {
                    None
                } else {
                    Some($name::inverse(self))
                }
            }

            #[inline]
            fn halve(&self) -> Self {
                // p is odd, so (x + p) / 2 is exact whenever x is odd.
                let limbs = if self.limbs[0] & 1 == 1 {
                    let (r0, carry) = self.limbs[0].overflowing_add(Self::MODULUS[0]);
                    let (r1, carry) = $crate::montgomery::carrying_add(self.limbs[1], Self::MODULUS[1], carry);
                    let (r2, carry) = $crate::montgomery::carrying_add(self.limbs[2], Self::MODULUS[2], carry);
                    let (r3, _) = $crate::montgomery::carrying_add(self.limbs[3], Self::MODULUS[3], carry);
                    [r0, r1, r2, r3]
                } else {
                    self.limbs
                };
                Self {
                    limbs: [
                        (limbs[0] >> 1) | (limbs[1] << 63),
                        (limbs[1] >> 1) | (limbs[2] << 63),
                        (limbs[2] >> 1) | (limbs[3] << 63),
                        limbs[3] >> 1,
                    ],
                }
            }

            fn order() -> ::num_bigint::BigUint {
                let mut bytes = Vec::with_capacity(32);
                for &limb in &Self::MODULUS {
                    bytes.extend_from_slice(&limb.to_le_bytes());
                }
                ::num_bigint::BigUint::from_bytes_le(&bytes)
            }
        }

        impl ::p3_field::PrimeField for $name {
            fn as_canonical_biguint(&self) -> ::num_bigint::BigUint {
                ::num_bigint::BigUint::from_bytes_be(&self.to_be_bytes())
            }
        }

        $crate::montgomery::quotient_map_unsigned!($name; u8, u16, u32, u64);
        $crate::montgomery::quotient_map_signed!($name; i8, i16, i32, i64);

        impl ::p3_field::integers::QuotientMap<u128> for $name {
            fn from_int(int: u128) -> Self {
                Self::from_canonical_limbs([int as u64, (int >> 64) as u64, 0, 0])
            }

            fn from_canonical_checked(int: u128) -> Option<Self> {
                // every u128 is below p
                Some(Self::from_int(int))
            }

            unsafe fn from_canonical_unchecked(int: u128) -> Self {
                Self::from_int(int)
            }
        }

        impl ::p3_field::integers::QuotientMap<i128> for $name {
            fn from_int(int: i128) -> Self {
                let magnitude = <Self as ::p3_field::integers::QuotientMap<u128>>::from_int(
                    int.unsigned_abs(),
                );
                if int < 0 { -magnitude } else { magnitude }
            }

            fn from_canonical_checked(int: i128) -> Option<Self> {
                Some(Self::from_int(int))
            }

            unsafe fn from_canonical_unchecked(int: i128) -> Self {
                Self::from_int(int)
            }
        }

        impl ::core::ops::Add for $name {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self {
                    limbs: $crate::montgomery::add_mod(self.limbs, rhs.limbs, Self::MODULUS),
                }
            }
        }

        impl ::core::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl ::core::ops::Sub for $name {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self {
                    limbs: $crate::montgomery::sub_mod(self.limbs, rhs.limbs, Self::MODULUS),
                }
            }
        }

        impl ::core::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl ::core::ops::Neg for $name {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self {
                    limbs: $crate::montgomery::neg_mod(self.limbs, Self::MODULUS),
                }
            }
        }

        impl ::core::ops::Mul for $name {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self {
                    limbs: $crate::montgomery::montgomery_mul(
                        self.limbs,
                        rhs.limbs,
                        Self::MODULUS,
                        Self::INV,
                    ),
                }
            }
        }

        impl ::core::ops::MulAssign for $name {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        #[allow(clippy::suspicious_arithmetic_impl)]
        impl ::core::ops::Div for $name {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                self * rhs.inverse()
            }
        }

        impl ::core::ops::DivAssign for $name {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl ::core::iter::Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ZERO, |acc, x| acc + x)
            }
        }

        impl ::core::iter::Product for $name {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::ONE, |acc, x| acc * x)
            }
        }

        impl ::core::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                let a = self.to_canonical_limbs();
                let b = other.to_canonical_limbs();
                a.iter().rev().cmp(b.iter().rev())
            }
        }

        impl ::core::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<::core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                self.limbs.hash(state);
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                let canonical = self.to_canonical_limbs();
                write!(
                    f,
                    "0x{:016x}{:016x}{:016x}{:016x}",
                    canonical[3], canonical[2], canonical[1], canonical[0]
                )
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl $crate::group::ScalarBits for $name {
            #[inline]
            fn to_u64_limbs(&self) -> [u64; 4] {
                self.to_canonical_limbs()
            }
        }
    };
}

macro_rules! quotient_map_unsigned {
    ($name:ident; $($int:ty),*) => {
        $(
            impl ::p3_field::integers::QuotientMap<$int> for $name {
                fn from_int(int: $int) -> Self {
                    Self::from_canonical_u64(int as u64)
                }

                fn from_canonical_checked(int: $int) -> Option<Self> {
                    Some(Self::from_canonical_u64(int as u64))
                }

                unsafe fn from_canonical_unchecked(int: $int) -> Self {
                    Self::from_canonical_u64(int as u64)
                }
            }
        )*
    };
}

macro_rules! quotient_map_signed {
    ($name:ident; $($int:ty),*) => {
        $(
            impl ::p3_field::integers::QuotientMap<$int> for $name {
                fn from_int(int: $int) -> Self {
                    let magnitude = Self::from_canonical_u64(int.unsigned_abs() as u64);
                    if int < 0 { -magnitude } else { magnitude }
                }

                fn from_canonical_checked(int: $int) -> Option<Self> {
                    Some(Self::from_int(int))
                }

                unsafe fn from_canonical_unchecked(int: $int) -> Self {
                    Self::from_int(int)
                }
            }
        )*
    };
}

pub(crate) use montgomery_field;
pub(crate) use quotient_map_signed;
pub(crate) use quotient_map_unsigned;
