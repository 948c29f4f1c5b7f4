//! Base field of the embedded curve: the BN254 scalar field.
//! p = 0x30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001

use crate::montgomery::montgomery_field;

montgomery_field!(
    /// Base field element of the embedded curve, in Montgomery form.
    ///
    /// This is also the native field of the constraint system the verifier is
    /// designed for, so curve coordinates and hash inputs are plain elements.
    BaseField,
    modulus: [
        0x43e1f593f0000001,
        0x2833e84879b97091,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ],
    r2: [
        0x1bb8e645ae216da7,
        0x53fe3ab1e35c59e3,
        0x8c49833d53bb8085,
        0x0216d0b17f4e44a5,
    ],
    inv: 0xc2e1f593efffffff,
    generator: 5,
);

// p - 1 = 2^28 * T
const TWO_ADICITY: u32 = 28;

const T: [u64; 4] = [
    0x9b9709143e1f593f,
    0x181585d2833e8487,
    0x131a029b85045b68,
    0x000000030644e72e,
];

// (T + 1) / 2
const T_PLUS_ONE_DIV_TWO: [u64; 4] = [
    0xcdcb848a1f0faca0,
    0x0c0ac2e9419f4243,
    0x098d014dc2822db4,
    0x0000000183227397,
];

// (p - 1) / 2
const P_MINUS_ONE_DIV_TWO: [u64; 4] = [
    0xa1f0fac9f8000000,
    0x9419f4243cdcb848,
    0xdc2822db40c0ac2e,
    0x183227397098d014,
];

// 5^T, a primitive 2^28-th root of unity
const ROOT_OF_UNITY: BaseField = BaseField::from_canonical_limbs([
    0x9bd61b6e725b19f0,
    0x402d111e41112ed4,
    0x00e0a7eb8ef62abc,
    0x2a3c09f0a58a7e85,
]);

impl BaseField {
    /// Whether the canonical value is odd.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.to_canonical_limbs()[0] & 1 == 1
    }

    /// Square root by Tonelli-Shanks. Returns `None` for non-residues.
    ///
    /// Which of the two roots is returned is unspecified; callers that need a
    /// particular one normalize on [`BaseField::is_odd`].
    pub fn sqrt(&self) -> Option<Self> {
        if self.is_zero() {
            return Some(Self::ZERO);
        }
        if self.pow_vartime(P_MINUS_ONE_DIV_TWO) != Self::ONE {
            return None;
        }

        let mut m = TWO_ADICITY;
        let mut c = ROOT_OF_UNITY;
        let mut t = self.pow_vartime(T);
        let mut root = self.pow_vartime(T_PLUS_ONE_DIV_TWO);

        while t != Self::ONE {
            // least i with t^(2^i) == 1; bounded by m since t has order dividing 2^m
            let mut i = 0;
            let mut t_pow = t;
            while t_pow != Self::ONE {
                t_pow = t_pow.square();
                i += 1;
            }

            let mut b = c;
            for _ in 0..(m - i - 1) {
                b = b.square();
            }

            m = i;
            c = b.square();
            t *= c;
            root *= b;
        }

        Some(root)
    }
}
