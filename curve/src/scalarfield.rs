//! Scalar field of the embedded curve: the BN254 base field.
//! q = 0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47
//!
//! The curve has prime order q and cofactor 1.

use crate::montgomery::montgomery_field;

montgomery_field!(
    /// Scalar field element for the curve, in Montgomery form.
    ScalarField,
    modulus: [
        0x3c208c16d87cfd47,
        0x97816a916871ca8d,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ],
    r2: [
        0xf32cfc5b538afa89,
        0xb5e71911d44501fb,
        0x47ab1eff0a417ff6,
        0x06d89f71cab8351f,
    ],
    inv: 0x87d20782e4866389,
    generator: 3,
);
