// Grumpkin: E(GF(p)) : y^2 = x^3 - 17, p = BN254 scalar field modulus
// E generator point: (1 : 17631683881184975370165255887551781615748388533673675138860 : 1)
// Curve prime order (hex): 0x30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47
// Curve cofactor: 1

use crate::{BaseField, Group, ScalarBits, ScalarField};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// Affine point on the elliptic curve.
/// Represents a point in affine coordinates (x, y) or the point at infinity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Affine {
    /// The x-coordinate of the point
    pub x: BaseField,
    /// The y-coordinate of the point
    pub y: BaseField,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Affine {
    /// The 'b' coefficient: -17. The 'a' coefficient is zero.
    pub const CURVE_B: BaseField = BaseField::from_canonical_limbs([
        0x43e1f593effffff0,
        0x2833e84879b97091,
        0xb85045b68181585d,
        0x30644e72e131a029,
    ]);

    /// The point at infinity (identity element).
    /// Coordinates are zero so that `x` reads as zero when hashed.
    pub const INFINITY: Self = Affine {
        x: BaseField::ZERO,
        y: BaseField::ZERO,
        is_infinity: true,
    };

    /// Canonical base point `(1, sqrt(-16))`.
    pub const GENERATOR: Self = Affine {
        x: BaseField::ONE,
        y: BaseField::from_canonical_limbs([
            0x833fc48d823f272c,
            0x2d270d45f1181294,
            0xcf135e7506a45d63,
            0x0000000000000002,
        ]),
        is_infinity: false,
    };

    /// Create a new affine point. Curve membership is not checked.
    pub const fn new(x: BaseField, y: BaseField) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    /// Check if this point is the point at infinity.
    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check if a point is on the curve: y^2 = x^3 - 17.
    /// The point at infinity is on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }

        let y2 = self.y.square();
        let x3 = self.x.square() * self.x;

        y2 == x3 + Self::CURVE_B
    }

    /// Lifts an x-coordinate onto the curve, picking the root whose parity
    /// matches `odd_y`. Returns `None` when `x^3 - 17` is not a square.
    pub fn from_x_coordinate(x: BaseField, odd_y: bool) -> Option<Self> {
        let y = (x.square() * x + Self::CURVE_B).sqrt()?;
        let y = if y.is_odd() == odd_y { y } else { -y };
        Some(Affine::new(x, y))
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity {
            return *self;
        }

        // If y = 0, then 2P = O
        if self.y.is_zero() {
            return Self::INFINITY;
        }

        // λ = 3x^2 / 2y
        let x2 = self.x.square();
        let numerator = x2 + x2 + x2;
        let lambda = numerator / self.y.double();

        // x_r = λ^2 - 2x
        let x_r = lambda.square() - self.x.double();

        // y_r = λ(x - x_r) - y
        let y_r = lambda * (self.x - x_r) - self.y;

        Affine::new(x_r, y_r)
    }

    /// Negate a point.
    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        Affine::new(self.x, -self.y)
    }
}

impl Group for Affine {
    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn generator() -> Self {
        Self::GENERATOR
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.is_infinity {
            return other;
        }
        if other.is_infinity {
            return self;
        }

        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            } else {
                // Points are inverses
                return Self::INFINITY;
            }
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = (other.y - self.y) / (other.x - self.x);

        // x_r = λ^2 - x1 - x2
        let x_r = lambda.square() - self.x - other.x;

        // y_r = λ(x1 - x_r) - y1
        let y_r = lambda * (self.x - x_r) - self.y;

        Affine::new(x_r, y_r)
    }
}

impl AddAssign for Affine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Scalar multiplication
impl Mul<ScalarField> for Affine {
    type Output = Self;

    fn mul(self, scalar: ScalarField) -> Self {
        crate::Projective::from(self).scalar_mul(&scalar).to_affine()
    }
}

impl Mul<&ScalarField> for Affine {
    type Output = Self;

    fn mul(self, scalar: &ScalarField) -> Self {
        self * *scalar
    }
}

impl Mul<Affine> for ScalarField {
    type Output = Affine;

    fn mul(self, point: Affine) -> Affine {
        point * self
    }
}

impl Affine {
    /// Scalar multiplication by any [`ScalarBits`], evaluated in Jacobian
    /// coordinates.
    pub fn mul_bits<S: ScalarBits + ?Sized>(&self, scalar: &S) -> Self {
        crate::Projective::from(*self)
            .scalar_mul_windowed(scalar)
            .to_affine()
    }
}
