use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::roots::Roots;

/// A complex number represented as two `f64` components.
///
/// A plain `Copy` value: every operation returns a new number and nothing is
/// cached, so derived quantities such as [`modulus`](Self::modulus) are always
/// recomputed from `re` and `im`.
///
/// Equality is exact IEEE-754 comparison on both components (no tolerance),
/// which means a value carrying a NaN component is not equal to itself. Use
/// [`approx_eq`](Self::approx_eq) where rounding noise is expected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };
    pub const ONE: Self = Self { re: 1.0, im: 0.0 };
    pub const I: Self = Self { re: 0.0, im: 1.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Build a complex number from polar coordinates.
    ///
    /// `argument` is in radians and may lie outside `(-π, π]`. A negative
    /// `modulus` reflects the point through the origin.
    #[inline]
    pub fn from_polar(modulus: f64, argument: f64) -> Self {
        Self::new(modulus * argument.cos(), modulus * argument.sin())
    }

    /// Returns `(modulus, argument)`.
    #[inline]
    pub fn to_polar(self) -> (f64, f64) {
        (self.modulus(), self.argument())
    }

    /// Returns `re² + im²` without taking the square root.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Distance from the origin, `√(re² + im²)`.
    #[inline]
    pub fn modulus(self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Signed angle from the positive real axis, in `(-π, π]`.
    #[inline]
    pub fn argument(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Quadrant of the plane, `1..=4`.
    ///
    /// The positive real and imaginary half-axes (and the origin) belong to
    /// quadrant 1, the negative real half-axis to quadrant 2. Any point with
    /// `im < 0` and `re >= 0` is quadrant 4.
    pub fn quadrant(self) -> u8 {
        if self.re >= 0.0 && self.im >= 0.0 {
            1
        } else if self.re < 0.0 && self.im >= 0.0 {
            2
        } else if self.re < 0.0 && self.im < 0.0 {
            3
        } else {
            4
        }
    }

    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Raise to a real power through the polar form: `|z|^p · e^(i·p·arg z)`.
    ///
    /// `0^0` is `1`, following [`f64::powf`].
    pub fn power(self, p: f64) -> Self {
        Self::from_polar(self.modulus().powf(p), self.argument() * p)
    }

    /// Lazily yields the `n`-th roots, ordered by increasing angle.
    ///
    /// Each call starts a fresh sequence. See [`Roots`] for the handling of
    /// non-integer and non-positive `n`.
    pub fn all_roots(self, n: f64) -> Roots {
        Roots::new(self, n)
    }

    /// The principal `n`-th root (the first element of [`all_roots`](Self::all_roots)).
    pub fn first_root(self, n: f64) -> Self {
        Roots::new(self, n).root_at(0)
    }

    /// `true` when both components differ by at most `epsilon`.
    pub fn approx_eq(self, other: Self, epsilon: f64) -> bool {
        (self.re - other.re).abs() <= epsilon && (self.im - other.im).abs() <= epsilon
    }

    /// See [`crate::quadratic::solve_quadratic`].
    pub fn solve_quadratic(a: f64, b: f64, c: f64) -> crate::Result<[Self; 2]> {
        crate::quadratic::solve_quadratic(a, b, c)
    }

    /// See [`crate::quadratic::solve_quadratic_complex`].
    pub fn solve_quadratic_complex(a: Self, b: Self, c: Self) -> crate::Result<[Self; 2]> {
        crate::quadratic::solve_quadratic_complex(a, b, c)
    }
}

// -- Hashing --

/// Bit pattern used for hashing, with `-0.0` folded onto `0.0` so that
/// values comparing equal also hash equal.
#[inline]
fn component_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else {
        x.to_bits()
    }
}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let combined = component_bits(self.im).wrapping_mul(397) ^ component_bits(self.re);
        state.write_u64(combined);
    }
}

// -- Widening conversions --

macro_rules! impl_from_real {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Complex {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::new(value as f64, 0.0)
                }
            }
        )*
    };
}

impl_from_real!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// -- Arithmetic operators --

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            re: self.re - rhs.re,
            im: self.im - rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

/// Division through the conjugate: `(a · conj b) / |b|²`.
///
/// A zero divisor is not rejected; the result carries NaN or infinite
/// components as plain `f64` division would.
impl Div for Complex {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        let numerator = self * rhs.conjugate();
        let denominator = rhs.norm_sq();
        Self {
            re: numerator.re / denominator,
            im: numerator.im / denominator,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            re: -self.re,
            im: -self.im,
        }
    }
}

macro_rules! impl_assign_op {
    ($($trait:ident :: $method:ident => $op:tt),*) => {
        $(
            impl $trait for Complex {
                #[inline]
                fn $method(&mut self, rhs: Self) {
                    *self = *self $op rhs;
                }
            }

            impl $trait<f64> for Complex {
                #[inline]
                fn $method(&mut self, rhs: f64) {
                    *self = *self $op Complex::from(rhs);
                }
            }
        )*
    };
}

impl_assign_op!(
    AddAssign::add_assign => +,
    SubAssign::sub_assign => -,
    MulAssign::mul_assign => *,
    DivAssign::div_assign => /
);

// Mixed scalar forms widen the `f64` first, so they follow exactly the same
// formulas as the complex-complex operators.
macro_rules! impl_scalar_op {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl $trait<f64> for Complex {
                type Output = Complex;

                #[inline]
                fn $method(self, rhs: f64) -> Complex {
                    $trait::$method(self, Complex::from(rhs))
                }
            }

            impl $trait<Complex> for f64 {
                type Output = Complex;

                #[inline]
                fn $method(self, rhs: Complex) -> Complex {
                    $trait::$method(Complex::from(self), rhs)
                }
            }
        )*
    };
}

impl_scalar_op!(Add::add, Sub::sub, Mul::mul, Div::div);

impl Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Mul::mul)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.copied().product()
    }
}

/// Compact algebraic form: `4`, `3i`, `1+2i`, `4-5i`.
///
/// A zero imaginary part is omitted entirely, as is a zero real part when
/// the imaginary part is not zero. Negative parts carry their own sign.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im == 0.0 {
            write!(f, "{}", self.re)
        } else if self.re == 0.0 {
            write!(f, "{}i", self.im)
        } else {
            let sign = if self.im > 0.0 { "+" } else { "" };
            write!(f, "{}{}{}i", self.re, sign, self.im)
        }
    }
}
