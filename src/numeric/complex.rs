// ============================================================================
// Complex Number
// Double-precision complex value type with IEEE-754 arithmetic
// ============================================================================

use super::config::ArithmeticConfig;
use super::errors::{NumericError, NumericResult};
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complex number `real + img·i` with `f64` components.
///
/// No validation is performed on construction: NaN and infinite components
/// are accepted and propagate through the arithmetic operators exactly as
/// IEEE-754 prescribes. The `checked_*` methods and [`Complex::divide`] are
/// the strict alternatives.
///
/// Equality is exact component-wise float equality. Use
/// [`Complex::approx_eq`] for tolerance-based comparison.
///
/// # Example
/// ```
/// use complex_value::numeric::Complex;
///
/// let a = Complex::new(2.0, 3.0);
/// let b = Complex::new(4.0, 5.0);
///
/// assert_eq!(a * b, Complex::new(-7.0, 22.0));
/// assert_eq!(a.to_string(), "(2 + 3i)");
/// assert!(Complex::new(4.0, 0.0) == 4);
/// ```
#[derive(Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex {
    real: f64,
    img: f64,
}

impl Complex {
    /// Zero (0 + 0i)
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One (1 + 0i)
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// Imaginary unit (0 + 1i)
    pub const I: Self = Self::new(0.0, 1.0);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from real and imaginary parts.
    #[inline]
    pub const fn new(real: f64, img: f64) -> Self {
        Self { real, img }
    }

    /// Create from polar coordinates.
    #[inline]
    pub fn from_polar(modulus: f64, angle: f64) -> Self {
        Self::new(modulus * angle.cos(), modulus * angle.sin())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Real part.
    #[inline]
    pub const fn real(self) -> f64 {
        self.real
    }

    /// Imaginary part.
    #[inline]
    pub const fn img(self) -> f64 {
        self.img
    }

    /// Replace the real part in place.
    #[inline]
    pub fn set_real(&mut self, real: f64) {
        self.real = real;
    }

    /// Replace the imaginary part in place.
    #[inline]
    pub fn set_img(&mut self, img: f64) {
        self.img = img;
    }

    /// Copy with the real part replaced.
    #[inline]
    pub const fn with_real(self, real: f64) -> Self {
        Self::new(real, self.img)
    }

    /// Copy with the imaginary part replaced.
    #[inline]
    pub const fn with_img(self, img: f64) -> Self {
        Self::new(self.real, img)
    }

    /// Check if both components are exactly zero (either sign).
    #[inline]
    pub fn is_zero(self) -> bool {
        self.real == 0.0 && self.img == 0.0
    }

    /// Check if the imaginary part is exactly zero.
    #[inline]
    pub fn is_real(self) -> bool {
        self.img == 0.0
    }

    /// Check if both components are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.real.is_finite() && self.img.is_finite()
    }

    /// Check if either component is NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        self.real.is_nan() || self.img.is_nan()
    }

    // ========================================================================
    // Magnitude and Phase
    // ========================================================================

    /// Squared magnitude `real² + img²` (no square root).
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.real * self.real + self.img * self.img
    }

    /// Euclidean magnitude `sqrt(real² + img²)`.
    #[inline]
    pub fn modulus(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Phase angle in radians, `atan2(img, real)`, in `[-π, π]`.
    ///
    /// The zero value has angle 0.
    #[inline]
    pub fn argument(self) -> f64 {
        self.img.atan2(self.real)
    }

    /// Returns `(modulus, angle)`.
    #[inline]
    pub fn to_polar(self) -> (f64, f64) {
        (self.modulus(), self.argument())
    }

    /// Complex conjugate `real - img·i`.
    #[inline]
    pub const fn conjugate(self) -> Self {
        Self::new(self.real, -self.img)
    }

    // ========================================================================
    // Exponentiation
    // ========================================================================

    /// Raise to an integer power via De Moivre's theorem.
    ///
    /// Converts to polar form, raises the modulus to `exponent`, multiplies
    /// the angle by `exponent`, and converts back. Zero and negative
    /// exponents are accepted; `ZERO.power(n)` is `ZERO` for `n > 0`.
    ///
    /// The result carries the rounding of the polar round trip, so
    /// `(2+3i)^2` is close to, but not bit-identical with, `-5 + 12i`.
    pub fn power(self, exponent: i32) -> Self {
        let (modulus, angle) = self.to_polar();
        Self::from_polar(modulus.powi(exponent), angle * exponent as f64)
    }

    /// Checked integer power.
    ///
    /// # Errors
    /// - `NonFinite` if either component is NaN or infinite
    /// - `DivisionByZero` for a zero base with a negative exponent
    pub fn checked_power(self, exponent: i32) -> NumericResult<Self> {
        if !self.is_finite() {
            tracing::debug!(base = %self, exponent, "power rejected: non-finite base");
            return Err(NumericError::NonFinite);
        }
        if exponent < 0 && self.is_zero() {
            tracing::debug!(exponent, "power rejected: zero base with negative exponent");
            return Err(NumericError::DivisionByZero);
        }
        Ok(self.power(exponent))
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Checked division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `rhs` has zero magnitude.
    #[inline]
    pub fn checked_div(self, rhs: Self) -> NumericResult<Self> {
        if rhs.norm_sqr() == 0.0 {
            tracing::debug!(dividend = %self, "division rejected: zero-magnitude divisor");
            return Err(NumericError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    /// Division following the zero-division policy in `config`.
    ///
    /// With `ZeroDivision::Propagate` this is the `/` operator; with
    /// `ZeroDivision::Reject` it is [`Complex::checked_div`].
    pub fn divide(self, rhs: Self, config: &ArithmeticConfig) -> NumericResult<Self> {
        if config.rejects_zero_division() {
            return self.checked_div(rhs);
        }
        if rhs.norm_sqr() == 0.0 {
            tracing::debug!(
                dividend = %self,
                "zero-magnitude divisor: result components are non-finite"
            );
        }
        Ok(self / rhs)
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// True iff each component differs by less than `tolerance`.
    ///
    /// NaN components never compare equal.
    #[inline]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.real - other.real).abs() < tolerance && (self.img - other.img).abs() < tolerance
    }

    /// [`Complex::approx_eq`] using the tolerance from `config`.
    #[inline]
    pub fn approx_eq_with(self, other: Self, config: &ArithmeticConfig) -> bool {
        self.approx_eq(other, config.tolerance)
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<f64> for Complex {
    #[inline]
    fn from(real: f64) -> Self {
        Self::new(real, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((real, img): (f64, f64)) -> Self {
        Self::new(real, img)
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(c: Complex) -> Self {
        (c.real, c.img)
    }
}

// ============================================================================
// Arithmetic Operators
// ============================================================================

impl Neg for Complex {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.real, -self.img)
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.real + rhs.real, self.img + rhs.img)
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.real - rhs.real, self.img - rhs.img)
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.real * rhs.real - self.img * rhs.img,
            self.real * rhs.img + self.img * rhs.real,
        )
    }
}

// a / b = a·conj(b) / |b|²; a zero divisor yields Infinity/NaN components.
impl Div for Complex {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        let denom = rhs.norm_sqr();
        Self::new(
            (self.real * rhs.real + self.img * rhs.img) / denom,
            (self.img * rhs.real - self.real * rhs.img) / denom,
        )
    }
}

impl Add<f64> for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: f64) -> Self::Output {
        Self::new(self.real + rhs, self.img)
    }
}

impl Sub<f64> for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: f64) -> Self::Output {
        Self::new(self.real - rhs, self.img)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.real * rhs, self.img * rhs)
    }
}

impl Div<f64> for Complex {
    type Output = Self;

    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.real / rhs, self.img / rhs)
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Complex {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Complex({}, img={})", self.real, self.img)
    }
}

/// Renders `(<real> + <img>i)`.
///
/// A negative imaginary part is rendered as-is, e.g. `(0.5 + -2.5i)`.
/// An explicit precision (`{:.2}`) applies to both components.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$} + {:.p$}i)", self.real, self.img, p = p),
            None => write!(f, "({} + {}i)", self.real, self.img),
        }
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Complex {
    /// Convert from a pair of `rust_decimal::Decimal` parts.
    ///
    /// A part is accepted only if the nearest `f64` converts back to the
    /// same decimal value, so `0.1` is fine but 28-digit values are not.
    ///
    /// # Errors
    /// Returns `PrecisionLoss` if a part cannot be represented as an `f64`
    /// without losing significant digits.
    pub fn from_decimal_parts(
        real: rust_decimal::Decimal,
        img: rust_decimal::Decimal,
    ) -> NumericResult<Self> {
        Ok(Self::new(from_decimal(real)?, from_decimal(img)?))
    }

    /// Convert to a pair of `rust_decimal::Decimal` parts.
    ///
    /// # Errors
    /// - `NonFinite` if either component is NaN or infinite
    /// - `Overflow` if a component exceeds the `Decimal` range
    pub fn to_decimal_parts(self) -> NumericResult<(rust_decimal::Decimal, rust_decimal::Decimal)> {
        Ok((to_decimal(self.real)?, to_decimal(self.img)?))
    }
}

// Shortest round-trip text of the f64 must parse back, without rounding,
// to the same decimal value.
fn from_decimal(value: rust_decimal::Decimal) -> NumericResult<f64> {
    use rust_decimal::prelude::ToPrimitive;

    let float = value.to_f64().ok_or(NumericError::PrecisionLoss)?;
    match rust_decimal::Decimal::from_str_exact(&float.to_string()) {
        Ok(back) if back == value => Ok(float),
        _ => {
            tracing::debug!(%value, "decimal rejected: not exactly representable as f64");
            Err(NumericError::PrecisionLoss)
        },
    }
}

fn to_decimal(value: f64) -> NumericResult<rust_decimal::Decimal> {
    use rust_decimal::prelude::FromPrimitive;

    if !value.is_finite() {
        return Err(NumericError::NonFinite);
    }
    rust_decimal::Decimal::from_f64(value).ok_or(NumericError::Overflow)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ZeroDivision;

    const TOL: f64 = 1e-4;

    fn assert_close(actual: Complex, real: f64, img: f64) {
        assert!(
            actual.approx_eq(Complex::new(real, img), TOL),
            "expected ({} + {}i), got {}",
            real,
            img,
            actual
        );
    }

    #[test]
    fn test_get() {
        let c1 = Complex::new(2.0, 3.0);
        let c2 = Complex::new(4.0, 5.0);
        assert_eq!(c1.real(), 2.0);
        assert_eq!(c1.img(), 3.0);
        assert_eq!(c2.real(), 4.0);
        assert_eq!(c2.img(), 5.0);

        let sum = c1 + c2;
        assert_eq!(sum.real(), 6.0);
        assert_eq!(sum.img(), 8.0);

        let diff = c1 - c2;
        assert_eq!(diff.real(), -2.0);
        assert_eq!(diff.img(), -2.0);
    }

    #[test]
    fn test_set() {
        let mut c = Complex::new(0.0, 0.0);
        c.set_real(2.0);
        c.set_img(5.0);
        assert_eq!(c.real(), 2.0);
        assert_eq!(c.img(), 5.0);
    }

    #[test]
    fn test_with_updates_leave_original() {
        let c = Complex::new(1.0, 1.0);
        let d = c.with_real(7.0).with_img(-2.0);
        assert_eq!(c, Complex::new(1.0, 1.0));
        assert_eq!(d, Complex::new(7.0, -2.0));
    }

    #[test]
    fn test_add() {
        let a = Complex::new(2.0, 3.0);
        let b = Complex::new(4.0, 5.0);
        let c = Complex::new(-1.0, 0.0);
        assert_eq!(a + b, Complex::new(6.0, 8.0));
        assert_eq!(a + c, Complex::new(1.0, 3.0));
    }

    #[test]
    fn test_sub() {
        let a = Complex::new(2.0, 3.0);
        let b = Complex::new(4.0, 5.0);
        let c = Complex::new(-1.0, 0.0);
        assert_eq!(a - b, Complex::new(-2.0, -2.0));
        assert_eq!(a - c, Complex::new(3.0, 3.0));
    }

    #[test]
    fn test_mul() {
        let a = Complex::new(2.0, 3.0);
        let b = Complex::new(4.0, 5.0);
        let c = Complex::new(-1.0, 0.0);
        assert_eq!(a * b, Complex::new(-7.0, 22.0));
        assert_eq!(a * c, Complex::new(-2.0, -3.0));
        assert_eq!(Complex::I * Complex::I, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_div() {
        let a = Complex::new(2.0, 3.0);
        let b = Complex::new(4.0, 5.0);
        let c = Complex::new(-1.0, 1.0);
        assert_close(a / b, 0.560976, 0.0487805);
        assert_close(a / c, 0.5, -2.5);
    }

    #[test]
    fn test_div_by_zero_propagates() {
        // Both numerator terms vanish against a zero divisor: 0/0
        let q = Complex::new(2.0, 3.0) / Complex::ZERO;
        assert!(q.real().is_nan());
        assert!(q.img().is_nan());

        // A non-zero scalar divisor of 0.0 gives signed infinities
        let r = Complex::new(2.0, -3.0) / 0.0;
        assert_eq!(r.real(), f64::INFINITY);
        assert_eq!(r.img(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_checked_div() {
        let a = Complex::new(2.0, 3.0);
        assert_eq!(a.checked_div(Complex::ZERO), Err(NumericError::DivisionByZero));
        assert_eq!(
            a.checked_div(Complex::new(-0.0, 0.0)),
            Err(NumericError::DivisionByZero)
        );
        assert_close(a.checked_div(Complex::new(-1.0, 1.0)).unwrap(), 0.5, -2.5);
    }

    #[test]
    fn test_divide_with_config() {
        let a = Complex::new(2.0, 3.0);

        let lenient = ArithmeticConfig::new();
        let q = a.divide(Complex::ZERO, &lenient).unwrap();
        assert!(!q.is_finite());

        let strict = ArithmeticConfig::new().with_zero_division(ZeroDivision::Reject);
        assert_eq!(
            a.divide(Complex::ZERO, &strict),
            Err(NumericError::DivisionByZero)
        );
        assert_close(a.divide(Complex::new(4.0, 5.0), &strict).unwrap(), 0.560976, 0.0487805);
    }

    #[test]
    fn test_comparison() {
        let a = Complex::new(2.0, 3.0);
        let b = Complex::new(4.0, 0.0);
        let c = Complex::new(2.0, 3.0);
        assert_eq!(a, c);
        assert_ne!(a, b);
        assert!(a != 2);
        assert!(b == 4);
        assert!(a != 2.0f32);
        assert!(b == 4.0f32);
    }

    #[test]
    fn test_equality_is_exact() {
        let a = Complex::new(0.1 + 0.2, 0.0);
        let b = Complex::new(0.3, 0.0);
        assert_ne!(a, b);
        assert!(a.approx_eq(b, 1e-12));
        assert!(a.approx_eq_with(b, &ArithmeticConfig::default()));
    }

    #[test]
    fn test_nan_never_equal() {
        let n = Complex::new(f64::NAN, 0.0);
        assert_ne!(n, n);
        assert!(!n.approx_eq(n, 1.0));
    }

    #[test]
    fn test_power() {
        let a = Complex::new(2.0, 3.0);
        let c = Complex::new(0.0, 0.0);
        assert_close(a.power(3), -46.0, 9.0);
        assert_close(a.power(2), -5.0, 12.0);
        assert_close(c.power(2), 0.0, 0.0);
    }

    #[test]
    fn test_power_zero_and_negative_exponents() {
        let a = Complex::new(2.0, 3.0);
        assert_close(a.power(0), 1.0, 0.0);
        assert_close(a.power(-1), 2.0 / 13.0, -3.0 / 13.0);
        assert_close(a.power(-1) * a, 1.0, 0.0);
        assert_close(Complex::I.power(4), 1.0, 0.0);
    }

    #[test]
    fn test_checked_power() {
        assert_eq!(
            Complex::ZERO.checked_power(-1),
            Err(NumericError::DivisionByZero)
        );
        assert_eq!(
            Complex::new(f64::INFINITY, 0.0).checked_power(2),
            Err(NumericError::NonFinite)
        );
        assert_eq!(Complex::ZERO.checked_power(3), Ok(Complex::ZERO));
        assert_close(Complex::new(2.0, 3.0).checked_power(2).unwrap(), -5.0, 12.0);
    }

    #[test]
    fn test_modulus() {
        let a = Complex::new(2.0, 3.0);
        let b = Complex::new(-4.0, 5.0);
        let c = Complex::new(0.0, 0.0);
        assert!((a.modulus() - 3.60555).abs() < TOL);
        assert!((b.modulus() - 6.40312).abs() < TOL);
        assert_eq!(c.modulus(), 0.0);
    }

    #[test]
    fn test_polar_and_conjugate() {
        let a = Complex::new(2.0, 3.0);
        assert_eq!(a.conjugate(), Complex::new(2.0, -3.0));
        assert_eq!(a * a.conjugate(), Complex::new(a.norm_sqr(), 0.0));
        assert_eq!(Complex::ZERO.argument(), 0.0);

        let (r, theta) = a.to_polar();
        assert_close(Complex::from_polar(r, theta), 2.0, 3.0);
    }

    #[test]
    fn test_scalar_operators() {
        let a = Complex::new(2.0, 3.0);
        assert_eq!(a + 1.0, Complex::new(3.0, 3.0));
        assert_eq!(a - 1.0, Complex::new(1.0, 3.0));
        assert_eq!(a * 2.0, Complex::new(4.0, 6.0));
        assert_eq!(a / 2.0, Complex::new(1.0, 1.5));
        assert_eq!(-a, Complex::new(-2.0, -3.0));
    }

    #[test]
    fn test_assign_operators() {
        let mut z = Complex::new(2.0, 3.0);
        z += Complex::new(4.0, 5.0);
        assert_eq!(z, Complex::new(6.0, 8.0));
        z -= Complex::new(4.0, 5.0);
        assert_eq!(z, Complex::new(2.0, 3.0));
        z *= Complex::new(4.0, 5.0);
        assert_eq!(z, Complex::new(-7.0, 22.0));
        z /= Complex::new(4.0, 5.0);
        assert_close(z, 2.0, 3.0);
    }

    #[test]
    fn test_predicates() {
        assert!(Complex::ZERO.is_zero());
        assert!(Complex::new(-0.0, 0.0).is_zero());
        assert!(Complex::ONE.is_real());
        assert!(!Complex::I.is_real());
        assert!(Complex::I.is_finite());
        assert!(!Complex::new(f64::INFINITY, 0.0).is_finite());
        assert!(Complex::new(0.0, f64::NAN).is_nan());
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Complex::from(2.5), Complex::new(2.5, 0.0));
        assert_eq!(Complex::from((1.0, -1.0)), Complex::new(1.0, -1.0));
        let pair: (f64, f64) = Complex::new(3.0, 4.0).into();
        assert_eq!(pair, (3.0, 4.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(2.0, 3.0).to_string(), "(2 + 3i)");
        assert_eq!(Complex::new(0.5, -2.5).to_string(), "(0.5 + -2.5i)");
        assert_eq!(Complex::new(1.0, 2.0).to_string(), "(1 + 2i)");
        assert_eq!(format!("{:.2}", Complex::new(1.0, 2.0 / 3.0)), "(1.00 + 0.67i)");
        assert_eq!(Complex::new(f64::NAN, f64::INFINITY).to_string(), "(NaN + infi)");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", Complex::new(2.0, 3.0)), "Complex(2, img=3)");
    }

    #[test]
    fn test_from_decimal_parts() {
        use rust_decimal::Decimal;

        let c = Complex::from_decimal_parts(Decimal::new(25, 1), Decimal::new(-125, 2)).unwrap();
        assert_eq!(c, Complex::new(2.5, -1.25));

        // Scale does not matter, only the value: 0.10 -> 0.1
        let d = Complex::from_decimal_parts(Decimal::new(10, 2), Decimal::ZERO).unwrap();
        assert_eq!(d, Complex::new(0.1, 0.0));
    }

    #[test]
    fn test_from_decimal_parts_precision_loss() {
        use rust_decimal::Decimal;

        assert_eq!(
            Complex::from_decimal_parts(Decimal::MAX, Decimal::MIN),
            Err(NumericError::PrecisionLoss)
        );
        assert_eq!(
            Complex::from_decimal_parts(Decimal::ONE, Decimal::new(1, 28)),
            Err(NumericError::PrecisionLoss)
        );

        let long: Decimal = "1.2345678901234567890123456789".parse().unwrap();
        assert_eq!(
            Complex::from_decimal_parts(long, Decimal::ZERO),
            Err(NumericError::PrecisionLoss)
        );
    }

    #[test]
    fn test_to_decimal_parts() {
        use rust_decimal::Decimal;

        let (re, im) = Complex::new(2.5, -1.25).to_decimal_parts().unwrap();
        assert_eq!(re, Decimal::new(25, 1));
        assert_eq!(im, Decimal::new(-125, 2));

        assert_eq!(
            Complex::new(f64::NAN, 0.0).to_decimal_parts(),
            Err(NumericError::NonFinite)
        );
        assert_eq!(
            Complex::new(1e300, 0.0).to_decimal_parts(),
            Err(NumericError::Overflow)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Complex::new(2.0, -3.5)).unwrap();
        assert_eq!(json, r#"{"real":2.0,"img":-3.5}"#);

        let back: Complex = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Complex::new(2.0, -3.5));
    }
}
