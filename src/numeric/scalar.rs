// ============================================================================
// Real-Axis Scalars
// Equality between complex values and primitive integer/float scalars
// ============================================================================

use super::complex::Complex;

/// A primitive scalar that lies on the real axis of the complex plane.
///
/// Integers are widened with `as f64`, the same promotion the arithmetic
/// operators apply.
pub trait RealScalar: Copy {
    /// The scalar as an `f64` real part.
    fn to_real(self) -> f64;
}

/// Implements [`RealScalar`] and both directions of `PartialEq` against
/// [`Complex`] for each listed primitive.
macro_rules! impl_real_scalar {
    ($($t:ty),+ $(,)?) => {
        $(
            impl RealScalar for $t {
                #[inline]
                fn to_real(self) -> f64 {
                    self as f64
                }
            }

            impl PartialEq<$t> for Complex {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    self.eq_real(*other)
                }
            }

            impl PartialEq<Complex> for $t {
                #[inline]
                fn eq(&self, other: &Complex) -> bool {
                    other.eq_real(*self)
                }
            }
        )+
    };
}

impl_real_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Complex {
    /// True iff the imaginary part is exactly zero and the real part equals
    /// `scalar` exactly.
    #[inline]
    pub fn eq_real<T: RealScalar>(self, scalar: T) -> bool {
        self.img() == 0.0 && self.real() == scalar.to_real()
    }
}
