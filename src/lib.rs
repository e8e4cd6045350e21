// ============================================================================
// Complex Value Library
// Double-precision complex numbers with checked arithmetic
// ============================================================================

//! # Complex Value
//!
//! A small `f64` complex number value type.
//!
//! ## Features
//!
//! - **Operator arithmetic** (`+`, `-`, `*`, `/`) with IEEE-754 semantics
//! - **Exact equality** against other complex values and against integer or
//!   floating-point scalars on the real axis
//! - **Integer powers** via polar form (De Moivre's theorem)
//! - **Checked operations** that report division by zero instead of
//!   producing NaN/Infinity
//!
//! ## Example
//!
//! ```rust
//! use complex_value::prelude::*;
//!
//! let a = Complex::new(2.0, 3.0);
//! let b = Complex::new(4.0, 5.0);
//!
//! assert_eq!(a + b, Complex::new(6.0, 8.0));
//! assert!((a / b).approx_eq(Complex::new(0.560976, 0.0487805), 1e-4));
//! assert!((a.modulus() - 3.60555).abs() < 1e-4);
//!
//! assert_eq!(a.checked_div(Complex::ZERO), Err(NumericError::DivisionByZero));
//! println!("a^3 = {:.3}", a.power(3));
//! ```

pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        ArithmeticConfig, Complex, NumericError, NumericResult, RealScalar, ZeroDivision,
    };
}
