// ============================================================================
// Numeric Module
// Double-precision complex arithmetic
// ============================================================================
//
// This module provides:
// - Complex: complex value type with IEEE-754 operator arithmetic
// - RealScalar: real-axis equality against primitive integers and floats
// - NumericError: Error types for the checked operations
// - ArithmeticConfig: zero-division policy and comparison tolerance
//
// Design principles:
// - Operators never fail; NaN/Infinity propagate
// - checked_* methods return Result instead of non-finite values
// - Copy value semantics, no heap allocation

mod complex;
mod config;
mod errors;
mod scalar;

pub use complex::Complex;
pub use config::{ArithmeticConfig, ZeroDivision};
pub use errors::{NumericError, NumericResult};
pub use scalar::RealScalar;
