// ============================================================================
// Numeric Errors
// Error types for the checked complex arithmetic API
// ============================================================================

use std::fmt;

/// Errors reported by the checked operations on [`Complex`](super::Complex).
///
/// The operator impls (`+`, `-`, `*`, `/`) never produce these; they follow
/// IEEE-754 and let NaN/Infinity propagate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Divisor has zero magnitude
    DivisionByZero,
    /// Value is outside the range of the target representation
    Overflow,
    /// Conversion would lose significant digits
    PrecisionLoss,
    /// An operand or component is NaN or infinite
    NonFinite,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::DivisionByZero => write!(f, "division by zero-magnitude value"),
            NumericError::Overflow => {
                write!(f, "overflow: value outside the target representation")
            },
            NumericError::PrecisionLoss => write!(
                f,
                "precision loss: conversion would lose significant digits"
            ),
            NumericError::NonFinite => write!(f, "non-finite value: NaN or infinity"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
