// ============================================================================
// Arithmetic Configuration
// Policy knobs for the configurable complex operations
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Zero-Division Policy
// ============================================================================

/// What [`Complex::divide`](super::Complex::divide) does with a divisor of
/// zero magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ZeroDivision {
    /// Follow IEEE-754: components become Infinity or NaN.
    /// Same behavior as the `/` operator.
    #[default]
    Propagate,

    /// Return `NumericError::DivisionByZero` instead of a value.
    Reject,
}

// ============================================================================
// Complete Arithmetic Configuration
// ============================================================================

/// Configuration for complex arithmetic that has more than one sensible
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArithmeticConfig {
    /// Handling of zero-magnitude divisors
    pub zero_division: ZeroDivision,

    /// Absolute per-component tolerance used by approximate comparison
    pub tolerance: f64,
}

impl ArithmeticConfig {
    /// Default tolerance for approximate comparison (1e-4)
    pub const DEFAULT_TOLERANCE: f64 = 1e-4;

    /// Create a configuration with IEEE propagation and the default tolerance
    pub fn new() -> Self {
        Self {
            zero_division: ZeroDivision::Propagate,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }

    /// Preset that rejects division by zero-magnitude values
    pub fn strict() -> Self {
        Self::new().with_zero_division(ZeroDivision::Reject)
    }

    /// Builder method: Set zero-division policy
    pub fn with_zero_division(mut self, policy: ZeroDivision) -> Self {
        self.zero_division = policy;
        self
    }

    /// Builder method: Set comparison tolerance.
    ///
    /// Negative values are stored as their absolute value.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.abs();
        self
    }

    /// Whether zero-magnitude divisors are rejected
    #[inline]
    pub fn rejects_zero_division(&self) -> bool {
        self.zero_division == ZeroDivision::Reject
    }
}

impl Default for ArithmeticConfig {
    fn default() -> Self {
        Self::new()
    }
}
