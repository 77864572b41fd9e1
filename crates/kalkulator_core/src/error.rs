//! # Calculator Error Types
//!
//! Engine operations never fail. These errors only come out of parsing
//! user-facing tokens (operators, functions, precision, mode, digits).

use thiserror::Error;

/// Errors produced while parsing calculator inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Token is not a known arithmetic operator.
    #[error("unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Token is not a known scientific function.
    #[error("unknown function: {0:?}")]
    UnknownFunction(String),

    /// Precision outside the supported set.
    #[error("invalid precision {0}: expected one of 0, 2, 4, 6")]
    InvalidPrecision(u32),

    /// Precision token is not an integer.
    #[error("precision is not a number: {0:?}")]
    MalformedPrecision(String),

    /// Token is not a known calculator mode.
    #[error("unknown mode: {0:?}, expected standard, scientific or programmer")]
    UnknownMode(String),

    /// Character is not a decimal digit.
    #[error("not a digit: {0:?}")]
    InvalidDigit(char),
}

/// Result type for calculator parsing.
pub type CalcResult<T> = Result<T, CalcError>;
