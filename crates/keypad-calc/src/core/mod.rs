//! Expression evaluation core
//!
//! Everything between a raw expression buffer and a display string:
//! sanitizing, tokenizing, parsing, IEEE evaluation and result formatting.

pub mod evaluator;
pub mod number;
mod operations;
pub mod parser;

pub use operations::Operation;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Reasons an expression could not be turned into a number
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Nothing left to evaluate after sanitizing
    #[error("Empty expression")]
    EmptyExpression,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Result was Infinity or NaN and the policy rejects those
    #[error("Non-finite result: {0}")]
    NonFinite(String),
}

impl CalcError {
    /// Create a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }
}

/// What to do with results that are not finite numbers (`1/0`, `0/0`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NonFinitePolicy {
    /// Show `Infinity`, `-Infinity` or `NaN` as the result
    #[default]
    PassThrough,
    /// Treat the result as an evaluation error
    Reject,
}

impl NonFinitePolicy {
    /// Checks a raw result against the policy
    pub fn validate(self, value: f64) -> CalcResult<f64> {
        match self {
            Self::Reject if !value.is_finite() => {
                Err(CalcError::NonFinite(number::format_number(value)))
            }
            _ => Ok(value),
        }
    }
}
