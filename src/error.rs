//! Error types for color text parsing.

use thiserror::Error;

/// Failure to read a CSS-style color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Input was empty or whitespace only.
    #[error("empty color string")]
    Empty,

    /// `#` notation with a digit count other than 3, 4, 6, or 8, or a
    /// non-hex digit.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    /// Functional notation (`rgb(...)`, `hsla(...)`, ...) that could not be read.
    #[error("invalid {function}() color: {reason}")]
    InvalidFunction {
        /// Function name as written, lowercased.
        function: String,
        /// What was wrong with the arguments.
        reason: String,
    },

    /// Not a hex value, known function, or color keyword.
    #[error("unknown color: {0}")]
    Unknown(String),
}
