//! Error types for the amount-to-words converter.

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, WordifyError>;

/// Errors that can occur while converting an amount.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordifyError {
    /// No amount was passed on the command line
    #[error("You need a number! Usage: wordify <amount>")]
    MissingArgument,

    /// The cleaned text is not a plain base-10 decimal
    #[error(
        "Invalid amount '{input}': only digits, one period, commas, and dollar signs are allowed"
    )]
    InvalidNumber { input: String },

    /// The amount is one billion or more
    #[error("Amount '{input}' is too large: it must be smaller than 1000000000")]
    OutOfRange { input: String },

    /// The word renderer only handles 0..=999
    #[error("Cannot spell {0}: only 0 through 999 is supported")]
    QuantityOutOfRange(u16),
}
