//! # Wordify
//!
//! Converts a dollar amount given as text into English words, e.g.
//! `"175505670.99"` becomes "one hundred seventy-five million, five hundred
//! five thousand, six hundred seventy dollars and ninety-nine cents".
//!
//! ## Pipeline
//!
//! - **Parse**: strip `$` and `,`, then read an exact decimal via `rust_decimal`
//! - **Decompose**: slice the value into billion/million/thousand/dollar/cent buckets
//! - **Render**: spell each bucket's 0..=999 quantity and attach its unit
//! - **Assemble**: join buckets with `", "`, introducing cents with `" and "`
//!
//! Amounts must be non-negative and below one billion. Fractions of a cent
//! are truncated.
//!
//! ## Example
//!
//! ```
//! let words = wordify::wordify("$1.01").unwrap();
//! assert_eq!(words, "one dollar and one cent");
//! ```

pub mod amount;
pub mod bucket;
pub mod error;
pub mod phrase;
pub mod words;

pub use amount::Amount;
pub use bucket::{decompose, Bucket, BUCKETS};
pub use error::{Result, WordifyError};
pub use phrase::{assemble, render};
pub use words::words_for;

use log::debug;

/// Converts raw amount text into its English phrase.
///
/// # Errors
///
/// Fails with [`WordifyError::InvalidNumber`] when the text is not a plain
/// decimal and [`WordifyError::OutOfRange`] when it is one billion or more.
pub fn wordify(raw: &str) -> Result<String> {
    let amount = Amount::parse(raw)?;
    debug!("Parsed {:?} as {}", raw, amount);

    let mut buckets = decompose(&amount);
    render(&mut buckets)?;
    Ok(assemble(&buckets))
}
