//! Validated dollar amounts.
//!
//! Wraps `rust_decimal` so that every `Amount` holds an exact, non-negative
//! value strictly below one billion dollars. Text input is parsed leniently:
//! `$` and `,` are treated as formatting noise and stripped before parsing.

use crate::error::{Result, WordifyError};
use log::trace;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// A non-negative dollar amount below one billion.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use wordify::Amount;
///
/// let amount = Amount::from_str("$1,234.56").unwrap();
/// assert_eq!(amount.to_string(), "1234.56");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// Amounts must be strictly smaller than this many dollars (10^9).
    pub const MAX_EXCLUSIVE: u64 = 1_000_000_000;

    /// Most integer digits an accepted amount can have.
    const MAX_WHOLE_DIGITS: usize = 9;

    /// Fraction digits kept when parsing. Anything further right can never
    /// reach the cent slice, and dropping it keeps the mantissa within the
    /// 28 digits `Decimal` supports.
    const MAX_FRACTION_DIGITS: usize = 18;

    /// Zero dollars.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Wraps an existing decimal, enforcing `0 <= value < 10^9`.
    pub fn new(value: Decimal) -> Result<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(WordifyError::InvalidNumber {
                input: value.to_string(),
            });
        }
        if value >= Decimal::from(Self::MAX_EXCLUSIVE) {
            return Err(WordifyError::OutOfRange {
                input: value.to_string(),
            });
        }
        Ok(Amount(value))
    }

    /// Parses raw user text such as `"$175,505,670.99"` or `".11"`.
    ///
    /// Every `$` and `,` is removed and surrounding whitespace trimmed. What
    /// remains must be digits with at most one decimal point; signs, exponents
    /// and any other characters are rejected as [`WordifyError::InvalidNumber`].
    pub fn parse(raw: &str) -> Result<Self> {
        let stripped: String = raw.chars().filter(|c| !matches!(c, '$' | ',')).collect();
        let cleaned = stripped.trim();
        trace!("Cleaned amount {:?} -> {:?}", raw, cleaned);

        let invalid = || WordifyError::InvalidNumber {
            input: raw.to_string(),
        };

        let (whole, fraction) = cleaned.split_once('.').unwrap_or((cleaned, ""));
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let whole = whole.trim_start_matches('0');
        if whole.len() > Self::MAX_WHOLE_DIGITS {
            return Err(WordifyError::OutOfRange {
                input: raw.to_string(),
            });
        }

        let whole = if whole.is_empty() { "0" } else { whole };
        let fraction = &fraction[..fraction.len().min(Self::MAX_FRACTION_DIGITS)];
        let normalized = if fraction.is_empty() {
            whole.to_string()
        } else {
            format!("{}.{}", whole, fraction)
        };

        let value = Decimal::from_str(&normalized).map_err(|_| invalid())?;
        Amount::new(value).map_err(|e| match e {
            WordifyError::OutOfRange { .. } => WordifyError::OutOfRange {
                input: raw.to_string(),
            },
            _ => invalid(),
        })
    }

    /// Returns the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for Amount {
    type Err = WordifyError;

    fn from_str(s: &str) -> Result<Self> {
        Amount::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
