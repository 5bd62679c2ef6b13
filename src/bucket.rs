//! Magnitude buckets and the range decomposer.
//!
//! An amount is sliced into five fixed buckets (billions, millions, thousands,
//! dollars, cents). Each slice holds an integer quantity from 0 to 999.

use crate::amount::Amount;
use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// One order-of-magnitude slice of an amount.
///
/// Buckets are created fresh from [`BUCKETS`] for every conversion. The
/// decomposer fills in `quantity`, then the phrase renderer fills in `words`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucket {
    /// Unit name, e.g. `"thousand"` or `"cent"`.
    pub label: &'static str,

    /// Power of ten marking the lower bound of the slice.
    pub power: i32,

    /// Whether the label takes an "s" when the quantity is not 1.
    pub pluralized: bool,

    /// Whether the bucket is rendered even when its quantity is 0.
    pub zero: bool,

    /// Integer quantity extracted for this slice (0..=999).
    pub quantity: u16,

    /// Rendered phrase, empty until rendered or when the bucket is skipped.
    pub words: String,
}

impl Bucket {
    const fn template(label: &'static str, power: i32, pluralized: bool, zero: bool) -> Self {
        Bucket {
            label,
            power,
            pluralized,
            zero,
            quantity: 0,
            words: String::new(),
        }
    }

    /// The value of one unit of this bucket, `10^power`.
    pub fn weight(&self) -> Decimal {
        if self.power >= 0 {
            Decimal::from(10u64.pow(self.power.unsigned_abs()))
        } else {
            Decimal::new(1, self.power.unsigned_abs())
        }
    }

    /// Returns `true` if this bucket contributes words to the final phrase.
    pub fn is_rendered(&self) -> bool {
        self.quantity > 0 || self.zero
    }
}

/// The bucket table, in descending order of magnitude.
pub const BUCKETS: [Bucket; 5] = [
    Bucket::template("billion", 9, false, false),
    Bucket::template("million", 6, false, false),
    Bucket::template("thousand", 3, false, false),
    Bucket::template("dollar", 0, true, true),
    Bucket::template("cent", -2, true, false),
];

/// Splits an amount into its five buckets.
///
/// Each quantity is truncated, never rounded, so fractions of a cent are
/// dropped.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use wordify::{decompose, Amount};
///
/// let buckets = decompose(&Amount::from_str("1234.567").unwrap());
/// let quantities: Vec<u16> = buckets.iter().map(|b| b.quantity).collect();
/// assert_eq!(quantities, vec![0, 0, 1, 234, 56]);
/// ```
pub fn decompose(amount: &Amount) -> [Bucket; 5] {
    let mut buckets = BUCKETS;
    let mut remaining = amount.value();

    for bucket in buckets.iter_mut() {
        let weight = bucket.weight();
        let piece = (remaining / weight).trunc();
        // Amount keeps every slice within 0..=999.
        bucket.quantity = piece.to_u16().unwrap_or_default();
        remaining -= piece * weight;
        debug!("Bucket {}: quantity {}", bucket.label, bucket.quantity);
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn quantities(input: &str) -> Vec<u16> {
        decompose(&Amount::from_str(input).unwrap())
            .iter()
            .map(|b| b.quantity)
            .collect()
    }

    #[test]
    fn test_table_order_and_flags() {
        let labels: Vec<&str> = BUCKETS.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["billion", "million", "thousand", "dollar", "cent"]);

        let plural: Vec<bool> = BUCKETS.iter().map(|b| b.pluralized).collect();
        assert_eq!(plural, vec![false, false, false, true, true]);

        let zero: Vec<bool> = BUCKETS.iter().map(|b| b.zero).collect();
        assert_eq!(zero, vec![false, false, false, true, false]);
    }

    #[test]
    fn test_weights() {
        assert_eq!(BUCKETS[0].weight(), Decimal::from(1_000_000_000u64));
        assert_eq!(BUCKETS[2].weight(), Decimal::from(1_000u64));
        assert_eq!(BUCKETS[3].weight(), Decimal::ONE);
        assert_eq!(BUCKETS[4].weight(), Decimal::new(1, 2));
    }

    #[test]
    fn test_decompose_large_amount() {
        assert_eq!(quantities("175505670.99"), vec![0, 175, 505, 670, 99]);
    }

    #[test]
    fn test_decompose_zero() {
        let buckets = decompose(&Amount::ZERO);
        assert!(buckets.iter().all(|b| b.quantity == 0));
        let rendered: Vec<&str> = buckets
            .iter()
            .filter(|b| b.is_rendered())
            .map(|b| b.label)
            .collect();
        assert_eq!(rendered, vec!["dollar"]);
    }

    #[test]
    fn test_decompose_truncates_cents() {
        assert_eq!(quantities("0.999"), vec![0, 0, 0, 0, 99]);
        assert_eq!(quantities("2.005"), vec![0, 0, 0, 2, 0]);
    }

    #[test]
    fn test_decompose_single_digit_fraction() {
        assert_eq!(quantities("1.1"), vec![0, 0, 0, 1, 10]);
    }

    #[test]
    fn test_decompose_upper_bound() {
        assert_eq!(quantities("999999999.99"), vec![0, 999, 999, 999, 99]);
    }

    #[test]
    fn test_decompose_leaves_words_empty() {
        let buckets = decompose(&Amount::from_str("12").unwrap());
        assert!(buckets.iter().all(|b| b.words.is_empty()));
    }
}
