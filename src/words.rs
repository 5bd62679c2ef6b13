//! Spells integers from 0 to 999 in English.

use crate::error::{Result, WordifyError};

/// Names for 0 through 19.
const ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Names for the tens digits 2 through 9; indices 0 and 1 are unused.
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Returns the English words for `n`.
///
/// Tens and units are joined with a hyphen (`"ninety-nine"`), hundreds with a
/// space (`"five hundred five"`). No "and" is inserted.
///
/// # Errors
///
/// Returns [`WordifyError::QuantityOutOfRange`] for anything above 999.
///
/// # Examples
///
/// ```
/// use wordify::words_for;
///
/// assert_eq!(words_for(0).unwrap(), "zero");
/// assert_eq!(words_for(999).unwrap(), "nine hundred ninety-nine");
/// ```
pub fn words_for(n: u16) -> Result<String> {
    match n {
        0..=19 => Ok(ONES[n as usize].to_string()),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => Ok(tens.to_string()),
                units => Ok(format!("{}-{}", tens, ONES[units as usize])),
            }
        }
        100..=999 => {
            let hundreds = format!("{} hundred", ONES[(n / 100) as usize]);
            match n % 100 {
                0 => Ok(hundreds),
                rest => Ok(format!("{} {}", hundreds, words_for(rest)?)),
            }
        }
        _ => Err(WordifyError::QuantityOutOfRange(n)),
    }
}
