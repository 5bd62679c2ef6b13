//! Phrase assembly: attaches unit names to each bucket and joins them.

use crate::bucket::Bucket;
use crate::error::Result;
use crate::words::words_for;
use log::debug;

impl Bucket {
    /// Returns the unit label, pluralized when the bucket calls for it.
    pub fn unit(&self) -> String {
        if self.pluralized && self.quantity != 1 {
            format!("{}s", self.label)
        } else {
            self.label.to_string()
        }
    }

    /// Builds `"<words> <unit>"` for this bucket, or an empty string when the
    /// bucket is skipped.
    pub fn phrase(&self) -> Result<String> {
        if !self.is_rendered() {
            return Ok(String::new());
        }
        Ok(format!("{} {}", words_for(self.quantity)?, self.unit()))
    }
}

/// Second pass over decomposed buckets: fills in each bucket's `words`.
pub fn render(buckets: &mut [Bucket]) -> Result<()> {
    for bucket in buckets.iter_mut() {
        bucket.words = bucket.phrase()?;
        if !bucket.words.is_empty() {
            debug!("Bucket {}: {:?}", bucket.label, bucket.words);
        }
    }
    Ok(())
}

/// Joins rendered buckets into the final sentence.
///
/// Cents are always introduced with `" and "`, even when nothing precedes
/// them. Every other bucket after the first is introduced with `", "`.
pub fn assemble(buckets: &[Bucket]) -> String {
    let mut sentence = String::new();

    for bucket in buckets.iter().filter(|b| !b.words.is_empty()) {
        if bucket.power < 0 {
            sentence.push_str(" and ");
        } else if !sentence.is_empty() {
            sentence.push_str(", ");
        }
        sentence.push_str(&bucket.words);
    }

    sentence
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::BUCKETS;

    fn with_quantities(quantities: [u16; 5]) -> [Bucket; 5] {
        let mut buckets = BUCKETS;
        for (bucket, quantity) in buckets.iter_mut().zip(quantities) {
            bucket.quantity = quantity;
        }
        render(&mut buckets).unwrap();
        buckets
    }

    #[test]
    fn test_unit_pluralization() {
        let buckets = with_quantities([2, 2, 2, 1, 1]);
        assert_eq!(buckets[0].unit(), "billion");
        assert_eq!(buckets[1].unit(), "million");
        assert_eq!(buckets[2].unit(), "thousand");
        assert_eq!(buckets[3].unit(), "dollar");
        assert_eq!(buckets[4].unit(), "cent");

        let buckets = with_quantities([0, 0, 0, 0, 2]);
        assert_eq!(buckets[3].unit(), "dollars");
        assert_eq!(buckets[4].unit(), "cents");
    }

    #[test]
    fn test_skipped_buckets_have_no_words() {
        let buckets = with_quantities([0, 0, 5, 0, 0]);
        assert!(buckets[0].words.is_empty());
        assert!(buckets[1].words.is_empty());
        assert_eq!(buckets[2].words, "five thousand");
        assert_eq!(buckets[3].words, "zero dollars");
        assert!(buckets[4].words.is_empty());
    }

    #[test]
    fn test_assemble_uses_commas_between_whole_buckets() {
        let buckets = with_quantities([0, 3, 20, 7, 0]);
        assert_eq!(
            assemble(&buckets),
            "three million, twenty thousand, seven dollars"
        );
    }

    #[test]
    fn test_assemble_prefixes_cents_with_and() {
        let buckets = with_quantities([0, 0, 0, 10, 15]);
        assert_eq!(assemble(&buckets), "ten dollars and fifteen cents");
    }

    #[test]
    fn test_assemble_prefixes_lone_cents_with_and() {
        let mut buckets = with_quantities([0, 0, 0, 0, 11]);
        buckets[3].words.clear();
        assert_eq!(assemble(&buckets), " and eleven cents");
    }

    #[test]
    fn test_render_propagates_oversized_quantity() {
        let mut buckets = BUCKETS;
        buckets[3].quantity = 1000;
        assert!(render(&mut buckets).is_err());
    }
}
