//! Noisy source variants
//!
//! Drops some stop words from Latin-script sentences, so that models also see imperfect sources.
use std::collections::HashSet;

use lazy_static::lazy_static;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::error::Error;

lazy_static! {
    static ref STOP_WORDS: HashSet<&'static str> = [
        "a", "an", "the", "and", "or", "but", "if", "while", "with", "without", "of", "on", "in",
        "at", "to", "this", "that", "these", "those", "is", "are", "was", "were", "be", "been",
        "being", "have", "has", "had", "do", "does", "did", "can", "could", "should", "would",
        "may", "might", "must",
    ]
    .into_iter()
    .collect();
}

/// Seeded stop word dropper.
///
/// Each stop word is dropped with a probability drawn uniformly in `[low, high]`,
/// drawn again for every word.
pub struct Noisifier {
    low: f64,
    high: f64,
    rng: StdRng,
}

impl Noisifier {
    /// Bounds are reordered and clamped to `[0, 1]`.
    /// Fails on non-finite bounds.
    pub fn new((low, high): (f64, f64), seed: u64) -> Result<Self, Error> {
        if !low.is_finite() || !high.is_finite() {
            return Err(Error::InvalidDropRate(low, high));
        }
        let (low, high) = if low <= high { (low, high) } else { (high, low) };
        Ok(Self {
            low: low.clamp(0.0, 1.0),
            high: high.clamp(0.0, 1.0),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Returns the sentence with some stop words removed, words being re-joined by single spaces.
    pub fn noisify(&mut self, sentence: &str) -> String {
        let mut kept = Vec::new();
        for word in sentence.split_whitespace() {
            if STOP_WORDS.contains(word.to_lowercase().as_str()) {
                let rate = self.rng.gen_range(self.low..=self.high);
                if self.rng.gen::<f64>() < rate {
                    continue;
                }
            }
            kept.push(word);
        }
        kept.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTENCE: &str = "The cat sat on the mat and it was a good day for the cat";

    #[test]
    fn deterministic() {
        let mut a = Noisifier::new((0.3, 0.6), 7).unwrap();
        let mut b = Noisifier::new((0.3, 0.6), 7).unwrap();
        for _ in 0..10 {
            assert_eq!(a.noisify(SENTENCE), b.noisify(SENTENCE));
        }
    }

    #[test]
    fn never_drop() {
        let mut n = Noisifier::new((0.0, 0.0), 1).unwrap();
        assert_eq!(n.noisify("The  cat\nsat."), "The cat sat.");
    }

    #[test]
    fn always_drop() {
        let mut n = Noisifier::new((1.0, 1.0), 1).unwrap();
        assert_eq!(n.noisify(SENTENCE), "cat sat mat it good day for cat");
    }

    #[test]
    fn out_of_range_clamped() {
        let mut n = Noisifier::new((-1.0, 3.0), 5).unwrap();
        assert_eq!((n.low, n.high), (0.0, 1.0));
        n.noisify(SENTENCE);
    }

    #[test]
    fn non_finite_rates() {
        for rate in [(f64::NAN, 0.5), (0.1, f64::NAN), (0.0, f64::INFINITY)] {
            assert!(matches!(
                Noisifier::new(rate, 1),
                Err(Error::InvalidDropRate(_, _))
            ));
        }
    }

    #[test]
    fn content_words_kept() {
        let mut n = Noisifier::new((0.5, 0.2), 3).unwrap();
        for _ in 0..20 {
            let noisy = n.noisify(SENTENCE);
            for word in ["cat", "sat", "mat", "good", "day"] {
                assert!(noisy.contains(word));
            }
        }
    }
}
