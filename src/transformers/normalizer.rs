//! Normalization chain.
use log::info;

use crate::config::NormalizeConfig;

use super::{Canonicalize, Header, NoiseLines, Paragraphs, Transform};

/// Normalizer enables transformer chaining, adding multiple transformers and
/// doing the whole normalization in one step.
///
/// The chain is applied until the text does not change anymore.
/// A single pass can reveal new noise (merging paragraphs lowers the line count and can push a
/// repeated line above the header threshold), so iterating makes `normalize` idempotent.
/// Every pass either shortens the text or lowers its line count, so the loop terminates.
pub struct Normalizer(Vec<Box<dyn Transform + Sync>>);

impl Normalizer {
    /// Empty chain, see [Normalizer::add].
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Full normalization chain, in order.
    pub fn new(config: &NormalizeConfig) -> Self {
        let mut n = Self::empty();
        n.add(Box::new(Canonicalize))
            .add(Box::new(Header::from(config)))
            .add(Box::new(NoiseLines::default()))
            .add(Box::new(Paragraphs));
        n
    }

    pub fn add(&mut self, transformer: Box<dyn Transform + Sync>) -> &mut Normalizer {
        self.0.push(transformer);
        self
    }

    fn pass(&self, text: String) -> String {
        self.0.iter().fold(text, |text, t| t.transform_own(text))
    }

    /// Normalizes borrowed text.
    pub fn normalize(&self, raw: &str) -> String {
        self.transform_own(raw.to_string())
    }
}

impl Transform for Normalizer {
    fn transform_own(&self, text: String) -> String {
        let raw_len = text.chars().count();
        let mut current = text;
        let mut passes = 0;
        loop {
            let next = self.pass(current.clone());
            passes += 1;
            if next == current {
                break;
            }
            current = next;
        }

        info!(
            "normalized {} chars into {} chars ({} paragraphs, {} passes)",
            raw_len,
            current.chars().count(),
            current.lines().filter(|l| !l.is_empty()).count(),
            passes
        );
        current
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&NormalizeConfig::default())
    }
}

/// Normalizes raw extracted text.
pub fn normalize(raw: &str, config: &NormalizeConfig) -> String {
    Normalizer::new(config).normalize(raw)
}
