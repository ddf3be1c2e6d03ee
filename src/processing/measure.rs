//! Text size measures, used for budget comparisons.
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Error;

/// Length/token count capability.
pub trait Measure {
    fn measure(&self, text: &str) -> Result<usize, Error>;
}

impl<F> Measure for F
where
    F: Fn(&str) -> usize,
{
    fn measure(&self, text: &str) -> Result<usize, Error> {
        Ok(self(text))
    }
}

/// Length in unicode codepoints.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharLength;

impl Measure for CharLength {
    fn measure(&self, text: &str) -> Result<usize, Error> {
        Ok(text.chars().count())
    }
}

/// Tokenizer-free token estimate.
///
/// Counts non-whitespace Unicode word segments (UAX #29): a Latin word, a number or a
/// punctuation mark is one token, and so is each CJK ideograph.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenCount;

impl Measure for TokenCount {
    fn measure(&self, text: &str) -> Result<usize, Error> {
        Ok(text
            .split_word_bounds()
            .filter(|segment| !segment.trim().is_empty())
            .count())
    }
}

/// Token count of a Hugging Face tokenizer (`tokenizer.json`), special tokens included.
#[cfg(feature = "hf-tokenizer")]
pub struct HfTokenizer {
    inner: tokenizers::Tokenizer,
}

#[cfg(feature = "hf-tokenizer")]
impl HfTokenizer {
    pub fn from_file(path: &std::path::Path) -> Result<Self, Error> {
        log::info!("loading tokenizer from {:?}", path);
        let inner =
            tokenizers::Tokenizer::from_file(path).map_err(|e| Error::Measure(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "hf-tokenizer")]
impl Measure for HfTokenizer {
    fn measure(&self, text: &str) -> Result<usize, Error> {
        self.inner
            .encode(text, true)
            .map(|encoding| encoding.len())
            .map_err(|e| Error::Measure(e.to_string()))
    }
}
