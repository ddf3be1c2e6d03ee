//! sentence-level filtering
use super::Filter;

/// Simple length filter.
/// Returns `true` if provided sentence is at least [Length::min_size] unicode codepoints long.
///
/// [Length::min_size] is 2 by default.
pub struct Length {
    min_size: usize,
}

impl Length {
    /// specify a minimum length
    pub fn with_min_size(min_size: usize) -> Self {
        Self { min_size }
    }

    /// Get a reference to the length's min size.
    pub fn min_size(&self) -> &usize {
        &self.min_size
    }
}

impl Filter<&str> for Length {
    fn detect(&self, sentence: &str) -> bool {
        sentence.chars().count() >= self.min_size
    }
}

impl Default for Length {
    /// Default minimum length for sentences is 2 Unicode Codepoints
    fn default() -> Self {
        Length {
            min_size: crate::config::DEFAULT_MIN_SENTENCE_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Filter, Length};

    #[test]
    fn length_default() {
        let f = Length::default();
        assert_eq!(f.min_size(), &2);
        assert!(f.detect("ok"));
        assert!(f.detect("好。"));
        assert!(!f.detect("a"));
        assert!(!f.detect(""));
    }

    #[test]
    fn length_counts_codepoints() {
        // 3 codepoints, 9 bytes
        let f = Length::with_min_size(4);
        assert!(!f.detect("你好。"));
        assert!(f.detect("你好吗？"));
    }
}
