//! line-level noise detection
//!
//! Lines coming out of an extracted book carry page numbers and footnotes.
//! Both filters return `true` when the line is noise.
use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

use super::Filter;

/// Annotation markers: circled digits, and numbers in square, round or full-width brackets.
const ANNOTATION_MARKERS: &str = r"[①-⑳]|【\d+】|\[\d+\]|\(\d+\)|（\d+）";

lazy_static! {
    static ref PAGE_NUMBER: Regex =
        Regex::new(r"^\s*(?:Page\s*)?\d{1,4}\s*(?:页|Page)?\s*$").expect("valid page regex");
    static ref ANNOTATION: Regex = Regex::new(ANNOTATION_MARKERS).expect("valid marker regex");
    static ref ANNOTATION_START: Regex =
        Regex::new(&format!(r"^\s*(?:{})", ANNOTATION_MARKERS)).expect("valid marker regex");
}

/// Detects page number lines such as `12`, `Page 12`, `12 页` or `  12 Page `.
#[derive(Default)]
pub struct PageNumber;

impl Filter<&str> for PageNumber {
    fn detect(&self, line: &str) -> bool {
        PAGE_NUMBER.is_match(line)
    }
}

/// Detects footnote lines, that is lines starting (after whitespace) with an annotation marker.
#[derive(Default)]
pub struct AnnotationLine;

impl Filter<&str> for AnnotationLine {
    fn detect(&self, line: &str) -> bool {
        ANNOTATION_START.is_match(line)
    }
}

/// Removes annotation markers from the line, keeping the surrounding text.
///
/// Returns the cleaned line along with the number of removed characters.
pub fn strip_annotations(line: &str) -> (Cow<'_, str>, usize) {
    let stripped = ANNOTATION.replace_all(line, "");
    let removed = match &stripped {
        Cow::Borrowed(_) => 0,
        Cow::Owned(s) => line.chars().count() - s.chars().count(),
    };
    (stripped, removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_numbers() {
        let f = PageNumber::default();
        for line in ["12", "  12  ", "Page 3", "Page3", "103 页", "7 Page", "\u{3000}42\u{3000}"] {
            assert!(f.detect(line), "{:?} should be a page number", line);
        }
        for line in ["12345", "Page", "Chapter 12", "12 apples", ""] {
            assert!(!f.detect(line), "{:?} should not be a page number", line);
        }
    }

    #[test]
    fn annotation_lines() {
        let f = AnnotationLine::default();
        assert!(f.detect("① Historical footnote."));
        assert!(f.detect("   [12] See chapter two."));
        assert!(f.detect("【3】注释"));
        assert!(f.detect("(4) note"));
        assert!(!f.detect("Paris① is the capital."));
        assert!(!f.detect("A regular line."));
    }

    #[test]
    fn strip_mid_line() {
        let (s, removed) = strip_annotations("Paris① is the capital.");
        assert_eq!(s, "Paris is the capital.");
        assert_eq!(removed, 1);

        let (s, removed) = strip_annotations("巴黎【12】是首都。");
        assert_eq!(s, "巴黎是首都。");
        assert_eq!(removed, 4);
    }

    #[test]
    fn strip_nothing_borrows() {
        let (s, removed) = strip_annotations("nothing to see here");
        assert!(matches!(s, Cow::Borrowed(_)));
        assert_eq!(removed, 0);
    }
}
