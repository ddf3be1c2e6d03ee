/*! Sentence segmentation

Splits normalized text into the ordered sentence sequence of a language.

- Latin-script text is cut after terminal punctuation (`.`, `!`, `?`) that is followed by whitespace,
  or, using [Strategy::Unicode], at Unicode (UAX #29) sentence boundaries.
- CJK text is cut right after full-width terminal punctuation (`。`, `！`, `？`).

In both cases, closing quotes and brackets following the punctuation stay with the sentence.
Sentences are trimmed, and the ones shorter than the minimum length are dropped.
!*/
use log::info;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    config::{SegmentConfig, Strategy},
    error::Error,
    filtering::{Filter, Length},
    lang::{Lang, Script},
};

const LATIN_TERMINALS: [char; 3] = ['.', '!', '?'];
const CJK_TERMINALS: [char; 3] = ['。', '！', '？'];
const CLOSERS: [char; 12] = [
    '"', '\'', ')', ']', '”', '’', '」', '』', '）', '》', '〉', '】',
];

pub struct Segmenter {
    lang: Lang,
    strategy: Strategy,
    filter: Length,
}

impl Segmenter {
    pub fn new(lang: Lang, config: &SegmentConfig) -> Self {
        Self {
            lang,
            strategy: config.strategy,
            filter: Length::with_min_size(config.min_length),
        }
    }

    pub fn lang(&self) -> &Lang {
        &self.lang
    }

    /// Raw (untrimmed, unfiltered) sentence candidates.
    fn candidates<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match (self.lang.script(), self.strategy) {
            (Script::Latin, Strategy::Unicode) => text.unicode_sentences().collect(),
            (Script::Latin, Strategy::Rules) => split_after(text, &LATIN_TERMINALS, true),
            (Script::Cjk, _) => split_after(text, &CJK_TERMINALS, false),
        }
    }

    /// Splits `text` into sentences, in reading order.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let candidates = self.candidates(text);
        let nb_candidates = candidates.len();

        let sentences: Vec<String> = candidates
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty() && self.filter.detect(*s))
            .map(String::from)
            .collect();

        info!(
            "[{}] found {} sentences, {} after filtering (min length {})",
            self.lang,
            nb_candidates,
            sentences.len(),
            self.filter.min_size()
        );
        sentences
    }
}

/// Cuts `text` after each run of `terminals` (and closers following it).
///
/// If `needs_space` is set, the cut only happens when the run is followed by whitespace
/// or by the end of the text.
fn split_after<'a>(text: &'a str, terminals: &[char], needs_space: bool) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((_, c)) = chars.next() {
        if !terminals.contains(&c) {
            continue;
        }

        // extend over repeated terminals ("?!", "...") and closing quotes/brackets
        while let Some(&(_, next)) = chars.peek() {
            if terminals.contains(&next) || CLOSERS.contains(&next) {
                chars.next();
            } else {
                break;
            }
        }

        let end = chars.peek().map_or(text.len(), |(idx, _)| *idx);
        let boundary = !needs_space || chars.peek().map_or(true, |(_, c)| c.is_whitespace());
        if boundary {
            pieces.push(&text[start..end]);
            start = end;
        }
    }

    if start < text.len() {
        pieces.push(&text[start..]);
    }
    pieces
}

/// Segments `text` written in the language tagged `language`.
///
/// Fails with [Error::UnsupportedLanguage] if the tag is invalid or unknown.
pub fn segment(text: &str, language: &str, min_length: usize) -> Result<Vec<String>, Error> {
    let lang: Lang = language.parse()?;
    let config = SegmentConfig {
        min_length,
        ..Default::default()
    };
    Ok(Segmenter::new(lang, &config).segment(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str, tag: &str) -> Vec<String> {
        segment(text, tag, 2).unwrap()
    }

    #[test]
    fn latin_rules() {
        assert_eq!(
            seg("Hello world. How are you? Fine!", "en"),
            vec!["Hello world.", "How are you?", "Fine!"]
        );
    }

    #[test]
    fn latin_needs_space() {
        assert_eq!(
            seg("Pi is 3.14 roughly. Yes.", "en"),
            vec!["Pi is 3.14 roughly.", "Yes."]
        );
    }

    #[test]
    fn latin_closers_and_runs() {
        assert_eq!(
            seg("He said \"stop.\" Then left?! Wait...\nNext", "en"),
            vec!["He said \"stop.\"", "Then left?!", "Wait...", "Next"]
        );
    }

    #[test]
    fn cjk() {
        assert_eq!(
            seg("他来了。她走了！真的吗？好", "zh"),
            vec!["他来了。", "她走了！", "真的吗？"]
        );
    }

    #[test]
    fn cjk_closers() {
        assert_eq!(
            seg("他说：“好。”然后走了。", "zh"),
            vec!["他说：“好。”", "然后走了。"]
        );
    }

    #[test]
    fn min_length() {
        let sentences = segment("A. Bb. Ccc. Dddd.", "en", 4).unwrap();
        assert_eq!(sentences, vec!["Ccc.", "Dddd."]);
        assert!(sentences.iter().all(|s| s.chars().count() >= 4));
    }

    #[test]
    fn unicode_strategy() {
        let config = SegmentConfig {
            min_length: 2,
            strategy: Strategy::Unicode,
        };
        let s = Segmenter::new("en".parse().unwrap(), &config);
        assert_eq!(
            s.segment("Hello world. How are you?"),
            vec!["Hello world.", "How are you?"]
        );
    }

    #[test]
    fn empty() {
        assert!(seg("", "en").is_empty());
        assert!(seg("   ", "zh").is_empty());
    }

    #[test]
    fn unsupported() {
        assert!(matches!(
            segment("whatever", "xx", 2),
            Err(Error::UnsupportedLanguage(_))
        ));
    }
}
