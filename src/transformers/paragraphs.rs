/*! Paragraph rebuilding

Extracted text is cut at arbitrary places by the page layout. Lines are glued back together
until one ends a sentence, blank lines always ending a paragraph.

Example:
```text
It was the best of
times, it was the worst
of times.

It was the age of wis-
dom.
```

becomes

```text
It was the best of times, it was the worst of times.
It was the age of wisdom.
```
!*/
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::Transform;

/// Sentence-terminal punctuation, ASCII and full-width.
pub(crate) const SENTENCE_END: [char; 6] = ['.', '!', '?', '。', '！', '？'];

lazy_static! {
    static ref HYPHEN_BREAK: Regex = Regex::new(r"-\s*\n([a-z])").expect("valid hyphen regex");
    static ref BLANK_RUNS: Regex = Regex::new(r"\n{3,}").expect("valid blank lines regex");
}

#[derive(Default)]
pub struct Paragraphs;

impl Paragraphs {
    /// Appends a trimmed line to the paragraph buffer.
    ///
    /// A word cut by a hyphen at the end of the buffer is rejoined when the line starts lowercase.
    fn push_line(buf: &mut String, line: &str) {
        if buf.is_empty() {
            buf.push_str(line);
            return;
        }

        let hyphenated = buf.strip_suffix('-').map_or(false, |head| {
            head.chars().last().map_or(false, char::is_alphabetic)
        });
        let lowercase_start = line.chars().next().map_or(false, |c| c.is_ascii_lowercase());

        if hyphenated && lowercase_start {
            buf.pop();
        } else {
            buf.push(' ');
        }
        buf.push_str(line);
    }

    fn merge(text: &str) -> Vec<String> {
        let mut merged = Vec::new();
        let mut buf = String::new();

        for line in text.split('\n').map(str::trim) {
            if line.is_empty() {
                if !buf.is_empty() {
                    merged.push(std::mem::take(&mut buf));
                }
                continue;
            }

            Self::push_line(&mut buf, line);
            if line.ends_with(&SENTENCE_END[..]) {
                merged.push(std::mem::take(&mut buf));
            }
        }

        if !buf.is_empty() {
            merged.push(buf);
        }

        merged
    }
}

impl Transform for Paragraphs {
    fn transform_own(&self, text: String) -> String {
        let merged = Self::merge(&text);
        let nb_paragraphs = merged.len();

        let text = merged.join("\n");
        let text = HYPHEN_BREAK.replace_all(&text, "$1");
        let text = BLANK_RUNS.replace_all(&text, "\n\n");
        let text = text.trim().to_string();

        debug!("{} paragraphs, {} chars", nb_paragraphs, text.chars().count());
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_until_sentence_end() {
        let text = "It was the best of\ntimes, it was the worst\nof times.\nNext one!".to_string();
        let t = Paragraphs.transform_own(text);
        assert_eq!(
            t,
            "It was the best of times, it was the worst of times.\nNext one!"
        );
    }

    #[test]
    fn blank_line_flushes() {
        let text = "A title\n\nBody starts here.".to_string();
        let t = Paragraphs.transform_own(text);
        assert_eq!(t, "A title\nBody starts here.");
    }

    #[test]
    fn cjk_sentence_end() {
        let text = "他说\n完了。\n她笑了！".to_string();
        let t = Paragraphs.transform_own(text);
        assert_eq!(t, "他说 完了。\n她笑了！");
    }

    #[test]
    fn hyphenation() {
        let text = "It was the age of wis-\ndom.".to_string();
        let t = Paragraphs.transform_own(text);
        assert_eq!(t, "It was the age of wisdom.");
    }

    #[test]
    fn hyphen_before_uppercase_kept() {
        let text = "Alsace-\nLorraine.".to_string();
        let t = Paragraphs.transform_own(text);
        assert_eq!(t, "Alsace- Lorraine.");
    }

    #[test]
    fn hyphen_across_paragraphs() {
        let text = "the wis-\n\ndom of crowds.".to_string();
        let t = Paragraphs.transform_own(text);
        assert_eq!(t, "the wisdom of crowds.");
    }

    #[test]
    fn empty() {
        assert_eq!(Paragraphs.transform_own("\n\n  \n".to_string()), "");
    }
}
