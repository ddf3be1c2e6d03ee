/*! Records

A [Record] is a self-contained bilingual text unit: a sentence pair, or a packed chunk of them.
Its tagged form wraps each side in language tags:

```text
<en> It rains. </en><zh> 下雨了。 </zh>
```
!*/
use serde::{Deserialize, Serialize};

use crate::lang::Lang;

/// Language tags of both sides.
#[derive(Debug, Clone)]
pub struct Tags {
    source: Lang,
    target: Lang,
}

impl Tags {
    pub fn new(source: Lang, target: Lang) -> Self {
        Self { source, target }
    }

    pub fn source(&self) -> &Lang {
        &self.source
    }

    pub fn target(&self) -> &Lang {
        &self.target
    }

    /// Wraps each text in its language tags.
    pub fn tag(&self, source: &str, target: &str) -> String {
        let (s, t) = (self.source.code(), self.target.code());
        format!("<{s}> {source} </{s}><{t}> {target} </{t}>")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    source: String,
    target: String,
    text: String,
    /// measured size (codepoints or tokens, depending on the producer)
    length: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    noisy_source: Option<String>,
}

impl Record {
    pub fn new(source: String, target: String, text: String, length: usize) -> Self {
        Self {
            source,
            target,
            text,
            length,
            noisy_source: None,
        }
    }

    /// Builds a record from its two sides, computing the tagged form.
    pub fn tagged(source: String, target: String, tags: &Tags, length: usize) -> Self {
        let text = tags.tag(&source, &target);
        Self::new(source, target, text, length)
    }

    pub fn with_noisy_source(mut self, noisy: Option<String>) -> Self {
        self.noisy_source = noisy;
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn noisy_source(&self) -> Option<&str> {
        self.noisy_source.as_deref()
    }
}

/// Instruction-tuning layout (`input` is the source, `output` the target).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlpacaRecord {
    pub role: String,
    pub instruction: String,
    pub input: String,
    pub output: String,
}

impl From<Record> for AlpacaRecord {
    fn from(record: Record) -> Self {
        Self {
            role: String::new(),
            instruction: String::new(),
            input: record.source,
            output: record.target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags() -> Tags {
        Tags::new("en".parse().unwrap(), "zh".parse().unwrap())
    }

    #[test]
    fn tag_format() {
        assert_eq!(
            tags().tag("It rains.", "下雨了。"),
            "<en> It rains. </en><zh> 下雨了。 </zh>"
        );
    }

    #[test]
    fn serialize_skips_missing_noisy() {
        let r = Record::tagged("a b".to_string(), "甲乙".to_string(), &tags(), 2);
        let json = serde_json::to_string(&r).unwrap();
        assert!(!json.contains("noisy_source"));
        assert_eq!(serde_json::from_str::<Record>(&json).unwrap(), r);

        let r = r.with_noisy_source(Some("b".to_string()));
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains(r#""noisy_source":"b""#));
    }

    #[test]
    fn alpaca() {
        let r = Record::tagged("Hi.".to_string(), "你好。".to_string(), &tags(), 3);
        let a = AlpacaRecord::from(r);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            r#"{"role":"","instruction":"","input":"Hi.","output":"你好。"}"#
        );
    }
}
