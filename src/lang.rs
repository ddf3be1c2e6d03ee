//! Language handling.
//!
//! A [Lang] is a validated BCP-47 tag whose primary language is known to the segmenter,
//! along with the [Script] family that drives segmentation and joining.
use std::{collections::HashSet, fmt, str::FromStr};

use lazy_static::lazy_static;
use oxilangtag::LanguageTag;

use crate::error::Error;

lazy_static! {
    /// Languages written with spaces between words and ASCII terminal punctuation.
    static ref LATIN: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert("en");
        m.insert("fr");
        m.insert("de");
        m.insert("es");
        m.insert("it");
        m.insert("pt");
        m.insert("nl");
        m.insert("ca");
        m.insert("da");
        m.insert("sv");
        m.insert("no");
        m.insert("nb");
        m.insert("fi");
        m.insert("pl");
        m.insert("cs");
        m.insert("ro");
        m.insert("id");
        m.insert("vi");
        m
    };

    /// Languages written without word separators and with full-width terminal punctuation.
    static ref CJK: HashSet<&'static str> = {
        let mut m = HashSet::new();
        m.insert("zh");
        m.insert("ja");
        m.insert("yue");
        m.insert("wuu");
        m
    };
}

/// Script family of a language, as far as sentence splitting is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    Cjk,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lang {
    tag: LanguageTag<String>,
    script: Script,
}

impl Lang {
    /// Primary language subtag (`en` for `en-GB`), used for record tags.
    pub fn code(&self) -> &str {
        self.tag.primary_language()
    }

    pub fn tag(&self) -> &LanguageTag<String> {
        &self.tag
    }

    pub fn script(&self) -> Script {
        self.script
    }

    /// Separator used when gluing sentences of this language back together.
    pub fn joiner(&self) -> &'static str {
        match self.script {
            Script::Latin => " ",
            Script::Cjk => "",
        }
    }
}

impl FromStr for Lang {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = LanguageTag::parse_and_normalize(s.trim())?;
        let primary = tag.primary_language().to_ascii_lowercase();
        let script = if LATIN.contains(primary.as_str()) {
            Script::Latin
        } else if CJK.contains(primary.as_str()) {
            Script::Cjk
        } else {
            return Err(Error::UnsupportedLanguage(s.to_string()));
        };

        Ok(Self { tag, script })
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag)
    }
}
