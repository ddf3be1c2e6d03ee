/*! Configuration

Every stage takes its own section explicitly. A [Config] can be read from a TOML file,
missing keys falling back to the defaults below:

```toml
[normalize]
header_ratio = 0.6
header_max_length = 80
t2s = false

[segment]
min_length = 2
strategy = "rules"

[pack]
unit = "chars"
chunk_size = 8000
max_tokens = 2048
tail_ratio = 0.3

[dataset]
split_ratio = 0.9
seed = 12345
noisy = true
drop_rate = [0.03, 0.05]
```
!*/
use std::{path::Path, str::FromStr};

use log::debug;
use serde::Deserialize;

use crate::error::Error;

/// A trimmed line occurring more than this ratio of the document lines is a header/footer.
pub const HEADER_FREQUENCY_RATIO: f64 = 0.6;
/// Header/footer lines are shorter than this (in codepoints).
pub const HEADER_MAX_LENGTH: usize = 80;
/// A tail buffer is only flushed if its size is above this ratio of the budget.
pub const TAIL_FLUSH_RATIO: f64 = 0.3;
pub const DEFAULT_SPLIT_RATIO: f64 = 0.9;
pub const DEFAULT_SEED: u64 = 12345;
pub const DEFAULT_MIN_SENTENCE_LENGTH: usize = 2;
pub const DEFAULT_CHUNK_SIZE: usize = 8000;
pub const DEFAULT_MAX_TOKENS: usize = 2048;
pub const DEFAULT_DROP_RATE: (f64, f64) = (0.03, 0.05);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub normalize: NormalizeConfig,
    pub segment: SegmentConfig,
    pub pack: PackConfig,
    pub dataset: DatasetConfig,
}

impl Config {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        debug!("loading configuration from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, Error> {
        Ok(toml::from_str(content)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    pub header_ratio: f64,
    pub header_max_length: usize,
    /// convert Chinese texts from traditional to simplified characters
    /// (requires the `t2s` feature).
    pub t2s: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            header_ratio: HEADER_FREQUENCY_RATIO,
            header_max_length: HEADER_MAX_LENGTH,
            t2s: false,
        }
    }
}

/// How Latin-script text is cut into sentences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Split after terminal punctuation followed by whitespace.
    Rules,
    /// Unicode (UAX #29) sentence boundaries.
    Unicode,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::Rules
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmentConfig {
    pub min_length: usize,
    pub strategy: Strategy,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_SENTENCE_LENGTH,
            strategy: Strategy::default(),
        }
    }
}

/// Budget unit of the chunked dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// `chunk_size` codepoints of target text.
    Chars,
    /// `max_tokens` tokens of tagged text.
    Tokens,
}

impl Default for Unit {
    fn default() -> Self {
        Unit::Chars
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chars" => Ok(Unit::Chars),
            "tokens" => Ok(Unit::Tokens),
            other => Err(Error::Custom(format!(
                "unknown unit {:?} (expected chars or tokens)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackConfig {
    pub unit: Unit,
    /// character budget of the chunked dataset, measured on the target side.
    pub chunk_size: usize,
    /// token budget of long-context records.
    pub max_tokens: usize,
    pub tail_ratio: f64,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            unit: Unit::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_tokens: DEFAULT_MAX_TOKENS,
            tail_ratio: TAIL_FLUSH_RATIO,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    pub split_ratio: f64,
    pub seed: u64,
    /// attach a noisy source variant to curriculum records
    pub noisy: bool,
    pub drop_rate: (f64, f64),
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            split_ratio: DEFAULT_SPLIT_RATIO,
            seed: DEFAULT_SEED,
            noisy: true,
            drop_rate: DEFAULT_DROP_RATE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = Config::default();
        assert_eq!(c.normalize.header_ratio, 0.6);
        assert_eq!(c.normalize.header_max_length, 80);
        assert_eq!(c.pack.tail_ratio, 0.3);
        assert_eq!(c.dataset.split_ratio, 0.9);
        assert_eq!(c.segment.strategy, Strategy::Rules);
        assert!(!c.normalize.t2s);
    }

    #[test]
    fn partial_toml() {
        let c = Config::from_toml(
            r#"
[normalize]
t2s = true

[segment]
strategy = "unicode"

[dataset]
seed = 42
drop_rate = [0.1, 0.2]
"#,
        )
        .unwrap();
        assert!(c.normalize.t2s);
        assert_eq!(c.normalize.header_max_length, 80);
        assert_eq!(c.segment.strategy, Strategy::Unicode);
        assert_eq!(c.segment.min_length, 2);
        assert_eq!(c.dataset.seed, 42);
        assert_eq!(c.dataset.drop_rate, (0.1, 0.2));
        assert_eq!(c.pack.chunk_size, 8000);
        assert_eq!(c.pack.unit, Unit::Chars);
    }

    #[test]
    fn unit() {
        let c = Config::from_toml("[pack]\nunit = \"tokens\"\n").unwrap();
        assert_eq!(c.pack.unit, Unit::Tokens);
        assert_eq!("chars".parse::<Unit>().unwrap(), Unit::Chars);
        assert!("words".parse::<Unit>().is_err());
    }

    #[test]
    fn unknown_key() {
        let c = Config::from_toml("[pack]\nbudget = 3\n");
        assert!(matches!(c, Err(Error::Config(_))));
    }
}
