//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Config(toml::de::Error),
    /// Language tag that is either malformed or not handled by the segmenter.
    UnsupportedLanguage(String),
    /// The embedding capability failed or returned malformed vectors.
    Embedding(String),
    /// An alignment pair points outside of one of its sentence sequences.
    OutOfBoundsAlignment {
        source: usize,
        target: usize,
        source_len: usize,
        target_len: usize,
    },
    /// The length/token measure failed.
    Measure(String),
    EmptyDataset,
    InvalidSplitRatio(f64),
    /// Stop word drop rate bounds that are not finite numbers.
    InvalidDropRate(f64, f64),
    InvalidBudget(usize),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::Config(e) => write!(f, "invalid configuration: {}", e),
            Error::UnsupportedLanguage(tag) => write!(f, "unsupported language: {:?}", tag),
            Error::Embedding(msg) => write!(f, "embedding failure: {}", msg),
            Error::OutOfBoundsAlignment {
                source,
                target,
                source_len,
                target_len,
            } => write!(
                f,
                "alignment pair ({}, {}) out of bounds (sequences of length {} and {})",
                source, target, source_len, target_len
            ),
            Error::Measure(msg) => write!(f, "measure failure: {}", msg),
            Error::EmptyDataset => write!(f, "no records were produced"),
            Error::InvalidSplitRatio(r) => write!(f, "split ratio {} is not in [0, 1]", r),
            Error::InvalidDropRate(low, high) => {
                write!(f, "drop rate bounds ({}, {}) must be finite", low, high)
            }
            Error::InvalidBudget(b) => write!(f, "budget must be positive (got {})", b),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Error {
        Error::Config(e)
    }
}

impl From<oxilangtag::LanguageTagParseError> for Error {
    fn from(e: oxilangtag::LanguageTagParseError) -> Error {
        Error::UnsupportedLanguage(e.to_string())
    }
}

/// fastText reports its errors as plain strings.
impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
