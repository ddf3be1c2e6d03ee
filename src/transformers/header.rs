/*! Header/Footer remover

Running headers and footers of a book (title, author, chapter name) end up as
short lines repeated all over the extracted text.
!*/
use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use log::debug;

use crate::config::{NormalizeConfig, HEADER_FREQUENCY_RATIO, HEADER_MAX_LENGTH};

use super::Transform;

/// Header/Footer remover.
///
/// Counts every distinct trimmed, non-blank line. Lines that repeat, occur more than
/// `ratio × nb_lines` times and are shorter than `max_length` codepoints are removed
/// wherever they occur.
///
/// A line occurring once is never a header, even in a one-line document.
pub struct Header {
    ratio: f64,
    max_length: usize,
}

impl Default for Header {
    /// Default values are:
    /// - flagging lines present more than 0.6 times the line count,
    /// - and < 80 codepoints.
    fn default() -> Self {
        Self {
            ratio: HEADER_FREQUENCY_RATIO,
            max_length: HEADER_MAX_LENGTH,
        }
    }
}

impl Header {
    /// New [Header] with custom values.
    ///
    /// * `ratio` is compared to the *total* number of lines, blank ones included.
    /// * `max_length` is the exclusive upper bound on repeated line length.
    pub fn new(ratio: f64, max_length: usize) -> Self {
        Self { ratio, max_length }
    }

    /// Lines that are considered headers/footers.
    fn common_lines<'a>(&self, lines: &[&'a str]) -> HashSet<&'a str> {
        let threshold = lines.len() as f64 * self.ratio;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for line in lines.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
            *counts.entry(line).or_insert(0) += 1;
        }

        counts
            .into_iter()
            .filter(|(line, count)| {
                *count > 1
                    && *count as f64 > threshold
                    && line.chars().count() < self.max_length
            })
            .map(|(line, _)| line)
            .collect()
    }
}

impl From<&NormalizeConfig> for Header {
    fn from(config: &NormalizeConfig) -> Self {
        Self::new(config.header_ratio, config.header_max_length)
    }
}

impl Transform for Header {
    fn transform_own(&self, text: String) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let common = self.common_lines(&lines);
        debug!(
            "{} lines, {} common header/footer lines to remove",
            lines.len(),
            common.len()
        );

        lines
            .into_iter()
            .filter(|line| !common.contains(line.trim()))
            .join("\n")
    }
}
