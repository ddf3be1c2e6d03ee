//! Steps shared by dataset pipelines.
//!
//! Both texts are normalized, segmented in their own language, then aligned.
//! Chinese texts can be converted to simplified characters first.
use std::path::{Path, PathBuf};

use log::info;

use crate::{
    align::{align, AlignmentPair, Embed},
    config::Config,
    error::Error,
    processing::{Dataset, Skipped, Tags},
    segment::Segmenter,
    transformers::{Normalizer, Simplify, Transform},
};

/// Sentence sequences of both texts along with their alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Aligned {
    pub source: Vec<String>,
    pub target: Vec<String>,
    pub pairs: Vec<AlignmentPair>,
}

/// Aligned content that did not make it into records.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Discarded {
    pub pairs: Skipped,
    /// size of the dropped packing tail, if any.
    pub tail: Option<usize>,
}

/// Outcome of a dataset pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub train: usize,
    pub valid: usize,
    pub discarded: Discarded,
    /// written files, checksum file last.
    pub files: Vec<PathBuf>,
}

impl Summary {
    pub(crate) fn new<T>(
        dataset: &Dataset<T>,
        discarded: Discarded,
        files: Vec<PathBuf>,
    ) -> Self {
        Self {
            train: dataset.train().len(),
            valid: dataset.valid().len(),
            discarded,
            files,
        }
    }
}

/// Reads both raw texts.
pub fn read_texts(source: &Path, target: &Path) -> Result<(String, String), Error> {
    info!("reading {:?} and {:?}", source, target);
    let source = std::fs::read_to_string(source)?;
    let target = std::fs::read_to_string(target)?;
    Ok((source, target))
}

/// Normalizes, segments and aligns two raw texts.
pub fn prepare<E: Embed + ?Sized>(
    source: &str,
    target: &str,
    tags: &Tags,
    config: &Config,
    embedder: &E,
) -> Result<Aligned, Error> {
    let normalizer = Normalizer::new(&config.normalize);

    let mut sequences = Vec::with_capacity(2);
    for (text, lang) in [(source, tags.source()), (target, tags.target())] {
        let text = if config.normalize.t2s && lang.code() == "zh" {
            info!("[{}] converting traditional to simplified characters", lang);
            Simplify.transform_own(text.to_string())
        } else {
            text.to_string()
        };

        info!("[{}] normalizing {} chars", lang, text.chars().count());
        let text = normalizer.normalize(&text);
        let segmenter = Segmenter::new(lang.clone(), &config.segment);
        sequences.push(segmenter.segment(&text));
    }

    let target = sequences.pop().unwrap_or_default();
    let source = sequences.pop().unwrap_or_default();
    let pairs = align(&source, &target, embedder)?;

    Ok(Aligned {
        source,
        target,
        pairs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Embeds sentences by the digits they contain.
    fn digits(sentences: &[String]) -> Result<Vec<Vec<f32>>, Error> {
        Ok(sentences
            .iter()
            .map(|s| {
                let mut v = vec![0.0; 10];
                for d in s.chars().filter_map(|c| c.to_digit(10)) {
                    v[d as usize] += 1.0;
                }
                v
            })
            .collect())
    }

    #[test]
    fn prepare_aligns() {
        let tags = Tags::new("en".parse().unwrap(), "zh".parse().unwrap());
        let source = "Chapter one has 1 cat.\nIt\nsleeps 2 hours. Then 3 dogs bark!\n";
        let target = "第一章有1只猫。它睡了2个小时。然后3只狗叫了！";

        let aligned = prepare(source, target, &tags, &Config::default(), &digits).unwrap();
        assert_eq!(
            aligned.source,
            vec![
                "Chapter one has 1 cat.",
                "It sleeps 2 hours.",
                "Then 3 dogs bark!"
            ]
        );
        assert_eq!(aligned.target.len(), 3);
        assert_eq!(
            aligned.pairs,
            vec![
                AlignmentPair::new(0, 0),
                AlignmentPair::new(1, 1),
                AlignmentPair::new(2, 2)
            ]
        );
    }

    fn traditional() -> (Tags, &'static str, &'static str) {
        let tags = Tags::new("en".parse().unwrap(), "zh".parse().unwrap());
        (tags, "It has 1 book. It reads 2 books.", "它有1本書。它讀了2本書。")
    }

    #[test]
    fn traditional_kept_by_default() {
        let (tags, source, target) = traditional();
        let aligned = prepare(source, target, &tags, &Config::default(), &digits).unwrap();
        assert_eq!(aligned.target, vec!["它有1本書。", "它讀了2本書。"]);
    }

    #[cfg(feature = "t2s")]
    #[test]
    fn traditional_converted() {
        let (tags, source, target) = traditional();
        let mut config = Config::default();
        config.normalize.t2s = true;
        let aligned = prepare(source, target, &tags, &config, &digits).unwrap();
        assert_eq!(aligned.target, vec!["它有1本书。", "它读了2本书。"]);
        assert_eq!(aligned.source, vec!["It has 1 book.", "It reads 2 books."]);
    }

    #[cfg(not(feature = "t2s"))]
    #[test]
    fn traditional_kept_without_feature() {
        let (tags, source, target) = traditional();
        let mut config = Config::default();
        config.normalize.t2s = true;
        let aligned = prepare(source, target, &tags, &config, &digits).unwrap();
        assert_eq!(aligned.target, vec!["它有1本書。", "它讀了2本書。"]);
    }
}
