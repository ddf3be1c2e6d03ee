//! Curriculum dataset pipeline
//!
//! Builds a tagged dataset mixing short and long contexts:
//! - one record per aligned sentence pair,
//! - long-context records, made by packing each language's whole sentence sequence into
//!   token-budget chunks, then pairing chunks by position.
//!
//! Records carry their token count, and a noisy version of their source text when the
//! source language is written in a Latin script.
use std::path::PathBuf;

use log::{debug, info};

use crate::{
    align::Embed,
    config::Config,
    error::Error,
    lang::Script,
    processing::{assemble, resolve_pairs, Measure, Noisifier, Packer, Record, Side, Tags, Tail},
};

use super::{
    bitext::{prepare, read_texts, Aligned, Discarded, Summary},
    Pipeline,
};

pub struct Curriculum<'a, E: Embed + ?Sized, M: Measure + ?Sized> {
    source: PathBuf,
    target: PathBuf,
    dst: PathBuf,
    tags: Tags,
    config: Config,
    embedder: &'a E,
    measure: &'a M,
}

impl<'a, E: Embed + ?Sized, M: Measure + ?Sized> Curriculum<'a, E, M> {
    pub fn new(
        source: PathBuf,
        target: PathBuf,
        dst: PathBuf,
        tags: Tags,
        config: Config,
        embedder: &'a E,
        measure: &'a M,
    ) -> Self {
        Self {
            source,
            target,
            dst,
            tags,
            config,
            embedder,
            measure,
        }
    }

    fn noisifier(&self) -> Result<Option<Noisifier>, Error> {
        let dataset = &self.config.dataset;
        match (dataset.noisy, self.tags.source().script()) {
            (true, Script::Latin) => Ok(Some(Noisifier::new(dataset.drop_rate, dataset.seed)?)),
            (true, Script::Cjk) => {
                debug!(
                    "[{}] no noisy variants for this language",
                    self.tags.source()
                );
                Ok(None)
            }
            (false, _) => Ok(None),
        }
    }

    fn record(&self, source: String, target: String) -> Result<Record, Error> {
        let text = self.tags.tag(&source, &target);
        let length = self.measure.measure(&text)?;
        Ok(Record::new(source, target, text, length))
    }

    /// Builds sentence level records, then long-context ones.
    ///
    /// Long-context chunks keep their tails, so only unresolvable pairs are discarded.
    pub fn build_records(&self, aligned: &Aligned) -> Result<(Vec<Record>, Discarded), Error> {
        let mut noisifier = self.noisifier()?;
        let mut noisy = |record: Record| {
            let variant = noisifier.as_mut().map(|n| n.noisify(record.source()));
            record.with_noisy_source(variant)
        };

        let (pairs, skipped) =
            resolve_pairs(&aligned.pairs, &aligned.source, &aligned.target, None);
        let mut records = Vec::with_capacity(pairs.len());
        for (source, target) in pairs {
            let record = self.record(source.to_string(), target.to_string())?;
            records.push(noisy(record));
        }
        info!("[curriculum] {} sentence records", records.len());

        let max_tokens = self.config.pack.max_tokens;
        let packer =
            Packer::new(max_tokens, self.measure, self.tags.clone())?.tail(Tail::Always);
        let source_chunks = packer.pack_side(&aligned.source, Side::Source)?;
        let target_chunks = packer.pack_side(&aligned.target, Side::Target)?;
        if source_chunks.len() != target_chunks.len() {
            debug!(
                "[curriculum] {} source and {} target chunks, extra ones are dropped",
                source_chunks.len(),
                target_chunks.len()
            );
        }

        let nb_sentence_records = records.len();
        for (source, target) in source_chunks.into_iter().zip(target_chunks) {
            let record = self.record(source, target)?;
            records.push(noisy(record));
        }
        info!(
            "[curriculum] {} long-context records (~{} tokens)",
            records.len() - nb_sentence_records,
            max_tokens
        );

        let discarded = Discarded {
            pairs: skipped,
            tail: None,
        };
        Ok((records, discarded))
    }
}

impl<'a, E: Embed + ?Sized, M: Measure + ?Sized> Pipeline<Summary> for Curriculum<'a, E, M> {
    fn run(&self) -> Result<Summary, Error> {
        let (source, target) = read_texts(&self.source, &self.target)?;
        let aligned = prepare(&source, &target, &self.tags, &self.config, self.embedder)?;
        let (records, discarded) = self.build_records(&aligned)?;

        let dataset = assemble(
            records,
            self.config.dataset.split_ratio,
            self.config.dataset.seed,
        )?;

        let summary = Summary::new(&dataset, discarded, Vec::new());
        let files = dataset.write_jsonl(&self.dst)?;
        Ok(Summary { files, ..summary })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        align::AlignmentPair,
        processing::{CharLength, TokenCount},
    };

    use super::*;

    fn never(_: &[String]) -> Result<Vec<Vec<f32>>, Error> {
        Err(Error::Embedding("unused".to_string()))
    }

    fn strings(s: &[&str]) -> Vec<String> {
        s.iter().map(|s| s.to_string()).collect()
    }

    fn aligned() -> Aligned {
        Aligned {
            source: strings(&["It rains.", "The sun is out.", "Birds sing."]),
            target: strings(&["下雨了。", "太阳出来了。", "鸟儿在唱歌。"]),
            pairs: vec![AlignmentPair::new(0, 0), AlignmentPair::new(2, 2)],
        }
    }

    fn pipeline<'a, E: Embed, M: Measure>(
        source: &str,
        config: Config,
        embedder: &'a E,
        measure: &'a M,
    ) -> Curriculum<'a, E, M> {
        Curriculum::new(
            PathBuf::new(),
            PathBuf::new(),
            PathBuf::new(),
            Tags::new(source.parse().unwrap(), "zh".parse().unwrap()),
            config,
            embedder,
            measure,
        )
    }

    #[test]
    fn sentence_and_long_records() {
        let mut config = Config::default();
        config.pack.max_tokens = 1000;
        let mut aligned = aligned();
        aligned.pairs.push(AlignmentPair::new(1, 7));
        let (records, discarded) = pipeline("en", config, &never, &TokenCount)
            .build_records(&aligned)
            .unwrap();
        assert_eq!(discarded.pairs.out_of_bounds, 1);
        assert_eq!(discarded.tail, None);

        // two sentence pairs, one long-context pair
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].text(), "<en> It rains. </en><zh> 下雨了。 </zh>");
        assert_eq!(records[1].source(), "Birds sing.");
        assert_eq!(
            records[2].source(),
            "It rains. The sun is out. Birds sing."
        );
        assert_eq!(records[2].target(), "下雨了。太阳出来了。鸟儿在唱歌。");
        assert!(records.iter().all(|r| r.noisy_source().is_some()));
        assert_eq!(
            records[0].length(),
            TokenCount.measure(records[0].text()).unwrap()
        );
    }

    #[test]
    fn long_chunks_zipped() {
        let mut config = Config::default();
        config.dataset.noisy = false;
        // 3 source chunks (one per sentence), 2 target chunks (4+6 chars, then 6)
        config.pack.max_tokens = 5;
        let (records, _) = pipeline("en", config, &never, &CharLength)
            .build_records(&aligned())
            .unwrap();

        let long: Vec<&Record> = records[2..].iter().collect();
        assert_eq!(long.len(), 2);
        assert_eq!(long[0].source(), "It rains.");
        assert_eq!(long[0].target(), "下雨了。太阳出来了。");
        assert_eq!(long[1].source(), "The sun is out.");
        assert_eq!(long[1].target(), "鸟儿在唱歌。");
        assert!(records.iter().all(|r| r.noisy_source().is_none()));
    }

    #[test]
    fn no_noisy_variant_for_cjk_sources() {
        let (records, _) = pipeline("ja", Config::default(), &never, &CharLength)
            .build_records(&aligned())
            .unwrap();
        assert!(records.iter().all(|r| r.noisy_source().is_none()));
    }

    #[test]
    fn non_finite_drop_rate() {
        let mut config = Config::default();
        config.dataset.drop_rate = (f64::NAN, 0.05);
        let built = pipeline("en", config, &never, &CharLength).build_records(&aligned());
        assert!(matches!(built, Err(Error::InvalidDropRate(_, _))));
    }
}
