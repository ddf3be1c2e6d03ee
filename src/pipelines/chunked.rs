//! Chunked dataset pipeline
//!
//! Builds an instruction-style dataset from two editions of the same text.
//!
//! # Processing
//! 1. Both texts are normalized, segmented and aligned.
//! 1. Aligned pairs with a side shorter than the minimum sentence length are skipped.
//! 1. Remaining pairs are packed into chunks, either by target characters or by tagged tokens
//!    (see [crate::config::Unit]). Small tails are dropped.
//! 1. Chunks are shuffled, split and written as `{"role", "instruction", "input", "output"}` lines.
use std::path::PathBuf;

use log::{debug, info};

use crate::{
    align::Embed,
    config::{Config, Unit},
    error::Error,
    processing::{
        assemble, resolve_pairs, AlpacaRecord, CharLength, Measure, PackStats, Packer, Record,
        SizeOf, Tags, Tail,
    },
};

use super::{
    bitext::{prepare, read_texts, Aligned, Discarded, Summary},
    Pipeline,
};

pub struct Chunked<'a, E: Embed + ?Sized, M: Measure + ?Sized> {
    source: PathBuf,
    target: PathBuf,
    dst: PathBuf,
    tags: Tags,
    config: Config,
    embedder: &'a E,
    measure: &'a M,
}

impl<'a, E: Embed + ?Sized, M: Measure + ?Sized> Chunked<'a, E, M> {
    /// `measure` is only used with token budgets.
    pub fn new(
        source: PathBuf,
        target: PathBuf,
        dst: PathBuf,
        tags: Tags,
        config: Config,
        embedder: &'a E,
        measure: &'a M,
    ) -> Self {
        debug!("chunked pipeline with {:?}", config.pack);
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

    fn pack<N: Measure + ?Sized>(
        &self,
        packer: &Packer<'_, N>,
        pairs: Vec<(&str, &str)>,
    ) -> Result<(Vec<Record>, PackStats), Error> {
        let mut chunks = packer.pack(pairs);
        let records = chunks.by_ref().collect::<Result<Vec<_>, _>>()?;

        let stats = *chunks.stats();
        info!("[pack] {} pairs into {} chunks", stats.pairs, stats.records);
        if let Some(size) = stats.dropped_tail {
            info!("[pack] dropped a tail of size {}", size);
        }
        Ok((records, stats))
    }

    /// Packs aligned sentences into chunk records.
    pub fn build_records(&self, aligned: &Aligned) -> Result<(Vec<Record>, Discarded), Error> {
        let (pairs, skipped) = resolve_pairs(
            &aligned.pairs,
            &aligned.source,
            &aligned.target,
            Some(self.config.segment.min_length),
        );

        let pack = &self.config.pack;
        let tail = Tail::Threshold(pack.tail_ratio);
        let (records, stats) = match pack.unit {
            Unit::Chars => {
                let packer = Packer::new(pack.chunk_size, &CharLength, self.tags.clone())?
                    .size_of(SizeOf::Target)
                    .tail(tail);
                self.pack(&packer, pairs)?
            }
            Unit::Tokens => {
                let packer = Packer::new(pack.max_tokens, self.measure, self.tags.clone())?
                    .size_of(SizeOf::Tagged)
                    .tail(tail);
                self.pack(&packer, pairs)?
            }
        };

        let discarded = Discarded {
            pairs: skipped,
            tail: stats.dropped_tail,
        };
        Ok((records, discarded))
    }
}

impl<'a, E: Embed + ?Sized, M: Measure + ?Sized> Pipeline<Summary> for Chunked<'a, E, M> {
    fn run(&self) -> Result<Summary, Error> {
        let (source, target) = read_texts(&self.source, &self.target)?;
        let aligned = prepare(&source, &target, &self.tags, &self.config, self.embedder)?;
        let (records, discarded) = self.build_records(&aligned)?;

        let dataset = assemble(
            records,
            self.config.dataset.split_ratio,
            self.config.dataset.seed,
        )?
        .map(AlpacaRecord::from);

        let summary = Summary::new(&dataset, discarded, Vec::new());
        let files = dataset.write_jsonl(&self.dst)?;
        Ok(Summary { files, ..summary })
    }
}
