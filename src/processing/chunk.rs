/*! Chunk packing

Aligned sentence pairs are greedily packed into records that reach a size budget.

The [Packer] accumulates pairs in two parallel buffers and measures them after each addition:
as soon as the measured size reaches the budget, the buffers become a [Record].
What gets measured depends on [SizeOf]:
- [SizeOf::Target]: the target text alone (character budgets),
- [SizeOf::Tagged]: the tagged form of both sides (token budgets).

What happens to the buffers left at the end depends on [Tail].

[Packer::pack_side] packs the sentences of a single language the same way, measuring
that language alone.
!*/
use log::{debug, info, warn};

use crate::{
    align::AlignmentPair,
    config::TAIL_FLUSH_RATIO,
    error::Error,
    filtering::{Filter, Length},
};

use super::{
    measure::Measure,
    record::{Record, Tags},
};

/// Measured part of the buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeOf {
    Target,
    Tagged,
}

/// Language of a sentence sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

/// End of input policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tail {
    /// flush the remaining buffer only if its size is above this ratio of the budget.
    Threshold(f64),
    /// flush any non-empty remaining buffer.
    Always,
}

impl Tail {
    fn keeps(&self, size: usize, budget: usize) -> bool {
        match self {
            Tail::Threshold(ratio) => size as f64 > budget as f64 * ratio,
            Tail::Always => true,
        }
    }
}

impl Default for Tail {
    fn default() -> Self {
        Tail::Threshold(TAIL_FLUSH_RATIO)
    }
}

pub struct Packer<'m, M: Measure + ?Sized> {
    budget: usize,
    measure: &'m M,
    tags: Tags,
    size_of: SizeOf,
    tail: Tail,
}

impl<'m, M: Measure + ?Sized> Packer<'m, M> {
    /// New packer measuring the target side, with the default tail threshold.
    pub fn new(budget: usize, measure: &'m M, tags: Tags) -> Result<Self, Error> {
        if budget == 0 {
            return Err(Error::InvalidBudget(budget));
        }
        Ok(Self {
            budget,
            measure,
            tags,
            size_of: SizeOf::Target,
            tail: Tail::default(),
        })
    }

    pub fn size_of(mut self, size_of: SizeOf) -> Self {
        self.size_of = size_of;
        self
    }

    pub fn tail(mut self, tail: Tail) -> Self {
        self.tail = tail;
        self
    }

    /// Greedily packs the sentences of one language, joined by that language's joiner.
    ///
    /// The buffer is measured alone (no tags), whatever [SizeOf] is set.
    pub fn pack_side(&self, sentences: &[String], side: Side) -> Result<Vec<String>, Error> {
        let lang = match side {
            Side::Source => self.tags.source(),
            Side::Target => self.tags.target(),
        };
        let joiner = lang.joiner();

        let mut chunks = Vec::new();
        let mut buf: Vec<&str> = Vec::new();
        for sentence in sentences {
            buf.push(sentence);
            let joined = buf.join(joiner);
            if self.measure.measure(&joined)? >= self.budget {
                chunks.push(joined);
                buf.clear();
            }
        }

        if !buf.is_empty() {
            let joined = buf.join(joiner);
            let size = self.measure.measure(&joined)?;
            if self.tail.keeps(size, self.budget) {
                chunks.push(joined);
            } else {
                debug!(
                    "[{}] dropping tail of {} sentences (size {}, budget {})",
                    lang,
                    buf.len(),
                    size,
                    self.budget
                );
            }
        }
        Ok(chunks)
    }

    /// Lazily packs `pairs`.
    pub fn pack<I, S, T>(&self, pairs: I) -> Chunks<'_, 'm, I::IntoIter, M>
    where
        I: IntoIterator<Item = (S, T)>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Chunks {
            packer: self,
            pairs: pairs.into_iter(),
            source_buf: Vec::new(),
            target_buf: Vec::new(),
            done: false,
            stats: PackStats::default(),
        }
    }
}

/// Packing statistics.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PackStats {
    pub pairs: usize,
    pub records: usize,
    /// size of the tail buffer that was discarded, if any.
    pub dropped_tail: Option<usize>,
}

/// Lazy record iterator, see [Packer::pack].
///
/// Yields an error (and stops) if the measure fails.
pub struct Chunks<'p, 'm, I, M: Measure + ?Sized> {
    packer: &'p Packer<'m, M>,
    pairs: I,
    source_buf: Vec<String>,
    target_buf: Vec<String>,
    done: bool,
    stats: PackStats,
}

impl<'p, 'm, I, M: Measure + ?Sized> Chunks<'p, 'm, I, M> {
    pub fn stats(&self) -> &PackStats {
        &self.stats
    }

    fn joined(&self) -> (String, String) {
        let tags = &self.packer.tags;
        (
            self.source_buf.join(tags.source().joiner()),
            self.target_buf.join(tags.target().joiner()),
        )
    }

    fn size(&self, source: &str, target: &str) -> Result<usize, Error> {
        match self.packer.size_of {
            SizeOf::Target => self.packer.measure.measure(target),
            SizeOf::Tagged => self
                .packer
                .measure
                .measure(&self.packer.tags.tag(source, target)),
        }
    }

    fn flush(&mut self, source: String, target: String, size: usize) -> Record {
        self.source_buf.clear();
        self.target_buf.clear();
        self.stats.records += 1;
        Record::tagged(source, target, &self.packer.tags, size)
    }
}

impl<'p, 'm, I, S, T, M> Iterator for Chunks<'p, 'm, I, M>
where
    I: Iterator<Item = (S, T)>,
    S: AsRef<str>,
    T: AsRef<str>,
    M: Measure + ?Sized,
{
    type Item = Result<Record, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        while let Some((source, target)) = self.pairs.next() {
            self.stats.pairs += 1;
            self.source_buf.push(source.as_ref().to_string());
            self.target_buf.push(target.as_ref().to_string());

            let (source, target) = self.joined();
            match self.size(&source, &target) {
                Ok(size) if size >= self.packer.budget => {
                    return Some(Ok(self.flush(source, target, size)))
                }
                Ok(_) => (),
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }

        self.done = true;
        if self.target_buf.is_empty() {
            return None;
        }

        let (source, target) = self.joined();
        let size = match self.size(&source, &target) {
            Ok(size) => size,
            Err(e) => return Some(Err(e)),
        };

        if self.packer.tail.keeps(size, self.packer.budget) {
            Some(Ok(self.flush(source, target, size)))
        } else {
            debug!(
                "dropping tail of {} pairs (size {}, budget {})",
                self.target_buf.len(),
                size,
                self.packer.budget
            );
            self.stats.dropped_tail = Some(size);
            None
        }
    }
}

/// Pairs that could not be resolved into sentences.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Skipped {
    pub out_of_bounds: usize,
    pub too_short: usize,
}

/// Gets the sentences of each alignment pair.
///
/// Pairs pointing outside the sequences are logged and skipped, and so are pairs
/// where either side is shorter than `min_length`, if provided.
pub fn resolve_pairs<'a>(
    pairs: &[AlignmentPair],
    source: &'a [String],
    target: &'a [String],
    min_length: Option<usize>,
) -> (Vec<(&'a str, &'a str)>, Skipped) {
    let mut skipped = Skipped::default();
    let filter = min_length.map(Length::with_min_size);

    let resolved: Vec<(&str, &str)> = pairs
        .iter()
        .filter_map(|pair| match pair.resolve(source, target) {
            Ok((s, t)) => match &filter {
                Some(f) if !(f.detect(s.trim()) && f.detect(t.trim())) => {
                    skipped.too_short += 1;
                    None
                }
                _ => Some((s, t)),
            },
            Err(e) => {
                warn!("skipping pair: {}", e);
                skipped.out_of_bounds += 1;
                None
            }
        })
        .collect();

    if skipped != Skipped::default() {
        info!(
            "skipped {} out of bounds and {} too short pairs",
            skipped.out_of_bounds, skipped.too_short
        );
    }
    (resolved, skipped)
}
