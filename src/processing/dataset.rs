/*! Dataset assembly

Records are shuffled with a seeded RNG, then split at `floor(split_ratio × N)`:
the first part is the training set, the rest is the validation set.
!*/
use std::path::{Path, PathBuf};

use log::info;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use serde::Serialize;

use crate::{
    error::Error,
    io::{JsonlWriter, WriterTrait},
};

use super::package::gen_checksum_file;

pub const TRAIN_FILENAME: &str = "train";
pub const VALID_FILENAME: &str = "valid";

#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<T> {
    train: Vec<T>,
    valid: Vec<T>,
}

/// Shuffles and splits `records`.
///
/// Fails on an empty record set, or on a ratio outside of `[0, 1]`.
pub fn assemble<T>(mut records: Vec<T>, split_ratio: f64, seed: u64) -> Result<Dataset<T>, Error> {
    if !(0.0..=1.0).contains(&split_ratio) {
        return Err(Error::InvalidSplitRatio(split_ratio));
    }
    if records.is_empty() {
        return Err(Error::EmptyDataset);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    records.shuffle(&mut rng);

    let split = (split_ratio * records.len() as f64).floor() as usize;
    let valid = records.split_off(split);
    info!(
        "[dataset] {} train and {} valid records",
        records.len(),
        valid.len()
    );

    Ok(Dataset {
        train: records,
        valid,
    })
}

impl<T> Dataset<T> {
    pub fn train(&self) -> &[T] {
        &self.train
    }

    pub fn valid(&self) -> &[T] {
        &self.valid
    }

    pub fn len(&self) -> usize {
        self.train.len() + self.valid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts every record (to change the output layout).
    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> Dataset<U> {
        Dataset {
            train: self.train.into_iter().map(&mut f).collect(),
            valid: self.valid.into_iter().map(&mut f).collect(),
        }
    }
}

impl<T: Serialize> Dataset<T> {
    /// Writes `train.jsonl`, `valid.jsonl` and their checksums into `dst`, creating it if needed.
    ///
    /// Returns the written files, checksum file last.
    pub fn write_jsonl(self, dst: &Path) -> Result<Vec<PathBuf>, Error> {
        std::fs::create_dir_all(dst)?;

        let mut files = Vec::with_capacity(3);
        for (name, records) in [(TRAIN_FILENAME, self.train), (VALID_FILENAME, self.valid)] {
            let mut wr = JsonlWriter::new(dst, name)?;
            wr.write(records)?;
            files.push(wr.close()?);
        }

        let checksums = gen_checksum_file(dst, &files)?;
        files.push(checksums);
        info!("[dataset] written to {:?}", dst);
        Ok(files)
    }
}
