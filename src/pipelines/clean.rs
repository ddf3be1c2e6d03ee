//! Single file cleaning.
use std::path::{Path, PathBuf};

use log::info;

use crate::{config::NormalizeConfig, error::Error, transformers::Normalizer};

use super::Pipeline;

pub struct Clean {
    src: PathBuf,
    dst: PathBuf,
    config: NormalizeConfig,
}

impl Clean {
    /// Without a destination, the cleaned file is written next to `src`, as `<stem>_cleaned.<ext>`.
    pub fn new(src: PathBuf, dst: Option<PathBuf>, config: NormalizeConfig) -> Self {
        let dst = dst.unwrap_or_else(|| Self::default_dst(&src));
        Self { src, dst, config }
    }

    fn default_dst(src: &Path) -> PathBuf {
        let stem = src
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let filename = match src.extension() {
            Some(ext) => format!("{}_cleaned.{}", stem, ext.to_string_lossy()),
            None => format!("{}_cleaned", stem),
        };
        src.with_file_name(filename)
    }

    pub fn dst(&self) -> &Path {
        &self.dst
    }
}

impl Pipeline<PathBuf> for Clean {
    fn run(&self) -> Result<PathBuf, Error> {
        let raw = std::fs::read_to_string(&self.src)?;
        let cleaned = Normalizer::new(&self.config).normalize(&raw);
        std::fs::write(&self.dst, &cleaned)?;

        info!(
            "cleaned {:?} into {:?} ({} -> {} chars)",
            self.src,
            self.dst,
            raw.chars().count(),
            cleaned.chars().count()
        );
        Ok(self.dst.clone())
    }
}
