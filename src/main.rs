//! # bitext
//!
//! Builds bilingual sentence-aligned corpora from two editions of the same text.
//!
//! ## Getting started
//!
//! ```sh
//! bitext 0.1.0
//! bilingual sentence-aligned corpus builder.
//!
//! USAGE:
//!     bitext <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     chunked       Build an instruction dataset of aligned chunks
//!     clean         Normalize a single text file
//!     curriculum    Build a tagged dataset of sentence pairs and long-context chunks
//!     help          Prints this message or the help of the given subcommand(s)
//! ```
//!
//! Logging is configured with `RUST_LOG` (e.g. `RUST_LOG=bitext=info`).
use std::path::Path;

use structopt::StructOpt;

use bitext::{
    align::FastTextEmbedder,
    config::Config,
    error::Error,
    pipelines::{Chunked, Clean, Curriculum, Pipeline, Summary},
    processing::{Measure, Tags, TokenCount},
};

#[macro_use]
extern crate log;

mod cli;

fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    match path {
        Some(path) => Config::from_path(path),
        None => Ok(Config::default()),
    }
}

/// Configuration file values, overridden by command line ones.
fn dataset_config(opt: &cli::Dataset) -> Result<Config, Error> {
    let mut config = load_config(opt.config.as_deref())?;
    if opt.t2s {
        config.normalize.t2s = true;
    }
    if let Some(min_length) = opt.min_length {
        config.segment.min_length = min_length;
    }
    if let Some(split_ratio) = opt.split_ratio {
        config.dataset.split_ratio = split_ratio;
    }
    if let Some(seed) = opt.seed {
        config.dataset.seed = seed;
    }
    if let Some(unit) = opt.unit {
        config.pack.unit = unit;
    }
    if let Some(chunk_size) = opt.chunk_size {
        config.pack.chunk_size = chunk_size;
    }
    if let Some(max_tokens) = opt.max_tokens {
        config.pack.max_tokens = max_tokens;
    }
    Ok(config)
}

#[cfg(feature = "hf-tokenizer")]
fn measure(tokenizer: Option<&Path>) -> Result<Box<dyn Measure>, Error> {
    match tokenizer {
        Some(path) => Ok(Box::new(bitext::processing::HfTokenizer::from_file(path)?)),
        None => Ok(Box::new(TokenCount)),
    }
}

#[cfg(not(feature = "hf-tokenizer"))]
fn measure(tokenizer: Option<&Path>) -> Result<Box<dyn Measure>, Error> {
    match tokenizer {
        Some(_) => Err(Error::Custom(
            "--tokenizer requires bitext to be built with the hf-tokenizer feature".to_string(),
        )),
        None => Ok(Box::new(TokenCount)),
    }
}

fn report(summary: &Summary) {
    info!(
        "done: {} train and {} valid records",
        summary.train, summary.valid
    );
    let discarded = &summary.discarded;
    if discarded.pairs.out_of_bounds + discarded.pairs.too_short > 0 {
        info!(
            "discarded {} out of bounds and {} too short pairs",
            discarded.pairs.out_of_bounds, discarded.pairs.too_short
        );
    }
    if let Some(size) = discarded.tail {
        info!("discarded a packing tail of size {}", size);
    }
    for file in &summary.files {
        info!("wrote {:?}", file);
    }
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Bitext::from_args();
    debug!("cli args\n{:#?}", opt);

    match opt {
        cli::Bitext::Clean(c) => {
            let config = load_config(c.config.as_deref())?;
            let p = Clean::new(c.src, c.dst, config.normalize);
            p.run()?;
        }

        cli::Bitext::Chunked(d) => {
            let config = dataset_config(&d)?;
            let tags = Tags::new(d.source_lang.parse()?, d.target_lang.parse()?);
            let embedder = FastTextEmbedder::from_path(&d.model)?;
            let measure = measure(d.tokenizer.as_deref())?;

            let p = Chunked::new(
                d.source,
                d.target,
                d.dst,
                tags,
                config,
                &embedder,
                &*measure,
            );
            report(&p.run()?);
        }

        cli::Bitext::Curriculum(d) => {
            let config = dataset_config(&d)?;
            let tags = Tags::new(d.source_lang.parse()?, d.target_lang.parse()?);
            let embedder = FastTextEmbedder::from_path(&d.model)?;
            let measure = measure(d.tokenizer.as_deref())?;

            let p = Curriculum::new(
                d.source,
                d.target,
                d.dst,
                tags,
                config,
                &embedder,
                &*measure,
            );
            report(&p.run()?);
        }
    };
    Ok(())
}
