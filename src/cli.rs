//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use bitext::config::Unit;

#[derive(Debug, StructOpt)]
#[structopt(name = "bitext", about = "bilingual sentence-aligned corpus builder.")]
/// Holds every command that is callable by the `bitext` command.
pub enum Bitext {
    #[structopt(about = "Normalize a single text file")]
    Clean(Clean),
    #[structopt(about = "Build an instruction dataset of aligned chunks")]
    Chunked(Dataset),
    #[structopt(about = "Build a tagged dataset of sentence pairs and long-context chunks")]
    Curriculum(Dataset),
}

#[derive(Debug, StructOpt)]
pub struct Clean {
    #[structopt(parse(from_os_str), help = "raw text file")]
    pub src: PathBuf,
    #[structopt(
        parse(from_os_str),
        help = "cleaned text file. Defaults to <stem>_cleaned.<ext> next to the source."
    )]
    pub dst: Option<PathBuf>,
    #[structopt(parse(from_os_str), long = "config", help = "TOML configuration file")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, StructOpt)]
/// Dataset building commands and parameters.
pub struct Dataset {
    #[structopt(parse(from_os_str), help = "source language raw text")]
    pub source: PathBuf,
    #[structopt(parse(from_os_str), help = "target language raw text")]
    pub target: PathBuf,
    #[structopt(parse(from_os_str), help = "destination folder")]
    pub dst: PathBuf,
    #[structopt(
        parse(from_os_str),
        long = "model",
        help = "fastText model used for sentence embeddings (aligned multilingual vectors)"
    )]
    pub model: PathBuf,
    #[structopt(long = "source-lang", default_value = "en", help = "source language tag")]
    pub source_lang: String,
    #[structopt(long = "target-lang", default_value = "zh", help = "target language tag")]
    pub target_lang: String,
    #[structopt(parse(from_os_str), long = "config", help = "TOML configuration file")]
    pub config: Option<PathBuf>,
    #[structopt(
        long = "t2s",
        help = "convert Chinese texts from traditional to simplified characters (requires the t2s feature)"
    )]
    pub t2s: bool,
    #[structopt(long = "min-length", help = "minimum sentence length (in chars)")]
    pub min_length: Option<usize>,
    #[structopt(long = "split-ratio", help = "ratio of records in the train set")]
    pub split_ratio: Option<f64>,
    #[structopt(long = "seed", help = "shuffling and noise seed")]
    pub seed: Option<u64>,
    #[structopt(long = "unit", help = "chunked budget unit (chars or tokens)")]
    pub unit: Option<Unit>,
    #[structopt(long = "chunk-size", help = "chunked budget, in chars")]
    pub chunk_size: Option<usize>,
    #[structopt(long = "max-tokens", help = "token budget")]
    pub max_tokens: Option<usize>,
    #[structopt(
        parse(from_os_str),
        long = "tokenizer",
        help = "Hugging Face tokenizer.json used to count tokens (requires the hf-tokenizer feature)"
    )]
    pub tokenizer: Option<PathBuf>,
}
