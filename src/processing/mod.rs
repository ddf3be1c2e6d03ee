/*! Content processing

Turns aligned sentences into records, and records into datasets:
- [measure]: size of texts (characters or tokens),
- [record]: record layouts,
- [chunk]: budget-based packing of sentences and pairs,
- [noisy]: noisy source variants,
- [dataset]: shuffling, splitting and writing,
- [package]: checksums of written files.
!*/
pub mod chunk;
pub mod dataset;
pub mod measure;
pub mod noisy;
pub mod package;
pub mod record;

pub use chunk::{resolve_pairs, Chunks, PackStats, Packer, Side, SizeOf, Skipped, Tail};
pub use dataset::{assemble, Dataset};
#[cfg(feature = "hf-tokenizer")]
pub use measure::HfTokenizer;
pub use measure::{CharLength, Measure, TokenCount};
pub use noisy::Noisifier;
pub use record::{AlpacaRecord, Record, Tags};
