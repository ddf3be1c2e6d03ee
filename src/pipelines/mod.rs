//! Pipelines.
//!
//! Various pipelines are implemented here, and the module
//! provides a light [pipeline::Pipeline] trait that enables easy and flexible pipeline creation.
//!
//! - [Clean] normalizes a single text file,
//! - [Chunked] builds an instruction-style dataset of budget-sized aligned chunks,
//! - [Curriculum] builds a tagged dataset mixing sentence pairs and long-context chunks.
pub mod bitext;
pub mod chunked;
pub mod clean;
pub mod curriculum;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use bitext::{prepare, read_texts, Aligned, Discarded, Summary};
pub use chunked::Chunked;
pub use clean::Clean;
pub use curriculum::Curriculum;
pub use pipeline::Pipeline;
