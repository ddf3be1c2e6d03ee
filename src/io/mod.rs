/*!
# IO utilities

Record saving. Records are written as JSON lines, one record per line.
!*/
pub mod writer;
pub use writer::{JsonlWriter, WriterTrait};
