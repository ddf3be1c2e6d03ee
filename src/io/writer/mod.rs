/*!
# File based writing

[JsonlWriter] writes serializable items into a single `<name>.jsonl` file.
!*/
mod writer_jsonl;
mod writertrait;
pub use writer_jsonl::JsonlWriter;
pub use writertrait::WriterTrait;
