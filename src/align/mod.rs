/*! Cross-lingual sentence alignment

Sentences of both languages are embedded in a shared vector space through an [Embed]
implementation, and matched greedily on cosine similarity by [align].
!*/
mod aligner;
mod embed;

pub use aligner::{align, cosine_matrix, greedy_match, AlignmentPair};
pub use embed::{Embed, FastTextEmbedder};
