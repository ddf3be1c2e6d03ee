/*! Text transformers.

Each transformer is a normalization step, turning raw extracted text into clean paragraphs:

1. [Canonicalize]: line endings, byte order mark, control characters,
1. [Header]: lines repeated throughout the document (running headers/footers),
1. [NoiseLines]: page numbers, footnotes and inline annotation markers,
1. [Paragraphs]: paragraph merging, hyphenation and blank lines.

[Normalizer] chains them.

[Simplify] converts traditional Chinese to simplified Chinese, and is applied to Chinese
texts on demand.
!*/

mod canonicalize;
mod header;
mod noise;
mod normalizer;
mod paragraphs;
mod simplify;
mod transform;

pub use canonicalize::Canonicalize;
pub use header::Header;
pub use noise::NoiseLines;
pub use normalizer::{normalize, Normalizer};
pub use paragraphs::Paragraphs;
pub use simplify::Simplify;
pub use transform::Transform;
