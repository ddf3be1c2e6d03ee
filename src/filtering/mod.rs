/*! Filtering utilities

Filters operate on lines (before paragraphs are rebuilt) or on sentences.

Filters implement [Filter]: they are pure and stateless, two successive equal inputs give two equal outputs.
- line filters ([PageNumber], [AnnotationLine]) detect extraction noise that has to be discarded,
- sentence filters ([Length]) detect sentences that are worth keeping.
! */
mod filter;
mod line;
mod sentence;

pub use filter::Filter;
pub use line::{strip_annotations, AnnotationLine, PageNumber};
pub use sentence::Length;
