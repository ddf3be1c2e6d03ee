/*! # bitext

Turns two independently authored texts in different languages (e.g. an English and a Chinese
edition of the same book) into a bilingual sentence-aligned corpus.

Data flows forward through the following stages:
1. normalization ([transformers]): control characters, repeated headers/footers, page numbers,
   annotation markers, hyphenation, paragraphs,
1. sentence segmentation ([segment]), per language ([lang]),
1. cross-lingual alignment ([align]) using an embedding capability,
1. chunk packing ([processing::chunk]) under character or token budgets,
1. dataset assembly ([processing::dataset]): shuffle, train/valid split, JSON lines output.

[pipelines] wire these stages together, each stage taking its section of [config::Config].
!*/
pub mod align;
pub mod config;
pub mod error;
pub mod filtering;
pub mod io;
pub mod lang;
pub mod pipelines;
pub mod processing;
pub mod segment;
pub mod transformers;
