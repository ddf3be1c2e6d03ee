//! Sentence embedding.
use std::path::Path;

use fasttext::FastText as FastTextLib;
use log::{debug, info};

use crate::error::Error;

/// Embedding capability.
///
/// Given a batch of sentences, returns one vector per sentence, in order.
/// Vectors of a given embedder all have the same dimension.
pub trait Embed {
    fn embed(&self, sentences: &[String]) -> Result<Vec<Vec<f32>>, Error>;
}

impl<F> Embed for F
where
    F: Fn(&[String]) -> Result<Vec<Vec<f32>>, Error>,
{
    fn embed(&self, sentences: &[String]) -> Result<Vec<Vec<f32>>, Error> {
        self(sentences)
    }
}

/// fastText sentence vectors.
///
/// Using a model trained on aligned multilingual word vectors puts sentences of
/// different languages in the same space.
pub struct FastTextEmbedder {
    inner: FastTextLib,
}

impl FastTextEmbedder {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let path_str = path
            .to_str()
            .ok_or_else(|| Error::Custom(format!("invalid model path: {:?}", path)))?;

        info!("loading fasttext model from {:?}", path);
        let mut inner = FastTextLib::new();
        inner.load_model(path_str)?;
        debug!("model dimension: {}", inner.get_dimension());

        Ok(Self { inner })
    }
}

impl Embed for FastTextEmbedder {
    fn embed(&self, sentences: &[String]) -> Result<Vec<Vec<f32>>, Error> {
        sentences
            .iter()
            // fasttext stops reading at newlines
            .map(|s| s.replace('\n', " "))
            .map(|s| self.inner.get_sentence_vector(&s).map_err(Error::Embedding))
            .collect()
    }
}
