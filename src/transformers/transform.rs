//! Transform trait.

/// Text to text transformation.
///
/// Transformers are pure: they take ownership of the text and return the transformed one,
/// without keeping any state between calls.
pub trait Transform {
    fn transform_own(&self, text: String) -> String;
}
