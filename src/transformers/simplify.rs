//! Traditional to simplified Chinese conversion.
//!
//! Conversion tables come from [zhconv](https://docs.rs/zhconv), enabled by the `t2s` feature.
//! Without it, texts are left untouched.
#[cfg(not(feature = "t2s"))]
use log::warn;

use super::Transform;

/// Converts traditional Chinese characters and phrases to their simplified forms.
#[derive(Default)]
pub struct Simplify;

impl Transform for Simplify {
    #[cfg(feature = "t2s")]
    fn transform_own(&self, text: String) -> String {
        zhconv::zhconv(&text, zhconv::Variant::ZhHans)
    }

    #[cfg(not(feature = "t2s"))]
    fn transform_own(&self, text: String) -> String {
        warn!("built without the t2s feature, skipping traditional to simplified conversion");
        text
    }
}
