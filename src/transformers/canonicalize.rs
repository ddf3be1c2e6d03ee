//! Canonical line endings and control character removal.
use log::debug;

use super::Transform;

const BOM: char = '\u{feff}';

/// Canonicalizes raw extracted text:
/// - `\r\n` and lone `\r` become `\n`,
/// - a leading byte order mark is removed,
/// - tabs become spaces,
/// - other ASCII control characters (`\x00`-`\x1f`, `\x7f`) are removed.
#[derive(Default)]
pub struct Canonicalize;

impl Transform for Canonicalize {
    fn transform_own(&self, text: String) -> String {
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        let text = text.trim_start_matches(BOM);

        let mut removed = 0;
        let cleaned: String = text
            .chars()
            .filter_map(|c| match c {
                '\n' => Some(c),
                '\t' => Some(' '),
                c if c.is_ascii_control() => {
                    removed += 1;
                    None
                }
                c => Some(c),
            })
            .collect();

        debug!("removed {} control characters", removed);
        cleaned
    }
}
