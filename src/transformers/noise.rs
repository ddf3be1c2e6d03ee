/*! Page numbers and footnotes

- page number lines are discarded,
- lines starting with an annotation marker (`①`, `[3]`, `【3】`, `(3)`…) are footnotes and are discarded,
- annotation markers found elsewhere are stripped, the rest of the line being kept.
!*/
use itertools::Itertools;
use log::debug;

use crate::filtering::{strip_annotations, AnnotationLine, Filter, PageNumber};

use super::Transform;

#[derive(Default)]
pub struct NoiseLines {
    page: PageNumber,
    annotation: AnnotationLine,
}

impl Transform for NoiseLines {
    fn transform_own(&self, text: String) -> String {
        let mut pages = 0;
        let mut notes = 0;
        let mut symbols = 0;

        let cleaned = text
            .split('\n')
            .filter(|line| {
                if self.page.detect(*line) {
                    pages += 1;
                    false
                } else if self.annotation.detect(*line) {
                    notes += 1;
                    false
                } else {
                    true
                }
            })
            .map(|line| {
                let (line, removed) = strip_annotations(line);
                symbols += removed;
                line
            })
            .join("\n");

        debug!(
            "removed {} page number lines, {} footnote lines and {} annotation symbols",
            pages, notes, symbols
        );
        cleaned
    }
}
