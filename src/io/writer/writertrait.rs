use std::path::{Path, PathBuf};

use crate::error::Error;

pub trait WriterTrait {
    type Item;

    fn new(dst: &Path, name: &str) -> Result<Self, Error>
    where
        Self: Sized;
    fn write(&mut self, vals: Vec<Self::Item>) -> Result<(), Error>;
    /// Flushes buffered content and returns the path of the written file.
    fn close(self) -> Result<PathBuf, Error>
    where
        Self: Sized;
}
