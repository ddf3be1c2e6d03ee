/*! JSON lines writer.

Items are serialized one per line into `<dst>/<name>.jsonl`.
The file is created (or truncated) when the writer is created.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::error;

use super::WriterTrait;

pub struct JsonlWriter<T> {
    path: PathBuf,
    handle: BufWriter<File>,
    nb_items: usize,
    item: PhantomData<T>,
}

impl<T> JsonlWriter<T> {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn nb_items(&self) -> usize {
        self.nb_items
    }
}

impl<T: Serialize> WriterTrait for JsonlWriter<T> {
    type Item = T;

    fn new(dst: &Path, name: &str) -> Result<Self, error::Error> {
        let path = dst.join(format!("{}.jsonl", name));
        debug!("creating {:?}", path);
        let handle = BufWriter::new(File::create(&path)?);
        Ok(Self {
            path,
            handle,
            nb_items: 0,
            item: PhantomData,
        })
    }

    fn write(&mut self, vals: Vec<T>) -> Result<(), error::Error> {
        let mut piece_str = String::new();
        for val in &vals {
            piece_str += &serde_json::to_string(val)?;
            piece_str.push('\n');
        }
        self.handle.write_all(piece_str.as_bytes())?;
        self.nb_items += vals.len();

        Ok(())
    }

    fn close(mut self) -> Result<PathBuf, error::Error> {
        self.handle.flush()?;
        debug!("wrote {} items to {:?}", self.nb_items, self.path);
        Ok(self.path)
    }
}
