/*! Packaging utilities

Computes a sha384sum for each written file, and writes them into a `sha384.txt` file
next to them, _usually_ compatible with `sha384sum -c` implementations.
!*/
use std::fs::File;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use sha2::Digest;
use sha2::Sha384;

use crate::error::Error;

pub const CHECKSUM_FILENAME: &str = "sha384.txt";

/// Create checksum file for the given files, in `dst`.
///
/// Files are identified by their file name, so they are expected to live in `dst` too.
pub fn gen_checksum_file(dst: &Path, files: &[PathBuf]) -> Result<PathBuf, Error> {
    let mut hasher = Sha384::new();
    let mut lines = Vec::with_capacity(files.len());

    for f in files {
        let filename = f
            .file_name()
            .ok_or_else(|| Error::Custom(format!("invalid file to hash: {:?}", f)))?
            .to_string_lossy()
            .into_owned();

        info!("hashing {:?}", filename);
        let hash = get_hash(f, &mut hasher)?;
        lines.push((hash, filename));
    }

    let checksum_filepath = dst.join(CHECKSUM_FILENAME);
    debug!("writing hashes to: {:?}", checksum_filepath);
    let mut checksum_file = File::create(&checksum_filepath)?;

    // write filenames and hashes in sha384sum -c compatible format.
    for (hash, filename) in lines {
        writeln!(&mut checksum_file, "{} {}", hash, filename)?;
    }

    Ok(checksum_filepath)
}

/// compute the hash of the file pointed by the filepath by using [io::copy] between a file handler and the hasher.
#[inline]
fn get_hash(filepath: &Path, hasher: &mut Sha384) -> Result<String, Error> {
    let mut f = File::open(filepath)?;
    io::copy(&mut f, hasher)?;
    let result = format!("{:x}", hasher.finalize_reset());
    Ok(result)
}
