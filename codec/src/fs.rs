//! File-system glue at the buffer boundary.
//!
//! Reading is the only operation the core owns: a byte vector comes in, a
//! reader is built on top. Writing is the caller's business via
//! [`WriteBuffer::into_bytes`](crate::WriteBuffer::into_bytes) and whatever
//! sink they prefer.

use bytes::Bytes;
use std::{
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Error reading a binary file into a buffer.
#[derive(Error, Debug)]
pub enum FsError {
    /// The file does not exist.
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    /// Any other I/O failure.
    #[error("i/o error reading {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Reads a binary file into an owned byte vector.
///
/// Failures come back as values, never as panics.
pub fn read_binary_file(path: impl AsRef<Path>) -> Result<Bytes, FsError> {
    let path = path.as_ref();
    match std::fs::read(path) {
        Ok(data) => Ok(Bytes::from(data)),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(FsError::NotFound(path.to_path_buf()))
        }
        Err(source) => Err(FsError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
