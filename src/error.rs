//! Error types for the codecs and for the file layer that drives them.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by the Huffman and RLE codecs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// extract_min was called on an empty priority queue.
    #[error("priority queue is empty")]
    EmptyQueue,
    /// The container is truncated, padded with extra data, or the payload ends mid-code.
    #[error("malformed container: {0}")]
    MalformedContainer(String),
    /// The codebook has duplicate entries or is not prefix free.
    #[error("inconsistent codebook: {0}")]
    InconsistentCodebook(String),
}

/// Errors reported while compressing or decompressing files.
#[derive(Debug, Error)]
pub enum JobError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{} does not end in .{expected}", .path.display())]
    BadSuffix { path: PathBuf, expected: &'static str },
    #[error("{} already exists (use --force to overwrite)", .0.display())]
    OutputExists(PathBuf),
}

impl JobError {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        JobError::Io {
            path: path.into(),
            source,
        }
    }
}
