//! Error types for decoding, set manipulation and file I/O.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::color::Channel;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{channel} channel value {value} is outside 0..=255")]
    InvalidColorChannel { channel: Channel, value: i32 },

    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    #[error("Image data is corrupted: pixel {index} of {expected} is missing")]
    CorruptData { index: usize, expected: usize },

    #[error("Index {index} is out of range for a chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
