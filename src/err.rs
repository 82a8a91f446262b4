/*!
Error types.
*/
use std::{path::PathBuf, str::Utf8Error};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WfErr {
    /// The input file couldn't be opened.
    #[error("unable to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error returned while reading from a chunk source.
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),
    /// A word wasn't valid UTF-8 and the tokenizer was set to
    /// [`Utf8FailureMode::Fatal`](crate::Utf8FailureMode::Fatal).
    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] Utf8Error),
    /// Delimiters must be single ASCII bytes so they can never land
    /// inside a multi-byte character.
    #[error("delimiter {0:#04x} is not an ASCII byte")]
    Delimiter(u8),
    /// Chunks have to hold at least one byte.
    #[error("chunk size must be greater than zero")]
    ChunkSize,
    /// Error returned while building the delimiter search.
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl WfErr {
    pub(crate) fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WfErr::Open {
            path: path.into(),
            source,
        }
    }
}
