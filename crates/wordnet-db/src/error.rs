//! Error types for loading, decoding and offset lookups.

use std::io;
use std::path::PathBuf;
use std::str::Utf8Error;

use thiserror::Error;
use wordnet_types::Pos;

/// A record line failed structural parsing.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("record is not valid UTF-8: {0}")]
    Utf8(#[from] Utf8Error),

    #[error("missing `|` gloss separator")]
    MissingGloss,

    #[error("record ends before {field}")]
    Truncated { field: &'static str },

    #[error("invalid {field} `{token}`")]
    InvalidField { field: &'static str, token: String },

    #[error("record has no words")]
    NoWords,
}

impl DecodeError {
    pub(crate) fn invalid(field: &'static str, token: &str) -> Self {
        DecodeError::InvalidField {
            field,
            token: token.to_string(),
        }
    }
}

/// A random-access read by `(pos, offset)` could not produce the record.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no data file opened for {0}")]
    MissingFile(Pos),

    #[error("offset {offset} is past the end of {file}")]
    OffsetOutOfRange { file: &'static str, offset: u32 },

    #[error("{file} offset {requested} holds the record for offset {found}")]
    OffsetMismatch {
        file: &'static str,
        requested: u32,
        found: u32,
    },

    #[error("{file} offset {offset} has no word number {index}")]
    WordIndex {
        file: &'static str,
        offset: u32,
        index: u16,
    },

    #[error("{file} offset {offset}: {source}")]
    Decode {
        file: &'static str,
        offset: u32,
        source: DecodeError,
    },
}

/// The source directory does not have the expected layout.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{} doesn't contain a dict subdirectory, doesn't look like WordNet source", .0.display())]
    NotWordNet(PathBuf),

    #[error("no data.* files found in {}", .0.display())]
    NoDataFiles(PathBuf),

    #[error("open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("mmap {}: {source}", path.display())]
    Map { path: PathBuf, source: io::Error },
}
