use std::io;

use thiserror::Error;
use wordnet_db::{DecodeError, LoadError, LookupError};

/// Fatal conversion errors. Each one stops the run.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("{file}:{line}: {source}\n    {text}")]
    Decode {
        file: &'static str,
        line: usize,
        text: String,
        source: DecodeError,
    },

    #[error("{file}:{line}: {source}")]
    Lookup {
        file: &'static str,
        line: usize,
        source: LookupError,
    },

    #[error("store: {0}")]
    Store(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
