use std::path::PathBuf;

use thiserror::Error;

use crate::storage::codec::DecodeError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("filesystem error on {}: {source}", path.to_string_lossy())]
    Fs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}:{line}: {source}", path.to_string_lossy())]
    Malformed {
        path: PathBuf,
        line: usize,
        #[source]
        source: DecodeError,
    },
}

impl StorageError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Fs {
            path: path.into(),
            source,
        }
    }
}
