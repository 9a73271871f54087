//! Errors raised at the I/O boundary
//!
//! Classification itself never fails; these only cover getting the bytes.

use std::io;
use std::path::PathBuf;

/// Failure to read the input being classified
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    /// The file could not be opened
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading stopped partway through the input
    #[error("read failed after {position} bytes: {source}")]
    Read {
        position: u64,
        #[source]
        source: io::Error,
    },
}

impl DetectError {
    /// The underlying I/O error
    pub fn io_error(&self) -> &io::Error {
        match self {
            DetectError::Open { source, .. } | DetectError::Read { source, .. } => source,
        }
    }
}

impl From<io::Error> for DetectError {
    fn from(source: io::Error) -> Self {
        DetectError::Read { position: 0, source }
    }
}
