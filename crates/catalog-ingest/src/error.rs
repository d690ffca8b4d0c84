use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    /// The catalog file could not be opened. Distinct from a readable file
    /// that yields zero entries, which is not an error.
    #[error("failed to open catalog file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be read mid-file (I/O or encoding failure, not a
    /// malformed-but-readable line).
    #[error("failed to read catalog records: {0}")]
    Read(#[from] csv::Error),
}
