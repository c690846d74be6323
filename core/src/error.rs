use thiserror::Error;

/// Error type for archive decoding and puzzle operations.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("truncated archive: record needs {needed} bytes, only {remaining} remain")]
    TruncatedArchive { needed: usize, remaining: usize },

    #[error("reader exhausted: no values left past byte {0}")]
    ReaderExhausted(usize),

    #[error("puzzle is not loaded")]
    NotLoaded,
}
