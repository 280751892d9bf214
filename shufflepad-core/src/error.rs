use thiserror::Error;

/// Errors produced by the cipher and its storage layer.
#[derive(Error, Debug)]
pub enum CipherError {
    /// Encode or decode was invoked with no pad generated or supplied.
    #[error("no pad available: generate one or supply an existing pad first")]
    MissingPad,

    /// An I/O failure while reading or writing a pad file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A pad file could not be serialized or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CipherError>;
