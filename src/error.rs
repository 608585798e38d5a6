use thiserror::Error;

/// Error taxonomy for the preparation pipeline.
///
/// Per-record errors (`UnknownSet`, `MalformedReference`) are logged and the
/// offending record is skipped; file-level errors (`Io`, `Json`) abort that
/// file only and the batch continues.
#[derive(Error, Debug)]
pub enum PrepError {
    #[error("unknown set code: {0}")]
    UnknownSet(String),
    #[error("malformed composite reference: {0:?}")]
    MalformedReference(String),
    #[error("non-numeric ordinal: {0:?}")]
    MalformedOrdinal(String),
    #[error("invalid catalog entry in set {set_code}: id {id:?} is not numeric")]
    InvalidCatalogEntry { set_code: String, id: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("download error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for pipeline operations.
pub type PrepResult<T> = Result<T, PrepError>;
