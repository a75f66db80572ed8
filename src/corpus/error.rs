use thiserror::Error;

/// Errors raised while materializing a corpus.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The external loader rejected one of the records
    #[error("Malformed translation unit at record {index}: {message}")]
    MalformedRecord { index: usize, message: String },
}
