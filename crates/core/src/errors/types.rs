//! Core error type definitions

/// Result type alias for funcplus operations
pub type Result<T> = std::result::Result<T, Error>;

/// Recoverable failures raised at the edges of the library.
///
/// Absence of a value is not an error: [`crate::Maybe`] models it directly.
/// These variants only appear where a caller explicitly asks for a
/// `Result` instead of a `Maybe`, or while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A `Maybe` was converted into a `Result` while empty
    #[error("expected a value for {context}, found nothing")]
    MissingValue { context: String },

    /// A map lookup that was required to succeed did not find its key
    #[error("key {key} is not present in the map")]
    MissingKey { key: String },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// An error wrapped with additional context
    #[error("{message}: {source}")]
    Context {
        message: String,
        #[source]
        source: Box<Error>,
    },
}
