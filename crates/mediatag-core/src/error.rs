use thiserror::Error;

/// Errors that can occur while building a Mediatag extractor.
///
/// Extraction itself never fails; every error here surfaces at construction
/// time, before the first filename is parsed.
#[derive(Debug, Error)]
pub enum MediatagError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// The configuration names a rule group the pipeline does not contain.
    #[error("unknown rule group: {0:?}")]
    UnknownGroup(String),
}

/// Result type alias for Mediatag operations.
pub type Result<T> = std::result::Result<T, MediatagError>;
