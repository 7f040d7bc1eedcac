//! Error types for token loading and resolution.

use thiserror::Error;

/// Error type for token table loading and accessor operations.
///
/// Accessors fail when a token is missing or its shape does not match the
/// accessor's contract; `extract_opacity` is the one lookup that never
/// fails (it falls back to fully opaque instead).
#[derive(Debug, Error)]
pub enum TokenError {
    /// Token name not present in the table.
    #[error("unknown token `{0}`")]
    UnknownToken(String),

    /// The accessor required a token with a direct literal value.
    #[error("token `{0}` has no literal value")]
    NotAValue(String),

    /// The accessor required a light/dark set with literal values.
    #[error("token `{0}` is not a light/dark color set")]
    NotAColorSet(String),

    /// The accessor required a light/dark set of references.
    #[error("token `{0}` is not a light/dark reference set")]
    NotAColorRefSet(String),

    /// Resolved font-size name missing from the fixed index table.
    #[error("unknown font size `{0}`")]
    UnknownFontSize(String),

    /// Malformed token dataset.
    #[error("invalid token data: {0}")]
    Parse(#[from] serde_json::Error),
}
