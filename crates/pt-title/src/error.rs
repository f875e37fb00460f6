//! Error types for pt-title.

/// Errors produced when converting strings into model enums.
///
/// Parsing a release name never fails; these only come out of the
/// [`FromStr`](std::str::FromStr) impls on the format and resolution enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The string is not an alias of any known digital format.
    #[error("unknown digital format: {0}")]
    UnknownFormat(String),

    /// The string is not an alias of any known resolution.
    #[error("unknown resolution: {0}")]
    UnknownResolution(String),
}

impl ParseError {
    /// Create an unknown format error.
    pub fn unknown_format(value: impl Into<String>) -> Self {
        Self::UnknownFormat(value.into())
    }

    /// Create an unknown resolution error.
    pub fn unknown_resolution(value: impl Into<String>) -> Self {
        Self::UnknownResolution(value.into())
    }
}
