use thiserror::Error;

/// Errors that can occur when parsing rule strings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A level token is not one of the recognized keywords. Carries the
    /// offending token verbatim.
    #[error("unsupported keyword: {0:?}")]
    UnsupportedKeyword(String),

    /// A rule contains `:` with an empty left or right side.
    #[error("bad syntax")]
    BadSyntax,
}
