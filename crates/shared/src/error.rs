use thiserror::Error;

/// Failures when decoding a booking handoff route string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandoffError {
    #[error("route does not start with '{expected}'")]
    MissingPrefix { expected: &'static str },
    #[error("route is missing the {0} segment")]
    MissingSegment(&'static str),
    #[error("segment '{0}' is not valid percent-encoded UTF-8")]
    InvalidEncoding(String),
}
