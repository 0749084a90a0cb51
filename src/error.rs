/*
    Errors
*/

/// Error returned when a string cannot be parsed as a `Ball`.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ParseBallError {
    #[error("empty input")]
    Empty,
    #[error("invalid midpoint `{0}`")]
    InvalidMidpoint(String),
    #[error("invalid radius `{0}`")]
    InvalidRadius(String),
    #[error("negative radius")]
    NegativeRadius,
}
