use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("orientation selection must contain exactly one choice, got {selected}")]
    InvalidConfiguration { selected: usize },

    #[error("cannot remove a track from an empty collection")]
    EmptyCollection,

    #[error("points/directions length mismatch: {points} points, {directions} directions")]
    ShapeMismatch { points: usize, directions: usize },

    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
