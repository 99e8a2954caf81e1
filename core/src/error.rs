use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("deck has no slides")]
    Empty,

    #[error("slide index {index} out of range (deck has {len} slides)")]
    OutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Deck parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DeckError>;
