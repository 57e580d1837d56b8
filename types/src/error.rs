use thiserror::Error;

/// Errors raised while building or restoring game objects.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid card: {0}")]
    InvalidConstruction(String),
    #[error("invalid {what} format: {reason}")]
    InvalidFormat { what: &'static str, reason: String },
    #[error("deck exhausted")]
    DeckExhausted,
}

impl Error {
    pub fn invalid_format(what: &'static str, reason: impl ToString) -> Self {
        Self::InvalidFormat {
            what,
            reason: reason.to_string(),
        }
    }
}
