use thiserror::Error;

/// A fetch that could not produce data.
///
/// There is a single failure kind; the message is what ends up in the
/// screen's `Failed` state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
