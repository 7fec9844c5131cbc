use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardError {
    #[error("Could not open {url}: {reason}")]
    LinkOpen { url: String, reason: String },

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("No menu entry at position {0}")]
    Selection(usize),

    #[error("Invalid profile: {0}")]
    Profile(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CardError {
    pub fn link_open(url: &str, reason: impl ToString) -> Self {
        CardError::LinkOpen {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Link failures are recovered by the menu loop; everything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CardError::LinkOpen { .. })
    }
}

pub type Result<T> = std::result::Result<T, CardError>;
