//! Failure modes of an export run.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The request never produced a usable response. Always fatal to the run.
    #[error("failed to reach notion: {message}")]
    Transport { message: String },

    /// A response body did not match the expected shape.
    #[error("malformed notion response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// A block's text carried the delimiter but fewer than three segments.
    #[error("flashcard text needs word, translation and example: {content:?}")]
    MalformedFlashcard { content: String },

    /// Notion answered the checkbox update with a non-success status.
    #[error("notion rejected the processed update for page {page_id}: {status}")]
    UpdateRejected { page_id: String, status: StatusCode },

    /// Writing a flashcard line to the output failed.
    #[error("failed to write flashcard output: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ExportError {
    fn from(err: reqwest::Error) -> Self {
        ExportError::Transport {
            message: err.to_string(),
        }
    }
}
