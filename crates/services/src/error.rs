//! Shared error types for the services crate.

use drill_core::{AssistFailure, AssistKind};
use thiserror::Error;

/// Errors emitted by the hint and feedback flows.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssistError {
    #[error("AI assistant API key not configured.")]
    NotConfigured,
    #[error("a {0} request is already pending")]
    AlreadyPending(AssistKind),
    #[error("assistant returned an empty response")]
    EmptyResponse,
    #[error("assistant request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl AssistError {
    /// How a failed completion is presented in the session's assist slot.
    #[must_use]
    pub fn failure(&self) -> AssistFailure {
        match self {
            AssistError::EmptyResponse => AssistFailure::NoContent,
            _ => AssistFailure::Service,
        }
    }
}
