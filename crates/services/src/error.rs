//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::prompt::PromptError;
use storage::repository::StorageError;

/// Errors emitted by `TutorService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TutorError {
    #[error("the tutor is not configured")]
    Disabled,
    #[error("the model returned an empty response")]
    EmptyResponse,
    #[error("model request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Errors emitted by `QuestionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}
