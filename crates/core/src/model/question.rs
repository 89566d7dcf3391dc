use thiserror::Error;
use url::Url;

use crate::model::ids::QuestionId;

/// A single interview-practice question from a company table.
///
/// Rows that fail validation here are discarded at load time, so a loaded
/// table is guaranteed to have a usable title and link for every entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeQuestion {
    id: QuestionId,
    title: String,
    link: String,
}

impl PracticeQuestion {
    /// Create a validated practice question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyTitle` if the title is empty after
    /// trimming, `QuestionError::EmptyLink` if the link is, and
    /// `QuestionError::InvalidLink` if the link is not an absolute URL.
    pub fn new(
        id: QuestionId,
        title: impl Into<String>,
        link: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(QuestionError::EmptyTitle);
        }

        let link = link.into().trim().to_string();
        if link.is_empty() {
            return Err(QuestionError::EmptyLink);
        }
        if Url::parse(&link).is_err() {
            return Err(QuestionError::InvalidLink(link));
        }

        Ok(Self { id, title, link })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question title cannot be empty")]
    EmptyTitle,

    #[error("question link cannot be empty")]
    EmptyLink,

    #[error("question link is not a valid URL: {0}")]
    InvalidLink(String),
}
