use async_trait::async_trait;
use prep_core::model::{Company, PracticeQuestion};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::csv::CsvQuestionBank;

/// Errors surfaced by question-bank adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("no question table for {0}")]
    MissingTable(Company),

    #[error("failed to read question table: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed question table: {0}")]
    Malformed(String),

    #[error("question bank lock error: {0}")]
    Lock(String),
}

/// Repository contract for company question tables.
///
/// A load returns the cleaned table: rows without a usable title or link are
/// already discarded and every entry carries a unique identifier. Callers
/// that want caching layer it on top (see `services::QuestionService`); the
/// repository itself reads fresh on every call.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Load the cleaned question table for a company.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing table is missing, unreadable,
    /// or structurally malformed.
    async fn load_questions(
        &self,
        company: Company,
    ) -> Result<Vec<PracticeQuestion>, StorageError>;
}

/// Simple in-memory question bank for testing and prototyping.
///
/// Counts loads so tests can observe whether a cache above it actually
/// avoided a re-read.
#[derive(Clone, Default)]
pub struct InMemoryQuestionBank {
    tables: Arc<Mutex<HashMap<Company, Vec<PracticeQuestion>>>>,
    loads: Arc<AtomicUsize>,
}

impl InMemoryQuestionBank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the table for a company.
    pub fn seed(&self, company: Company, questions: Vec<PracticeQuestion>) {
        let mut guard = self
            .tables
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.insert(company, questions);
    }

    /// Number of `load_questions` calls served so far.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionBank {
    async fn load_questions(
        &self,
        company: Company,
    ) -> Result<Vec<PracticeQuestion>, StorageError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let guard = self
            .tables
            .lock()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        guard
            .get(&company)
            .cloned()
            .ok_or(StorageError::MissingTable(company))
    }
}

/// Storage assembly handed to the service layer.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    /// CSV-backed storage rooted at a data directory.
    #[must_use]
    pub fn csv(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            questions: Arc::new(CsvQuestionBank::new(data_dir)),
        }
    }

    /// In-memory storage for tests.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            questions: Arc::new(InMemoryQuestionBank::new()),
        }
    }
}
