use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use rand::rng;
use rand::seq::SliceRandom;
use tracing::debug;

use prep_core::model::{Company, PracticeQuestion};
use storage::repository::QuestionRepository;

use crate::error::QuestionServiceError;

/// Maximum number of questions in a sampled batch.
pub const SAMPLE_SIZE: usize = 10;

/// An ordered batch of sampled practice questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledBatch {
    questions: Vec<PracticeQuestion>,
}

impl SampledBatch {
    #[must_use]
    pub fn questions(&self) -> &[PracticeQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Loads company question tables and samples practice batches.
///
/// Tables are cached per company for the lifetime of the service, so
/// repeated selections within a session never re-read the backing file.
pub struct QuestionService {
    bank: Arc<dyn QuestionRepository>,
    cache: Mutex<HashMap<Company, Arc<[PracticeQuestion]>>>,
}

impl QuestionService {
    #[must_use]
    pub fn new(bank: Arc<dyn QuestionRepository>) -> Self {
        Self {
            bank,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Cleaned question table for `company`, served from the session cache
    /// after the first load.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError` if the backing table cannot be read.
    pub async fn questions(
        &self,
        company: Company,
    ) -> Result<Arc<[PracticeQuestion]>, QuestionServiceError> {
        if let Some(table) = self.cached(company) {
            debug!(%company, "question table served from cache");
            return Ok(table);
        }

        let loaded = self.bank.load_questions(company).await?;
        debug!(%company, rows = loaded.len(), "question table loaded");
        let table: Arc<[PracticeQuestion]> = loaded.into();

        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(
            cache.entry(company).or_insert_with(|| table),
        ))
    }

    /// Sample up to [`SAMPLE_SIZE`] questions for `company`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError` if the backing table cannot be read.
    pub async fn sample(&self, company: Company) -> Result<SampledBatch, QuestionServiceError> {
        let table = self.questions(company).await?;
        Ok(sample_batch(&table))
    }

    fn cached(&self, company: Company) -> Option<Arc<[PracticeQuestion]>> {
        let cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        cache.get(&company).map(Arc::clone)
    }
}

/// Uniform sample of `min(SAMPLE_SIZE, len)` questions without replacement.
///
/// The batch order follows the shuffle, so it is not stable between calls.
#[must_use]
pub fn sample_batch(table: &[PracticeQuestion]) -> SampledBatch {
    let mut questions: Vec<PracticeQuestion> = table.to_vec();
    let mut rng = rng();
    questions.as_mut_slice().shuffle(&mut rng);
    questions.truncate(SAMPLE_SIZE);
    SampledBatch { questions }
}
