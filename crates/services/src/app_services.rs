use std::path::PathBuf;
use std::sync::Arc;

use storage::Storage;

use crate::question_service::QuestionService;
use crate::tutor_service::TutorService;

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    question_service: Arc<QuestionService>,
    tutor_service: Arc<TutorService>,
}

impl AppServices {
    /// Build services over the CSV tables in `data_dir`, with the tutor
    /// configured from the environment.
    #[must_use]
    pub fn new_csv(data_dir: impl Into<PathBuf>) -> Self {
        let storage = Storage::csv(data_dir);
        Self::new(
            Arc::new(QuestionService::new(storage.questions)),
            Arc::new(TutorService::from_env()),
        )
    }

    #[must_use]
    pub fn new(question_service: Arc<QuestionService>, tutor_service: Arc<TutorService>) -> Self {
        Self {
            question_service,
            tutor_service,
        }
    }

    #[must_use]
    pub fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }

    #[must_use]
    pub fn tutor_service(&self) -> Arc<TutorService> {
        Arc::clone(&self.tutor_service)
    }
}
