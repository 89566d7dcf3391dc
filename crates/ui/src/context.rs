use std::sync::Arc;

use services::{QuestionService, TutorService};

/// What the composition root (e.g. `crates/app`) hands to the UI.
pub trait UiApp: Send + Sync {
    fn question_service(&self) -> Arc<QuestionService>;
    fn tutor_service(&self) -> Arc<TutorService>;
}

/// Session-scoped context owned by the view tree.
///
/// Everything mutable the views track (cached tables inside the question
/// service, the current batch, per-item panel flags) hangs off this context
/// or component signals, so session state dies with the session instead of
/// living in process-wide globals.
#[derive(Clone)]
pub struct AppContext {
    question_service: Arc<QuestionService>,
    tutor_service: Arc<TutorService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_service: app.question_service(),
            tutor_service: app.tutor_service(),
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

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
