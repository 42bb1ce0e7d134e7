use std::sync::Arc;

use quiz_core::model::SessionKey;
use services::{QuestionSource, QuizLoopService};

pub trait UiApp: Send + Sync {
    /// Key of the user session this window drives.
    fn session_key(&self) -> SessionKey;
    fn question_source(&self) -> QuestionSource;

    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    session_key: SessionKey,
    source_label: String,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            session_key: app.session_key(),
            source_label: app.question_source().label(),
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn session_key(&self) -> SessionKey {
        self.session_key
    }

    #[must_use]
    pub fn source_label(&self) -> &str {
        &self.source_label
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
