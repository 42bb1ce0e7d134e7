use std::sync::Arc;

use rand::rng;
use rand::seq::SliceRandom;

use quiz_core::model::{Question, QuestionBank};
use storage::default_questions;
use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::sessions::QuizLoopService;

/// Startup knobs for the quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Shuffle the question order once when the bank is loaded.
    pub shuffle_questions: bool,
}

/// Where the active question bank came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    /// Loaded from the configured repository (e.g. a JSON file).
    Loaded(String),
    /// The configured source was unavailable; using built-in questions.
    BuiltIn,
}

impl QuestionSource {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            QuestionSource::Loaded(origin) => format!("Questions from {origin}"),
            QuestionSource::BuiltIn => "Built-in questions".to_string(),
        }
    }
}

/// Assembles app-facing services from storage.
#[derive(Clone)]
pub struct AppServices {
    source: QuestionSource,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    /// Load the question bank and build the quiz loop.
    ///
    /// A missing, unreadable or invalid question source falls back to the
    /// built-in questions; the failure is only logged.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Storage` if a built-in entry is invalid, or
    /// `AppServicesError::Bank` if the resulting bank is empty.
    pub async fn load(
        storage: &Storage,
        clock: Clock,
        options: SessionOptions,
    ) -> Result<Self, AppServicesError> {
        let (mut questions, source) = match storage.questions.load_questions().await {
            Ok(questions) if !questions.is_empty() => {
                let origin = storage.questions.describe();
                tracing::info!(count = questions.len(), source = %origin, "questions loaded");
                (questions, QuestionSource::Loaded(origin))
            }
            Ok(_) => {
                tracing::warn!("question source is empty, using built-in questions");
                (default_questions()?, QuestionSource::BuiltIn)
            }
            Err(err) => {
                tracing::warn!(
                    source = %storage.questions.describe(),
                    error = %err,
                    "question source unavailable, using built-in questions"
                );
                (default_questions()?, QuestionSource::BuiltIn)
            }
        };

        if options.shuffle_questions {
            shuffle(&mut questions);
        }

        let bank = QuestionBank::new(questions)?;
        let quiz_loop = Arc::new(QuizLoopService::new(
            clock,
            bank,
            Arc::clone(&storage.sessions),
        ));

        Ok(Self { source, quiz_loop })
    }

    #[must_use]
    pub fn question_source(&self) -> &QuestionSource {
        &self.source
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

fn shuffle(questions: &mut [Question]) {
    let mut rng = rng();
    questions.shuffle(&mut rng);
}
