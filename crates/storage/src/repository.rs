use async_trait::async_trait;
use quiz_core::model::{Category, Question, QuestionError, SessionKey, SessionState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::defaults::default_questions;
use crate::json::JsonFileRepository;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("i/o error: {0}")]
    Io(String),

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("invalid question #{index}: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },

    #[error("question source is empty")]
    Empty,
}

/// On-disk shape of a question.
///
/// Mirrors the domain `Question` so adapters can (de)serialize without
/// leaking serde into the domain layer. The Spanish keys used by older
/// question files are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(alias = "pregunta")]
    pub prompt: String,
    #[serde(alias = "opciones")]
    pub options: Vec<String>,
    #[serde(alias = "respuesta_correcta")]
    pub correct_answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            prompt: question.prompt().to_string(),
            options: question.options().to_vec(),
            correct_answer: question.correct_answer().to_string(),
            category: question.category(),
        }
    }

    /// Convert the record back into a validated `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the record breaks a question invariant.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        let question = Question::new(self.prompt, self.options, self.correct_answer)?;
        Ok(match self.category {
            Some(category) => question.with_category(category),
            None => question,
        })
    }
}

/// Converts a list of records, reporting the first invalid entry by position.
///
/// # Errors
///
/// Returns `StorageError::InvalidQuestion` for the first record that fails
/// validation, or `StorageError::Empty` if there are no records.
pub fn questions_from_records(records: Vec<QuestionRecord>) -> Result<Vec<Question>, StorageError> {
    if records.is_empty() {
        return Err(StorageError::Empty);
    }
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            record
                .into_question()
                .map_err(|source| StorageError::InvalidQuestion { index, source })
        })
        .collect()
}

/// Source of the question sequence, read once at startup.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Load every question in presentation order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source is missing, unreadable or invalid.
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError>;

    /// Human-readable description of where questions come from.
    fn describe(&self) -> String;
}

/// Per-user key-value store for session state, kept across render cycles.
pub trait SessionStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store is unusable.
    fn get(&self, key: SessionKey) -> Result<Option<SessionState>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store is unusable.
    fn put(&self, key: SessionKey, state: SessionState) -> Result<(), StorageError>;

    /// Remove the state for `key`, returning it if present.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the store is unusable.
    fn remove(&self, key: SessionKey) -> Result<Option<SessionState>, StorageError>;
}

/// In-memory question source; defaults to the built-in bank.
#[derive(Clone)]
pub struct InMemoryRepository {
    // `None` serves the built-in bank.
    questions: Option<Arc<Vec<Question>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Repository serving the built-in questions.
    #[must_use]
    pub fn new() -> Self {
        Self { questions: None }
    }

    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Some(Arc::new(questions)),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        let questions = match &self.questions {
            Some(questions) => questions.as_ref().clone(),
            None => default_questions()?,
        };
        if questions.is_empty() {
            return Err(StorageError::Empty);
        }
        Ok(questions)
    }

    fn describe(&self) -> String {
        "built-in questions".to_string()
    }
}

/// Session store backed by a mutex-guarded map.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<Mutex<HashMap<SessionKey, SessionState>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

}

impl SessionStore for InMemorySessionStore {
    fn get(&self, key: SessionKey) -> Result<Option<SessionState>, StorageError> {
        let guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(&key).cloned())
    }

    fn put(&self, key: SessionKey, state: SessionState) -> Result<(), StorageError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key, state);
        Ok(())
    }

    fn remove(&self, key: SessionKey) -> Result<Option<SessionState>, StorageError> {
        let mut guard = self
            .sessions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.remove(&key))
    }
}

/// Aggregates the question source and session store behind trait objects.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
    pub sessions: Arc<dyn SessionStore>,
}

impl Storage {
    /// Built-in questions and an in-memory session store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            questions: Arc::new(InMemoryRepository::new()),
            sessions: Arc::new(InMemorySessionStore::new()),
        }
    }

    /// Questions read from a JSON file and an in-memory session store.
    #[must_use]
    pub fn with_questions_file(path: impl Into<PathBuf>) -> Self {
        Self {
            questions: Arc::new(JsonFileRepository::new(path)),
            sessions: Arc::new(InMemorySessionStore::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::QuestionBank;
    use quiz_core::time::fixed_now;

    #[tokio::test]
    async fn in_memory_repository_serves_defaults() {
        let repo = InMemoryRepository::new();
        let questions = repo.load_questions().await.unwrap();
        assert_eq!(questions.len(), 20);
        assert_eq!(repo.describe(), "built-in questions");
    }

    #[tokio::test]
    async fn empty_in_memory_repository_errors() {
        let repo = InMemoryRepository::with_questions(Vec::new());
        let err = repo.load_questions().await.unwrap_err();
        assert!(matches!(err, StorageError::Empty));
    }

    #[test]
    fn session_store_round_trips_state() {
        let store = InMemorySessionStore::new();
        let key = SessionKey::generate();
        assert!(store.get(key).unwrap().is_none());

        let bank = QuestionBank::new(default_questions().unwrap()).unwrap();
        let mut state = SessionState::new(fixed_now());
        state.submit_answer(&bank, "JavaScript", fixed_now()).unwrap();
        store.put(key, state.clone()).unwrap();

        assert_eq!(store.get(key).unwrap(), Some(state.clone()));
        assert_eq!(store.remove(key).unwrap(), Some(state));
        assert!(store.get(key).unwrap().is_none());
    }

    #[test]
    fn sessions_are_isolated_by_key() {
        let store = InMemorySessionStore::new();
        let first = SessionKey::generate();
        let second = SessionKey::generate();
        let bank = QuestionBank::new(default_questions().unwrap()).unwrap();

        let mut answered = SessionState::new(fixed_now());
        answered.submit_answer(&bank, "Java", fixed_now()).unwrap();
        store.put(first, answered).unwrap();
        store.put(second, SessionState::new(fixed_now())).unwrap();

        assert_eq!(store.get(first).unwrap().unwrap().current_index(), 1);
        assert_eq!(store.get(second).unwrap().unwrap().current_index(), 0);
    }

    #[test]
    fn records_accept_spanish_keys() {
        let json = r#"[{"pregunta": "¿2+2?", "opciones": ["3", "4"], "respuesta_correcta": "4"}]"#;
        let records: Vec<QuestionRecord> = serde_json::from_str(json).unwrap();
        let questions = questions_from_records(records).unwrap();
        assert_eq!(questions[0].prompt(), "¿2+2?");
        assert_eq!(questions[0].correct_answer(), "4");
        assert_eq!(questions[0].category(), None);
    }

    #[test]
    fn invalid_record_reports_its_position() {
        let records = vec![
            QuestionRecord {
                prompt: "ok".into(),
                options: vec!["a".into(), "b".into()],
                correct_answer: "a".into(),
                category: Some(Category::Science),
            },
            QuestionRecord {
                prompt: "bad".into(),
                options: vec!["a".into(), "b".into()],
                correct_answer: "z".into(),
                category: None,
            },
        ];
        let err = questions_from_records(records).unwrap_err();
        assert!(matches!(err, StorageError::InvalidQuestion { index: 1, .. }));
    }

    #[test]
    fn record_round_trips_question() {
        let question = default_questions().unwrap().remove(5);
        let record = QuestionRecord::from_question(&question);
        assert_eq!(record.clone().into_question().unwrap(), question);
        assert_eq!(record.category, Some(Category::Science));
    }
}
