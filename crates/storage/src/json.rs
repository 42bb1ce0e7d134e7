use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use quiz_core::model::Question;

use crate::repository::{QuestionRecord, QuestionRepository, StorageError, questions_from_records};

/// Question source backed by a JSON array of question records.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Parse a JSON question list.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON and
/// `StorageError::InvalidQuestion`/`StorageError::Empty` for bad content.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, StorageError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(raw).map_err(|e| StorageError::Serialization(e.to_string()))?;
    questions_from_records(records)
}

#[async_trait]
impl QuestionRepository for JsonFileRepository {
    async fn load_questions(&self) -> Result<Vec<Question>, StorageError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => StorageError::NotFound(self.path.display().to_string()),
                _ => StorageError::Io(format!("{}: {e}", self.path.display())),
            })?;
        let questions = parse_questions(&raw)?;
        tracing::debug!(
            path = %self.path.display(),
            count = questions.len(),
            "loaded questions from file"
        );
        Ok(questions)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
