use serde::{Deserialize, Serialize};

use crate::model::question::{Category, Question};

/// Log entry written when the user submits a choice for one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub prompt: String,
    pub selected: String,
    pub correct_answer: String,
    pub is_correct: bool,
    /// Seconds since the session started, at submission time.
    pub elapsed_secs: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(question: &Question, selected: impl Into<String>, elapsed_secs: f64) -> Self {
        let selected = selected.into();
        Self {
            prompt: question.prompt().to_string(),
            is_correct: question.is_correct(&selected),
            selected,
            correct_answer: question.correct_answer().to_string(),
            elapsed_secs: elapsed_secs.max(0.0),
            category: question.category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_derives_correctness_and_clamps_time() {
        let q = Question::new("Q", vec!["yes".into(), "no".into()], "yes")
            .unwrap()
            .with_category(Category::History);

        let right = AnswerRecord::new(&q, "yes", 3.5);
        assert!(right.is_correct);
        assert_eq!(right.correct_answer, "yes");
        assert_eq!(right.category, Some(Category::History));

        let wrong = AnswerRecord::new(&q, "maybe", -1.0);
        assert!(!wrong.is_correct);
        assert_eq!(wrong.selected, "maybe");
        assert_eq!(wrong.elapsed_secs, 0.0);
    }
}
