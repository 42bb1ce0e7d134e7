use std::sync::Arc;

use thiserror::Error;

use crate::model::question::Question;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is empty")]
    Empty,
}

/// The ordered question sequence a session walks through.
///
/// Cheap to clone; the questions are shared behind an `Arc` and never mutated
/// after the bank is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
}

impl QuestionBank {
    /// # Errors
    ///
    /// Returns `BankError::Empty` when no questions are given.
    pub fn new(questions: Vec<Question>) -> Result<Self, BankError> {
        if questions.is_empty() {
            return Err(BankError::Empty);
        }
        Ok(Self {
            questions: questions.into(),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(prompt: &str) -> Question {
        Question::new(prompt, vec!["a".into(), "b".into()], "a").unwrap()
    }

    #[test]
    fn empty_bank_is_rejected() {
        assert_eq!(QuestionBank::new(Vec::new()).unwrap_err(), BankError::Empty);
    }

    #[test]
    fn bank_preserves_order() {
        let bank = QuestionBank::new(vec![question("one"), question("two")]).unwrap();
        assert_eq!(bank.len(), 2);
        assert_eq!(bank.last_index(), 1);
        assert_eq!(bank.get(0).map(Question::prompt), Some("one"));
        assert_eq!(bank.get(1).map(Question::prompt), Some("two"));
        assert!(bank.get(2).is_none());
        let prompts: Vec<_> = bank.iter().map(Question::prompt).collect();
        assert_eq!(prompts, ["one", "two"]);
    }

    #[test]
    fn clones_share_questions() {
        let bank = QuestionBank::new(vec![question("one")]).unwrap();
        let clone = bank.clone();
        assert!(std::ptr::eq(bank.questions(), clone.questions()));
    }
}
