use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::answer::AnswerRecord;
use crate::model::bank::QuestionBank;
use crate::model::question::Question;
use crate::model::summary::SessionSummary;
use crate::time::elapsed_secs;

/// Length of one cosmetic countdown cycle shown next to the question.
pub const COUNTDOWN_CYCLE_SECS: u32 = 30;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionStateError {
    #[error("session already completed")]
    Completed,

    #[error("session is still in progress")]
    InProgress,

    #[error("question index {index} is outside a bank of {len} questions")]
    IndexOutOfRange { index: usize, len: usize },
}

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    InProgress { index: usize },
    Completed,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Mutable bookkeeping for one run through a question bank.
///
/// Invariants:
/// - `score` equals the number of correct records in `answer_log`.
/// - while in progress, `answer_log.len() == current_index`; once completed it
///   equals the bank length and `current_index` stays on the last question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    score: u32,
    current_index: usize,
    started_at: DateTime<Utc>,
    answer_log: Vec<AnswerRecord>,
    completed: bool,
}

impl SessionState {
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            score: 0,
            current_index: 0,
            started_at,
            answer_log: Vec::new(),
            completed: false,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn answer_log(&self) -> &[AnswerRecord] {
        &self.answer_log
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.completed {
            SessionPhase::Completed
        } else {
            SessionPhase::InProgress {
                index: self.current_index,
            }
        }
    }

    /// The question waiting for an answer, or `None` once completed.
    #[must_use]
    pub fn current_question<'a>(&self, bank: &'a QuestionBank) -> Option<&'a Question> {
        if self.completed {
            return None;
        }
        bank.get(self.current_index)
    }

    /// Records `selected` against the current question and advances.
    ///
    /// Any string is accepted; a value that is not the correct option is
    /// scored as incorrect.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::Completed` if the session already finished.
    /// Returns `SessionStateError::IndexOutOfRange` if the state does not fit `bank`.
    pub fn submit_answer(
        &mut self,
        bank: &QuestionBank,
        selected: &str,
        now: DateTime<Utc>,
    ) -> Result<&AnswerRecord, SessionStateError> {
        if self.completed {
            return Err(SessionStateError::Completed);
        }
        let question = bank
            .get(self.current_index)
            .ok_or(SessionStateError::IndexOutOfRange {
                index: self.current_index,
                len: bank.len(),
            })?;

        let record = AnswerRecord::new(question, selected, elapsed_secs(self.started_at, now));
        if record.is_correct {
            self.score = self.score.saturating_add(1);
        }
        self.answer_log.push(record);

        if self.current_index >= bank.last_index() {
            self.completed = true;
        } else {
            self.current_index += 1;
        }

        self.answer_log.last().ok_or(SessionStateError::Completed)
    }

    /// Resets a finished session so it starts over at `now`.
    ///
    /// # Errors
    ///
    /// Returns `SessionStateError::InProgress` unless the session is completed.
    pub fn restart(&mut self, now: DateTime<Utc>) -> Result<(), SessionStateError> {
        if !self.completed {
            return Err(SessionStateError::InProgress);
        }
        *self = Self::new(now);
        Ok(())
    }

    /// `current_index / total`, for the progress bar.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_fraction(&self, total: usize) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (self.current_index as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Seconds left in the current display cycle: `30 - (elapsed mod 30)`,
    /// truncated after the subtraction. Shows 30 only on exact cycle boundaries.
    ///
    /// Purely informational; nothing happens when it reaches zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn countdown_remaining(&self, now: DateTime<Utc>) -> u32 {
        let elapsed = elapsed_secs(self.started_at, now);
        let cycle = f64::from(COUNTDOWN_CYCLE_SECS);
        (cycle - elapsed % cycle).max(0.0) as u32
    }

    /// Statistics for a completed session.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        self.completed
            .then(|| SessionSummary::from_log(&self.answer_log))
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
