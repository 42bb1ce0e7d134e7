use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{AnswerRecord, Question, QuestionBank, SessionState, SessionSummary};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Quiz session controller: a question bank paired with one user's state.
///
/// The state is rehydrated from the session store on every render cycle and
/// written back after each transition, so this value is short-lived.
#[derive(Clone)]
pub struct QuizSession {
    bank: QuestionBank,
    state: SessionState,
}

impl QuizSession {
    /// Start a fresh session at `started_at`.
    #[must_use]
    pub fn new(bank: QuestionBank, started_at: DateTime<Utc>) -> Self {
        Self::from_state(bank, SessionState::new(started_at))
    }

    #[must_use]
    pub fn from_state(bank: QuestionBank, state: SessionState) -> Self {
        Self { bank, state }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.state.score()
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_completed()
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        self.state.answer_log()
    }

    /// The question awaiting an answer; `None` once completed.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.state.current_question(&self.bank)
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.total_questions();
        let answered = self.state.answer_log().len();
        SessionProgress {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: self.is_complete(),
            fraction: self.progress_fraction(),
        }
    }

    /// `current_index / total_questions`.
    #[must_use]
    pub fn progress_fraction(&self) -> f64 {
        self.state.progress_fraction(self.total_questions())
    }

    /// Cosmetic per-question countdown; never enforced.
    #[must_use]
    pub fn countdown_secs(&self, now: DateTime<Utc>) -> u32 {
        self.state.countdown_remaining(now)
    }

    /// Statistics over the answer log, once completed.
    #[must_use]
    pub fn summary(&self) -> Option<SessionSummary> {
        self.state.summary()
    }

    /// Record `selected` for the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished.
    pub fn submit_answer(
        &mut self,
        selected: &str,
        now: DateTime<Utc>,
    ) -> Result<&AnswerRecord, SessionError> {
        let index = self.state.current_index();
        let record = self.state.submit_answer(&self.bank, selected, now)?;
        tracing::debug!(
            index,
            correct = record.is_correct,
            elapsed_secs = record.elapsed_secs,
            "answer recorded"
        );
        if self.state.is_completed() {
            tracing::info!(
                score = self.state.score(),
                total = self.bank.len(),
                "quiz completed"
            );
        }
        self.state
            .answer_log()
            .last()
            .ok_or(SessionError::Completed)
    }

    /// Start over after completion.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InProgress` unless the session is completed.
    pub fn restart(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        let previous_score = self.state.score();
        self.state.restart(now)?;
        tracing::info!(previous_score, "quiz restarted");
        Ok(())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.bank.len())
            .field("current", &self.state.current_index())
            .field("score", &self.state.score())
            .field("answers_len", &self.state.answer_log().len())
            .field("started_at", &self.state.started_at())
            .field("completed", &self.state.is_completed())
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
