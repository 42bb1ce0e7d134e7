use std::sync::Arc;

use chrono::{DateTime, Utc};
use quiz_core::model::{QuestionBank, SessionKey, SessionState};
use storage::repository::SessionStore;

use super::service::QuizSession;
use crate::Clock;
use crate::error::SessionError;

/// User actions the presentation layer can dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizAction {
    /// Confirm the given option (any string is accepted).
    Submit(String),
    /// Start over; only valid once the quiz is completed.
    Restart,
}

/// Pure reducer: applies `action` to `state` and returns the next state.
///
/// # Errors
///
/// Returns `SessionError::Completed` for a submit after completion and
/// `SessionError::InProgress` for a restart before completion.
pub fn transition(
    bank: &QuestionBank,
    state: SessionState,
    action: &QuizAction,
    now: DateTime<Utc>,
) -> Result<SessionState, SessionError> {
    let mut session = QuizSession::from_state(bank.clone(), state);
    match action {
        QuizAction::Submit(selected) => {
            session.submit_answer(selected, now)?;
        }
        QuizAction::Restart => session.restart(now)?,
    }
    Ok(session.into_state())
}

/// Drives quiz sessions keyed by user session, backed by a session store.
#[derive(Clone)]
pub struct QuizLoopService {
    clock: Clock,
    bank: QuestionBank,
    sessions: Arc<dyn SessionStore>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, bank: QuestionBank, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            clock,
            bank,
            sessions,
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Rehydrate the session for `key`, creating it on first load.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the session store fails.
    pub fn load_or_start(&self, key: SessionKey) -> Result<QuizSession, SessionError> {
        if let Some(state) = self.sessions.get(key)? {
            return Ok(QuizSession::from_state(self.bank.clone(), state));
        }
        let state = SessionState::new(self.clock.now());
        self.sessions.put(key, state.clone())?;
        tracing::info!(%key, questions = self.bank.len(), "quiz session started");
        Ok(QuizSession::from_state(self.bank.clone(), state))
    }

    /// Apply `action` to the session for `key` and store the result.
    ///
    /// The stored state is left untouched when the transition fails.
    ///
    /// # Errors
    ///
    /// Returns the transition error, or `SessionError::Storage` on store failures.
    pub fn dispatch(&self, key: SessionKey, action: QuizAction) -> Result<QuizSession, SessionError> {
        let current = self.load_or_start(key)?.into_state();
        let next = transition(&self.bank, current, &action, self.clock.now()).inspect_err(
            |err| tracing::warn!(%key, ?action, error = %err, "quiz action rejected"),
        )?;
        self.sessions.put(key, next.clone())?;
        Ok(QuizSession::from_state(self.bank.clone(), next))
    }

    /// Forget the session for `key`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Storage` if the session store fails.
    pub fn end_session(&self, key: SessionKey) -> Result<bool, SessionError> {
        Ok(self.sessions.remove(key)?.is_some())
    }
}
