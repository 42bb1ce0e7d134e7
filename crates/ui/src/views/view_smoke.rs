use std::sync::Arc;

use dioxus::prelude::ReadableExt;

use quiz_core::model::{Question, SessionKey, SessionState};
use storage::repository::{SessionStore, StorageError};

use super::test_harness::{
    setup_view_harness, setup_view_harness_with_questions, setup_view_harness_with_store,
};
use crate::vm::QuizIntent;

fn water_question() -> Question {
    Question::new(
        "¿Cuál es la fórmula del agua?",
        vec!["CO2".to_string(), "H2O".to_string()],
        "H2O",
    )
    .unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    for expected in [
        "Question 1 of 20",
        "¿Qué lenguaje se ejecuta principalmente en navegadores web?",
        "Score: 0/20",
        "Time left: 30s",
        "0% complete",
        "A) Java",
        "C) JavaScript",
        "Answer",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_select_and_submit_advances() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.dispatch(QuizIntent::Select(2));
    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();

    assert!(html.contains("Question 2 of 20"), "missing next question in {html}");
    assert!(html.contains("Score: 1/20"), "missing score in {html}");
    assert!(html.contains("5% complete"), "missing progress in {html}");

    let selected = harness.handles.selected();
    assert_eq!(harness.dom.in_runtime(|| *selected.peek()), 0);

    let stored = harness.quiz_loop.load_or_start(harness.session_key).unwrap();
    assert_eq!(stored.score(), 1);
    assert_eq!(stored.answers()[0].selected, "JavaScript");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_submits_first_option_by_default() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    harness.dispatch(QuizIntent::Submit);

    let stored = harness.quiz_loop.load_or_start(harness.session_key).unwrap();
    assert_eq!(stored.answers()[0].selected, "Java");
    assert!(!stored.answers()[0].is_correct);
    assert_eq!(stored.state().current_index(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_shows_results_and_restarts() {
    let mut harness = setup_view_harness_with_questions(vec![water_question()]);
    harness.rebuild();

    harness.dispatch(QuizIntent::Select(1));
    harness.dispatch(QuizIntent::Submit);
    let html = harness.render();
    for expected in [
        "Quiz complete!",
        "Final score: 1/1",
        "Correct: 1",
        "Incorrect: 0",
        "Average time per answer: 0.0 seconds",
        "Restart Quiz",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Time left"), "countdown shown after completion: {html}");

    // Submitting on the results screen is a no-op.
    harness.dispatch(QuizIntent::Submit);
    assert!(harness.render().contains("Final score: 1/1"));

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Question 1 of 1"), "missing restarted question in {html}");
    assert!(html.contains("Score: 0/1"), "missing reset score in {html}");
}

struct FailingStore;

impl SessionStore for FailingStore {
    fn get(&self, _key: SessionKey) -> Result<Option<SessionState>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    fn put(&self, _key: SessionKey, _state: SessionState) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    fn remove(&self, _key: SessionKey) -> Result<Option<SessionState>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness_with_store(vec![water_question()], Arc::new(FailingStore));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
    assert!(!html.contains("Question 1 of 1"), "question rendered despite error: {html}");
}
