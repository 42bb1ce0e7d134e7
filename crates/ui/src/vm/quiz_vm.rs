use chrono::{DateTime, Utc};
use quiz_core::model::{MAX_OPTIONS, Question};
use services::QuizSession;

use crate::vm::summary_vm::{SummaryVm, map_summary};
use crate::vm::time_fmt::format_countdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(usize),
    Submit,
    Restart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub letter: char,
    pub text: String,
}

impl OptionVm {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}) {}", self.letter, self.text)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub category: Option<&'static str>,
    pub options: Vec<OptionVm>,
}

impl QuestionVm {
    fn from_question(question: &Question, index: usize, total: usize) -> Self {
        let options = question
            .options()
            .iter()
            .enumerate()
            .map(|(index, text)| OptionVm {
                index,
                letter: option_letter(index),
                text: text.clone(),
            })
            .collect();
        Self {
            number: index + 1,
            total,
            prompt: question.prompt().to_string(),
            category: question.category().map(|category| category.label()),
            options,
        }
    }

    #[must_use]
    pub fn heading(&self) -> String {
        format!("Question {} of {}", self.number, self.total)
    }

    /// Text submitted for the option at `index`.
    #[must_use]
    pub fn option_text(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(|option| option.text.as_str())
    }

    /// Index of the option bound to keyboard `key` (`a`/`A` or `1` for the first).
    #[must_use]
    pub fn option_for_key(&self, key: &str) -> Option<usize> {
        let mut chars = key.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let index = if ch.is_ascii_alphabetic() {
            usize::from(ch.to_ascii_uppercase() as u8 - b'A')
        } else {
            usize::try_from(ch.to_digit(10)?.checked_sub(1)?).ok()?
        };
        (index < self.options.len()).then_some(index)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Question(QuestionVm),
    Results(SummaryVm),
}

/// Everything the quiz page displays, derived from one session snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizVm {
    pub score: u32,
    pub total: usize,
    pub progress_percent: u32,
    pub countdown_secs: u32,
    pub screen: QuizScreen,
}

impl QuizVm {
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {}/{}", self.score, self.total)
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{}% complete", self.progress_percent)
    }

    #[must_use]
    pub fn countdown_label(&self) -> String {
        format_countdown(self.countdown_secs)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.screen, QuizScreen::Results(_))
    }

    #[must_use]
    pub fn question(&self) -> Option<&QuestionVm> {
        match &self.screen {
            QuizScreen::Question(question) => Some(question),
            QuizScreen::Results(_) => None,
        }
    }
}

/// Render a session snapshot. Pure: the same session and `now` give the same view.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render(session: &QuizSession, now: DateTime<Utc>) -> QuizVm {
    let total = session.total_questions();
    let screen = match session.current_question() {
        Some(question) => QuizScreen::Question(QuestionVm::from_question(
            question,
            session.state().current_index(),
            total,
        )),
        None => QuizScreen::Results(
            session
                .summary()
                .map_or_else(SummaryVm::default, |summary| {
                    map_summary(&summary, session.answers())
                }),
        ),
    };
    // Index stays on the last question once completed.
    let progress_percent = if session.is_complete() {
        100
    } else {
        (session.progress_fraction().clamp(0.0, 1.0) * 100.0).round() as u32
    };

    QuizVm {
        score: session.score(),
        total,
        progress_percent,
        countdown_secs: session.countdown_secs(now),
        screen,
    }
}

// `Question::new` caps options at `MAX_OPTIONS`, so every index has a letter.
fn option_letter(index: usize) -> char {
    u8::try_from(index)
        .ok()
        .filter(|i| usize::from(*i) < MAX_OPTIONS)
        .map_or('?', |i| char::from(b'A' + i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use quiz_core::model::QuestionBank;
    use quiz_core::time::fixed_now;
    use storage::default_questions;

    fn session() -> QuizSession {
        QuizSession::new(QuestionBank::new(default_questions().unwrap()).unwrap(), fixed_now())
    }

    #[test]
    fn renders_first_question() {
        let vm = render(&session(), fixed_now());

        assert_eq!(vm.score_label(), "Score: 0/20");
        assert_eq!(vm.progress_label(), "0% complete");
        assert_eq!(vm.countdown_label(), "Time left: 30s");
        let question = vm.question().unwrap();
        assert_eq!(question.heading(), "Question 1 of 20");
        assert_eq!(question.category, Some("Programming"));
        assert_eq!(question.options[2].label(), "C) JavaScript");
        assert_eq!(question.option_text(2), Some("JavaScript"));
    }

    #[test]
    fn render_tracks_progress_and_countdown() {
        let mut session = session();
        session.submit_answer("JavaScript", fixed_now()).unwrap();
        session.submit_answer("Python", fixed_now()).unwrap();

        let vm = render(&session, fixed_now() + Duration::seconds(45));
        assert_eq!(vm.score_label(), "Score: 1/20");
        assert_eq!(vm.progress_label(), "10% complete");
        assert_eq!(vm.countdown_secs, 15);
        assert_eq!(vm.question().unwrap().heading(), "Question 3 of 20");
    }

    #[test]
    fn render_is_pure() {
        let session = session();
        let now = fixed_now() + Duration::seconds(7);
        assert_eq!(render(&session, now), render(&session, now));
    }

    #[test]
    fn completed_session_renders_results() {
        let bank = QuestionBank::new(default_questions().unwrap().into_iter().take(2).collect()).unwrap();
        let mut session = QuizSession::new(bank, fixed_now());
        session.submit_answer("JavaScript", fixed_now()).unwrap();
        session.submit_answer("", fixed_now()).unwrap();

        let vm = render(&session, fixed_now());
        assert!(vm.is_complete());
        assert_eq!(vm.progress_label(), "100% complete");
        let QuizScreen::Results(summary) = vm.screen else {
            panic!("expected results");
        };
        assert_eq!(summary.score_label(), "Final score: 1/2");
        assert_eq!(summary.answers.len(), 2);
    }

    #[test]
    fn keys_map_to_options() {
        let vm = render(&session(), fixed_now());
        let question = vm.question().unwrap();
        assert_eq!(question.option_for_key("a"), Some(0));
        assert_eq!(question.option_for_key("D"), Some(3));
        assert_eq!(question.option_for_key("2"), Some(1));
        assert_eq!(question.option_for_key("e"), None);
        assert_eq!(question.option_for_key("0"), None);
        assert_eq!(question.option_for_key("Enter"), None);
    }

    #[test]
    fn letters_continue_past_d() {
        let options: Vec<String> = (1..=MAX_OPTIONS).map(|n| format!("opt{n}")).collect();
        let question = Question::new("Q", options, "opt1").unwrap();
        let bank = QuestionBank::new(vec![question]).unwrap();
        let vm = render(&QuizSession::new(bank, fixed_now()), fixed_now());

        let question = vm.question().unwrap();
        assert_eq!(question.options[4].label(), "E) opt5");
        assert_eq!(question.options[MAX_OPTIONS - 1].letter, 'Z');
        assert_eq!(question.option_for_key("z"), Some(MAX_OPTIONS - 1));
    }
}
