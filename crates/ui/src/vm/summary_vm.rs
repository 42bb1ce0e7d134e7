use quiz_core::model::{AnswerRecord, SessionSummary};

use crate::vm::time_fmt::{format_seconds, percent};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryRowVm {
    pub label: &'static str,
    pub correct: u32,
    pub total: u32,
    pub percent: u32,
}

impl CategoryRowVm {
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{}/{}", self.correct, self.total)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRowVm {
    pub number: usize,
    pub prompt: String,
    pub selected: String,
    pub correct_answer: String,
    pub is_correct: bool,
    pub elapsed_label: String,
}

/// Results panel shown once every question has been answered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SummaryVm {
    pub total: u32,
    pub correct: u32,
    pub incorrect: u32,
    pub percent: u32,
    pub mean_time_label: String,
    pub categories: Vec<CategoryRowVm>,
    pub answers: Vec<AnswerRowVm>,
}

impl SummaryVm {
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Final score: {}/{}", self.correct, self.total)
    }

    #[must_use]
    pub fn correct_label(&self) -> String {
        format!("Correct: {}", self.correct)
    }

    #[must_use]
    pub fn incorrect_label(&self) -> String {
        format!("Incorrect: {}", self.incorrect)
    }

    /// Share of correct answers, for the results bar.
    #[must_use]
    pub fn correct_percent(&self) -> u32 {
        self.percent
    }

    #[must_use]
    pub fn incorrect_percent(&self) -> u32 {
        if self.total == 0 { 0 } else { 100 - self.percent }
    }
}

#[must_use]
pub fn map_summary(summary: &SessionSummary, log: &[AnswerRecord]) -> SummaryVm {
    let categories = summary
        .by_category()
        .iter()
        .map(|score| CategoryRowVm {
            label: score.category.label(),
            correct: score.correct,
            total: score.total,
            percent: percent(score.correct, score.total),
        })
        .collect();

    let answers = log
        .iter()
        .enumerate()
        .map(|(i, record)| AnswerRowVm {
            number: i + 1,
            prompt: record.prompt.clone(),
            selected: if record.selected.is_empty() {
                "(no answer)".to_string()
            } else {
                record.selected.clone()
            },
            correct_answer: record.correct_answer.clone(),
            is_correct: record.is_correct,
            elapsed_label: format_seconds(record.elapsed_secs),
        })
        .collect();

    SummaryVm {
        total: summary.total(),
        correct: summary.correct(),
        incorrect: summary.incorrect(),
        percent: percent(summary.correct(), summary.total()),
        mean_time_label: format_seconds(summary.mean_elapsed_secs()),
        categories,
        answers,
    }
}
