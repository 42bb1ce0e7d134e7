use crate::model::answer::AnswerRecord;
use crate::model::question::Category;

/// Correct/total counts for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScore {
    pub category: Category,
    pub correct: u32,
    pub total: u32,
}

/// Aggregate statistics for a completed quiz session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    total: u32,
    correct: u32,
    incorrect: u32,
    mean_elapsed_secs: f64,
    by_category: Vec<CategoryScore>,
}

impl SessionSummary {
    /// Build a summary from an answer log.
    ///
    /// The mean of an empty log is `0.0`. Categories keep first-seen order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_log(log: &[AnswerRecord]) -> Self {
        let mut correct = 0_u32;
        let mut incorrect = 0_u32;
        let mut elapsed_total = 0.0_f64;
        let mut by_category: Vec<CategoryScore> = Vec::new();

        for record in log {
            if record.is_correct {
                correct = correct.saturating_add(1);
            } else {
                incorrect = incorrect.saturating_add(1);
            }
            elapsed_total += record.elapsed_secs.max(0.0);

            if let Some(category) = record.category {
                let idx = match by_category.iter().position(|c| c.category == category) {
                    Some(idx) => idx,
                    None => {
                        by_category.push(CategoryScore {
                            category,
                            correct: 0,
                            total: 0,
                        });
                        by_category.len() - 1
                    }
                };
                let entry = &mut by_category[idx];
                entry.total = entry.total.saturating_add(1);
                if record.is_correct {
                    entry.correct = entry.correct.saturating_add(1);
                }
            }
        }

        let mean_elapsed_secs = if log.is_empty() {
            0.0
        } else {
            elapsed_total / log.len() as f64
        };

        Self {
            total: correct.saturating_add(incorrect),
            correct,
            incorrect,
            mean_elapsed_secs,
            by_category,
        }
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn incorrect(&self) -> u32 {
        self.incorrect
    }

    /// Mean of the per-answer elapsed-time field, in seconds.
    #[must_use]
    pub fn mean_elapsed_secs(&self) -> f64 {
        self.mean_elapsed_secs
    }

    #[must_use]
    pub fn by_category(&self) -> &[CategoryScore] {
        &self.by_category
    }
}
