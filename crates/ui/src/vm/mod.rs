mod quiz_vm;
mod summary_vm;
pub(crate) mod time_fmt;

pub use quiz_vm::{OptionVm, QuestionVm, QuizIntent, QuizScreen, QuizVm, render};
pub use summary_vm::{AnswerRowVm, CategoryRowVm, SummaryVm, map_summary};
