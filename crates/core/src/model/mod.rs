mod answer;
mod bank;
mod ids;
mod question;
mod session;
mod summary;

pub use ids::{ParseSessionKeyError, SessionKey};

pub use answer::AnswerRecord;
pub use bank::{BankError, QuestionBank};
pub use question::{Category, MAX_OPTIONS, Question, QuestionError};
pub use session::{COUNTDOWN_CYCLE_SECS, SessionPhase, SessionState, SessionStateError};
pub use summary::{CategoryScore, SessionSummary};
