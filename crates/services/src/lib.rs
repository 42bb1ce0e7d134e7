#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod sessions;

pub use quiz_core::Clock;

pub use app_services::{AppServices, QuestionSource, SessionOptions};
pub use error::{AppServicesError, SessionError};

pub use sessions::{QuizAction, QuizLoopService, QuizSession, SessionProgress, transition};
