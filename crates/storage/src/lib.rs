#![forbid(unsafe_code)]

pub mod defaults;
pub mod json;
pub mod repository;

pub use defaults::default_questions;
pub use json::JsonFileRepository;
pub use repository::{
    InMemoryRepository, InMemorySessionStore, QuestionRecord, QuestionRepository, SessionStore,
    Storage, StorageError,
};
