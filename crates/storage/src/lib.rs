#![forbid(unsafe_code)]

pub mod csv;
pub mod repository;

pub use crate::csv::CsvQuestionBank;
pub use repository::{InMemoryQuestionBank, QuestionRepository, Storage, StorageError};
