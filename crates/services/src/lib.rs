#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod question_service;
pub mod tutor_service;

pub use app_services::AppServices;
pub use error::{QuestionServiceError, TutorError};
pub use question_service::{QuestionService, SAMPLE_SIZE, SampledBatch, sample_batch};
pub use tutor_service::{
    GenerationOptions, HttpModelClient, ModelClient, TutorConfig, TutorService,
};
