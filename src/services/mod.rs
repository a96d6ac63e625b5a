pub mod classification_service;
pub mod engine;

pub use classification_service::{ClassificationService, QuizRequest};
pub use engine::{StyleReport, UndertoneEngine};
