pub mod engine;
pub mod model;

pub use engine::TriageEngine;
pub use model::{GeminiClient, LanguageModel};
