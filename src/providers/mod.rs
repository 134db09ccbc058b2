//! Completion service backends

pub mod openai;

// Re-export for convenience
pub use openai::OpenAiClient;
