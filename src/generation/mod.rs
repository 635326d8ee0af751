mod engine;
mod error;
mod prompt;

pub(crate) use engine::Engine;
pub(crate) use error::GenerationError;
pub(crate) use prompt::{SystemPrompt, DEFAULT_SYSTEM_PROMPT};
