use std::fmt::{Display, Formatter, Result};

use crate::llm_client::LlmClientError;

#[derive(Debug)]
pub(crate) enum GenerationError {
    ClientInit(LlmClientError),
    Service(LlmClientError),
    Prompt(tera::Error),
}

impl From<tera::Error> for GenerationError {
    fn from(value: tera::Error) -> Self {
        Self::Prompt(value)
    }
}

impl std::error::Error for GenerationError {}

impl Display for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            GenerationError::ClientInit(err) => {
                write!(f, "Failed to initialize language model client: {err}")
            }
            GenerationError::Service(err) => {
                write!(f, "An error occurred with the AI service: {err}")
            }
            GenerationError::Prompt(err) => write!(f, "Failed to render system prompt: {err}"),
        }
    }
}
