mod arguments;
mod client;
mod error;
mod openai;
mod protocol;

pub(crate) use arguments::LanguageServiceArguments;
pub(crate) use client::{LlmClientBackend, LlmClientConnector};
pub(crate) use error::LlmClientError;
pub(crate) use openai::OpenAiConnector;
pub(crate) use protocol::{LlmMessage, LlmRole};
