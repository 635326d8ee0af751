use async_trait::async_trait;

use super::{LanguageServiceArguments, LlmClientError};

#[async_trait]
pub(crate) trait LlmClientBackend: Send + Sync {
    async fn get_response(
        &self,
        arguments: LanguageServiceArguments,
    ) -> Result<String, LlmClientError>;
}

/// Builds a backend on first use. Credentials are resolved here, so a
/// missing key surfaces as a construction failure rather than a call failure.
pub(crate) trait LlmClientConnector: Send + Sync {
    fn connect(&self) -> Result<Box<dyn LlmClientBackend>, LlmClientError>;
}
