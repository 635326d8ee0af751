use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use url::Url;

use super::{
    LanguageServiceArguments, LlmClientBackend, LlmClientConnector, LlmClientError, LlmMessage,
    LlmRole,
};

pub(crate) struct OpenAiChatClient {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl OpenAiChatClient {
    pub(crate) fn new(api_base: &Url, api_key: String, model_name: String) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(api_base.as_str().trim_end_matches('/'))
            .with_api_key(api_key);
        let client = Client::with_config(openai_config).with_backoff(Self::single_attempt());
        Self { client, model_name }
    }

    /// Rate limits and server errors surface on the first failure.
    fn single_attempt() -> ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_max_elapsed_time(Some(Duration::ZERO))
            .build()
    }

    fn request_message(
        LlmMessage { role, content }: LlmMessage,
    ) -> Result<ChatCompletionRequestMessage, LlmClientError> {
        let message = match role {
            LlmRole::System => ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(content)
                    .build()?,
            ),
            LlmRole::User => ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(content)
                    .build()?,
            ),
        };
        Ok(message)
    }
}

#[async_trait]
impl LlmClientBackend for OpenAiChatClient {
    async fn get_response(
        &self,
        arguments: LanguageServiceArguments,
    ) -> Result<String, LlmClientError> {
        let messages = arguments
            .messages
            .into_iter()
            .map(Self::request_message)
            .collect::<Result<Vec<_>, _>>()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(arguments.temperature)
            .max_tokens(arguments.max_tokens)
            .n(1)
            .build()?;

        let response = self.client.chat().create(request).await?;

        let response = response
            .choices
            .into_iter()
            .next()
            .ok_or(LlmClientError::EmptyResponse)?
            .message
            .content
            .ok_or(LlmClientError::EmptyResponse)?;
        Ok(response)
    }
}

/// Connects to any OpenAI compatible chat endpoint, reading the API key from
/// the environment at connection time.
#[derive(Debug, Clone)]
pub(crate) struct OpenAiConnector {
    api_base: Url,
    api_key_var: String,
    model_name: String,
}

impl OpenAiConnector {
    pub(crate) fn new(api_base: Url, api_key_var: String, model_name: String) -> Self {
        Self {
            api_base,
            api_key_var,
            model_name,
        }
    }

    fn api_key(&self) -> Result<String, LlmClientError> {
        std::env::var(&self.api_key_var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| LlmClientError::MissingCredential(self.api_key_var.clone()))
    }
}

impl LlmClientConnector for OpenAiConnector {
    fn connect(&self) -> Result<Box<dyn LlmClientBackend>, LlmClientError> {
        let client =
            OpenAiChatClient::new(&self.api_base, self.api_key()?, self.model_name.clone());
        log::info!(
            "Connected language model client for {} at {}",
            self.model_name,
            self.api_base
        );
        Ok(Box::new(client))
    }
}
