use tokio::sync::OnceCell;

use crate::llm_client::{
    LanguageServiceArguments, LlmClientBackend, LlmClientConnector, LlmMessage,
};

use super::{GenerationError, SystemPrompt};

pub(crate) struct Engine {
    connector: Box<dyn LlmClientConnector>,
    client: OnceCell<Box<dyn LlmClientBackend>>,
    system_prompt: SystemPrompt,
    max_tokens: u16,
    temperature: f32,
}

impl Engine {
    pub(crate) fn new<C: LlmClientConnector + 'static>(
        connector: C,
        system_prompt: SystemPrompt,
        max_tokens: u16,
        temperature: f32,
    ) -> Self {
        Self {
            connector: Box::new(connector),
            client: OnceCell::new(),
            system_prompt,
            max_tokens,
            temperature,
        }
    }

    /// The client is built once; a failed build is retried on the next call.
    async fn client(&self) -> Result<&dyn LlmClientBackend, GenerationError> {
        self.client
            .get_or_try_init(|| async { self.connector.connect() })
            .await
            .map(|client| client.as_ref())
            .map_err(GenerationError::ClientInit)
    }

    pub(crate) async fn generate(
        &self,
        prompt: &str,
        style: &str,
    ) -> Result<String, GenerationError> {
        let client = self.client().await?;

        let arguments = LanguageServiceArguments {
            messages: vec![
                LlmMessage::system(self.system_prompt.render(style)?),
                LlmMessage::user(prompt),
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        log::info!("Generating text in style \"{style}\"");
        client
            .get_response(arguments)
            .await
            .map_err(GenerationError::Service)
    }
}

#[cfg(test)]
mod test {
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::{
        generation::DEFAULT_SYSTEM_PROMPT,
        llm_client::{LlmClientError, LlmRole},
        test_data::ScriptedConnector,
    };

    fn engine(connector: ScriptedConnector) -> Engine {
        Engine::new(
            connector,
            SystemPrompt::new(DEFAULT_SYSTEM_PROMPT).unwrap(),
            1024,
            0.7,
        )
    }

    #[tokio::test]
    async fn returns_completion_verbatim() {
        let engine = engine(ScriptedConnector::replying("  Once upon a time\n\nThe end  "));

        let text = engine.generate("a fairy tale", "whimsical").await.unwrap();

        assert_eq!(text, "  Once upon a time\n\nThe end  ");
    }

    #[tokio::test]
    async fn sends_style_in_system_message_and_prompt_as_user() {
        let connector = ScriptedConnector::replying("ok");
        let seen = connector.seen();
        let engine = engine(connector);

        engine.generate("write a limerick", "playful").await.unwrap();

        let seen = seen.lock().unwrap();
        let arguments = &seen[0];
        assert_eq!(arguments.messages.len(), 2);
        assert_eq!(arguments.messages[0].role, LlmRole::System);
        assert!(arguments.messages[0]
            .content
            .contains("The desired style is: playful."));
        assert_eq!(arguments.messages[1].role, LlmRole::User);
        assert_eq!(arguments.messages[1].content, "write a limerick");
        assert_eq!(arguments.max_tokens, 1024);
        assert_eq!(arguments.temperature, 0.7);
    }

    #[tokio::test]
    async fn client_is_built_once() {
        let connector = ScriptedConnector::replying("ok");
        let connects = connector.connects();
        let engine = engine(connector);

        engine.generate("one", "plain").await.unwrap();
        engine.generate("two", "plain").await.unwrap();

        assert_eq!(connects.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn construction_failure_is_client_init_and_not_cached() {
        let connector = ScriptedConnector::failing_to_connect();
        let connects = connector.connects();
        let engine = engine(connector);

        let first = engine.generate("prompt", "style").await.unwrap_err();
        let second = engine.generate("prompt", "style").await.unwrap_err();

        assert!(matches!(
            first,
            GenerationError::ClientInit(LlmClientError::MissingCredential(_))
        ));
        assert!(matches!(second, GenerationError::ClientInit(_)));
        assert_eq!(connects.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn call_failure_is_service_error() {
        let engine = engine(ScriptedConnector::failing_calls());

        let err = engine.generate("prompt", "style").await.unwrap_err();

        assert!(matches!(err, GenerationError::Service(_)));
        assert!(err
            .to_string()
            .starts_with("An error occurred with the AI service:"));
    }
}
