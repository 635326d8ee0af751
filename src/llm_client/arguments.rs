use super::LlmMessage;

#[derive(Debug, Clone)]
pub(crate) struct LanguageServiceArguments {
    pub(crate) messages: Vec<LlmMessage>,
    pub(crate) max_tokens: u16,
    pub(crate) temperature: f32,
}
