use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LlmRole {
    System,
    User,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct LlmMessage {
    pub(crate) role: LlmRole,
    pub(crate) content: String,
}

impl LlmMessage {
    pub(crate) fn system<S: Into<String>>(content: S) -> Self {
        Self {
            role: LlmRole::System,
            content: content.into(),
        }
    }

    pub(crate) fn user<S: Into<String>>(content: S) -> Self {
        Self {
            role: LlmRole::User,
            content: content.into(),
        }
    }
}
