use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const RUNNING: &str = "Creative AI Backend is running!";

#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Eq)]
#[schema(example = json!({"status": "Creative AI Backend is running!"}))]
pub(crate) struct Status {
    pub(crate) status: String,
}

impl Status {
    pub(crate) fn running() -> Self {
        Self {
            status: String::from(RUNNING),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[schema(example = json!({"prompt": "A short poem about the sea", "style": "melancholic"}))]
pub(crate) struct GenerationRequest {
    pub(crate) prompt: String,
    pub(crate) style: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[schema(example = json!({"data": "The Sea\nGrey water folds over itself."}))]
pub(crate) struct GenerationResponse {
    pub(crate) data: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[schema(example = json!({"text": "The Sea\nGrey water folds over itself."}))]
pub(crate) struct DownloadRequest {
    pub(crate) text: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
#[schema(example = json!({"error": "An error occurred with the AI service"}))]
pub(crate) struct ErrorResponse {
    pub(crate) error: String,
}
