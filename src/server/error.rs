use std::fmt::{Display, Formatter, Result};

use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};

use crate::{formatter::FormatterError, generation::GenerationError};

use super::ErrorResponse;

const INTERNAL_SERVER_ERROR: &str = "Internal server error";

#[derive(Debug)]
pub(crate) enum ApiError {
    Generation(GenerationError),
    Formatting(FormatterError),
    Blocking(BlockingError),
    InvalidBody(String),
    PayloadTooLarge(String),
}

impl From<GenerationError> for ApiError {
    fn from(value: GenerationError) -> Self {
        Self::Generation(value)
    }
}

impl From<FormatterError> for ApiError {
    fn from(value: FormatterError) -> Self {
        Self::Formatting(value)
    }
}

impl From<BlockingError> for ApiError {
    fn from(value: BlockingError) -> Self {
        Self::Blocking(value)
    }
}

impl std::error::Error for ApiError {}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ApiError::Generation(err) => write!(f, "{err}"),
            ApiError::Formatting(err) => write!(f, "{err}"),
            ApiError::Blocking(err) => write!(f, "Api: Blocking task failed: {err}"),
            ApiError::InvalidBody(detail) | ApiError::PayloadTooLarge(detail) => {
                write!(f, "{detail}")
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Generation(GenerationError::Service(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Generation(GenerationError::ClientInit(_) | GenerationError::Prompt(_))
            | ApiError::Formatting(_)
            | ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            ApiError::Generation(_) | ApiError::InvalidBody(_) | ApiError::PayloadTooLarge(_) => {
                self.to_string()
            }
            ApiError::Formatting(_) | ApiError::Blocking(_) => String::from(INTERNAL_SERVER_ERROR),
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse { error })
    }
}
