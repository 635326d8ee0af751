mod api;
mod error;
mod launch;
mod protocol;

pub(crate) use api::*;
pub(crate) use error::ApiError;
pub(crate) use launch::run_server;

pub(super) use protocol::{
    DownloadRequest, ErrorResponse, GenerationRequest, GenerationResponse, Status,
};
