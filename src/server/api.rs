use actix_web::{
    get,
    http::header::ContentDisposition,
    post,
    web::{self, Data, Json},
    HttpResponse, Responder,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::{
    formatter::{DocumentFormatter, DocxFormatter, PdfFormatter},
    generation::Engine,
};

use super::{
    ApiError, DownloadRequest, ErrorResponse, GenerationRequest, GenerationResponse, Status,
};

#[derive(OpenApi)]
#[openapi(
    paths(status, generate_text, download_docx, download_pdf),
    components(
        schemas(Status),
        schemas(GenerationRequest),
        schemas(GenerationResponse),
        schemas(DownloadRequest),
        schemas(ErrorResponse)
    )
)]
pub(crate) struct ApiDoc;

#[utoipa::path(
    responses(
        (status = 200, description = "Service is running", body = Status)
    )
)]
#[get("/")]
pub(crate) async fn status() -> impl Responder {
    HttpResponse::Ok().json(Status::running())
}

#[utoipa::path(
    request_body(content = GenerationRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Generated text", body = GenerationResponse),
        (status = 413, description = "Request body over the payload limit", body = ErrorResponse),
        (status = 422, description = "Malformed request", body = ErrorResponse),
        (status = 500, description = "Language model client unavailable", body = ErrorResponse),
        (status = 503, description = "Language model service failed", body = ErrorResponse)
    )
)]
#[post("/api/generate/text")]
pub(crate) async fn generate_text(
    Json(GenerationRequest { prompt, style }): Json<GenerationRequest>,
    engine: Data<Arc<Engine>>,
) -> Result<HttpResponse, ApiError> {
    let data = engine.generate(&prompt, &style).await.map_err(|e| {
        log::error!("{e}");
        ApiError::from(e)
    })?;
    Ok(HttpResponse::Ok().json(GenerationResponse { data }))
}

#[utoipa::path(
    request_body(content = DownloadRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Word document attachment"),
        (status = 413, description = "Request body over the payload limit", body = ErrorResponse),
        (status = 422, description = "Malformed request", body = ErrorResponse),
        (status = 500, description = "Document could not be produced", body = ErrorResponse)
    )
)]
#[post("/api/download/docx")]
pub(crate) async fn download_docx(
    Json(DownloadRequest { text }): Json<DownloadRequest>,
) -> Result<HttpResponse, ApiError> {
    attachment(DocxFormatter, text).await
}

#[utoipa::path(
    request_body(content = DownloadRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "PDF document attachment"),
        (status = 413, description = "Request body over the payload limit", body = ErrorResponse),
        (status = 422, description = "Malformed request", body = ErrorResponse),
        (status = 500, description = "Fonts missing or document could not be produced", body = ErrorResponse)
    )
)]
#[post("/api/download/pdf")]
pub(crate) async fn download_pdf(
    Json(DownloadRequest { text }): Json<DownloadRequest>,
    formatter: Data<Arc<PdfFormatter>>,
) -> Result<HttpResponse, ApiError> {
    attachment(PdfFormatter::clone(&formatter), text).await
}

/// Renders off the async workers and wraps the bytes as a download.
async fn attachment<F>(formatter: F, text: String) -> Result<HttpResponse, ApiError>
where
    F: DocumentFormatter + Send + 'static,
{
    let format = formatter.document_format();
    let document = web::block(move || formatter.format(&text))
        .await?
        .map_err(|e| {
            log::error!("{e}");
            ApiError::from(e)
        })?;

    log::info!("Rendered {format} document of {} bytes", document.len());
    Ok(HttpResponse::Ok()
        .content_type(format.content_type())
        .insert_header(ContentDisposition::attachment(format.file_name()))
        .body(document))
}
