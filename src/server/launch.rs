use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    dev::Server,
    middleware,
    error::JsonPayloadError,
    web::{Data, JsonConfig, ServiceConfig},
    App, HttpServer,
};
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use crate::{formatter::PdfFormatter, generation::Engine};

use super::{download_docx, download_pdf, generate_text, status, ApiDoc, ApiError};

pub(crate) fn routes(cfg: &mut ServiceConfig) {
    cfg.service(status)
        .service(generate_text)
        .service(download_docx)
        .service(download_pdf);
}

/// Every origin, method and header; credentials allowed.
pub(crate) fn cors() -> Cors {
    Cors::permissive()
}

/// Body rejections are answered in the same `{"error": ...}` shape as handler failures.
pub(crate) fn json_config(payload_limit: usize) -> JsonConfig {
    JsonConfig::default()
        .limit(payload_limit)
        .error_handler(|err, _req| {
            log::warn!("Rejected request body: {err}");
            match &err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    ApiError::PayloadTooLarge(err.to_string()).into()
                }
                _ => ApiError::InvalidBody(err.to_string()).into(),
            }
        })
}

pub(crate) fn run_server<S: AsRef<str>>(
    engine: Engine,
    pdf_formatter: PdfFormatter,
    host: S,
    port: u16,
    payload_limit: usize,
) -> Result<Server, std::io::Error> {
    let openapi = ApiDoc::openapi();

    let engine = Arc::new(engine);
    let pdf_formatter = Arc::new(pdf_formatter);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors())
            .app_data(Data::new(engine.clone()))
            .app_data(Data::new(pdf_formatter.clone()))
            .app_data(json_config(payload_limit))
            .configure(routes)
            .service(Redoc::with_url("/api-doc", openapi.clone()))
    });

    server = server.bind((host.as_ref(), port))?;
    let s = server.run();
    Ok(s)
}
