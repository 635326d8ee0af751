mod cli_args;
mod config;
mod formatter;
mod generation;
mod llm_client;
mod server;

#[cfg(test)]
mod test_data;

use crate::{
    cli_args::{Cli, Commands},
    formatter::{DocumentFormat, DocumentFormatter, DocxFormatter, PdfFormatter},
    generation::{Engine, SystemPrompt},
    llm_client::OpenAiConnector,
};
use actix_rt::System;
use anyhow::Context;
use clap::Parser;
use server::run_server;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match Cli::parse().command {
        Commands::Server(server_args) => {
            let config = config::server::Config::try_from(server_args)?;
            let system_runner = System::new();

            log::info!("\n{config}");

            if std::env::var_os(&config.api_key_var).is_none() {
                log::warn!(
                    "{} is not set; text generation will fail until it is provided",
                    config.api_key_var
                );
            }

            let system_prompt = SystemPrompt::new(&config.system_prompt)
                .context("parsing system prompt template")?;
            let connector =
                OpenAiConnector::new(config.llm_url, config.api_key_var, config.llm_model);
            let engine = Engine::new(
                connector,
                system_prompt,
                config.max_tokens,
                config.temperature,
            );
            let pdf_formatter = PdfFormatter::new(config.fonts);
            if let Err(e) = pdf_formatter.fonts().family() {
                log::warn!("PDF downloads will fail until fonts are installed: {e}");
            }

            let server = run_server(
                engine,
                pdf_formatter,
                config.host,
                config.port,
                config.payload_limit,
            )?;
            system_runner.block_on(server).map_err(anyhow::Error::from)
        }
        Commands::Render(render_args) => {
            let config = config::render::Config::try_from(render_args)?;

            log::info!("\n{config}");

            let text = std::fs::read_to_string(&config.input)
                .with_context(|| format!("reading {}", config.input.display()))?;

            let pdf_formatter;
            let formatter: &dyn DocumentFormatter = match config.format {
                DocumentFormat::Docx => &DocxFormatter,
                DocumentFormat::Pdf => {
                    pdf_formatter = PdfFormatter::new(config.fonts);
                    &pdf_formatter
                }
            };

            let document = formatter.format(&text)?;
            std::fs::write(&config.output, &document)
                .with_context(|| format!("writing {}", config.output.display()))?;

            log::info!(
                "Wrote {} bytes of {} to {}",
                document.len(),
                formatter.document_format(),
                config.output.display()
            );
            Ok(())
        }
    }
}
