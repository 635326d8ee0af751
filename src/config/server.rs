use std::{fmt::Display, path::PathBuf};

use anyhow::Context;
use colored::Colorize;
use url::Url;

use crate::{cli_args::ServerArgs, formatter::FontSource, generation::DEFAULT_SYSTEM_PROMPT};

#[derive(Debug)]
pub(crate) struct Config {
    pub(crate) protocol: String,
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) llm_url: Url,
    pub(crate) llm_model: String,
    pub(crate) api_key_var: String,
    pub(crate) temperature: f32,
    pub(crate) max_tokens: u16,
    pub(crate) system_prompt: String,
    pub(crate) system_prompt_path: Option<PathBuf>,
    pub(crate) fonts: FontSource,
    pub(crate) payload_limit: usize,
}

pub(crate) trait ConfigUrl {
    fn url(&self) -> Result<Url, url::ParseError>;
}

impl ConfigUrl for Config {
    fn url(&self) -> Result<Url, url::ParseError> {
        let Config {
            protocol,
            host,
            port,
            ..
        } = self;

        Url::parse(&format!("{protocol}://{host}:{port}"))
    }
}

impl TryFrom<ServerArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(value: ServerArgs) -> Result<Self, Self::Error> {
        let system_prompt = match &value.system_prompt_path {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading system prompt {}", path.display()))?,
            None => String::from(DEFAULT_SYSTEM_PROMPT),
        };
        let fonts = match value.font_directory {
            Some(directory) => FontSource::new(directory),
            None => FontSource::beside_executable().context("locating bundled fonts")?,
        };

        Ok(Config {
            protocol: "http".to_string(),
            host: value.host,
            port: value.port,
            llm_url: value.llm_url,
            llm_model: value.llm_model,
            api_key_var: value.api_key_var,
            temperature: value.temperature,
            max_tokens: value.max_tokens,
            system_prompt,
            system_prompt_path: value.system_prompt_path,
            fonts,
            payload_limit: value.payload_limit,
        })
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Config {
            llm_url,
            llm_model,
            api_key_var,
            temperature,
            max_tokens,
            system_prompt_path,
            fonts,
            ..
        } = self;

        let engine_url = self.url().map_err(|_| std::fmt::Error)?;
        let endpoint = |path: &str| {
            engine_url
                .join(path)
                .map(|url| url.as_str().yellow())
                .map_err(|_| std::fmt::Error)
        };
        let generate_path = endpoint("api/generate/text")?;
        let docx_path = endpoint("api/download/docx")?;
        let pdf_path = endpoint("api/download/pdf")?;
        let api_doc_path = endpoint("api-doc")?;

        let llm_url = llm_url.as_str().blue();
        let llm_model = llm_model.as_str().bright_blue();
        let api_key_var = api_key_var.as_str().green();
        let fonts = fonts.directory().display().to_string().green();
        let system_prompt = match system_prompt_path {
            Some(path) => path.display().to_string().green(),
            None => "built-in".green(),
        };

        write!(
            f,
            r#"Creative backend running.
    Generating text on {generate_path}.
    Serving DOCX downloads on {docx_path}.
    Serving PDF downloads on {pdf_path}.
    Serving OpenAPI documentation on {api_doc_path}.
Using language model service at {llm_url}.
    Using {llm_model} (temperature {temperature}, max tokens {max_tokens}).
    Reading the API key from {api_key_var}.
    Using {system_prompt} system prompt.
Using fonts from {fonts}."#,
        )
    }
}
