use std::path::PathBuf;

use clap::{Parser, Subcommand};
use url::Url;

use crate::formatter::DocumentFormat;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}
#[derive(Subcommand)]
pub(crate) enum Commands {
    Server(ServerArgs),
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct ServerArgs {
    #[arg(long, default_value_t = String::from("0.0.0.0"))]
    pub(crate) host: String,
    #[arg(long, default_value_t = 8000)]
    pub(crate) port: u16,
    #[arg(long, default_value = "https://api.groq.com/openai/v1")]
    pub(crate) llm_url: Url,
    #[arg(long, default_value_t = String::from("llama3-8b-8192"))]
    pub(crate) llm_model: String,
    #[arg(long, default_value_t = String::from("GROQ_API_KEY"))]
    pub(crate) api_key_var: String,
    #[arg(long, default_value_t = 0.7)]
    pub(crate) temperature: f32,
    #[arg(long, default_value_t = 1024)]
    pub(crate) max_tokens: u16,
    #[arg(long)]
    pub(crate) system_prompt_path: Option<PathBuf>,
    #[arg(long)]
    pub(crate) font_directory: Option<PathBuf>,
    #[arg(long, default_value_t = 1024 * 1024)]
    pub(crate) payload_limit: usize,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct RenderArgs {
    #[arg(long)]
    pub(crate) input: PathBuf,
    #[arg(long)]
    pub(crate) output: PathBuf,
    #[arg(long)]
    pub(crate) format: DocumentFormat,
    #[arg(long)]
    pub(crate) font_directory: Option<PathBuf>,
}
