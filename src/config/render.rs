use std::{fmt::Display, path::PathBuf};

use anyhow::Context;
use colored::Colorize;

use crate::{
    cli_args::RenderArgs,
    formatter::{DocumentFormat, FontSource},
};

#[derive(Debug)]
pub(crate) struct Config {
    pub(crate) input: PathBuf,
    pub(crate) output: PathBuf,
    pub(crate) format: DocumentFormat,
    pub(crate) fonts: FontSource,
}

impl TryFrom<RenderArgs> for Config {
    type Error = anyhow::Error;

    fn try_from(value: RenderArgs) -> Result<Self, Self::Error> {
        let fonts = match value.font_directory {
            Some(directory) => FontSource::new(directory),
            None => FontSource::beside_executable().context("locating bundled fonts")?,
        };

        Ok(Config {
            input: value.input,
            output: value.output,
            format: value.format,
            fonts,
        })
    }
}

impl Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Config {
            input,
            output,
            format,
            fonts,
        } = self;

        let input = input.display();
        let output = output.display();
        let format = format.to_string().yellow();

        write!(
            f,
            "Render running.\n\tReading text from {input}.\n\tWriting {format} to {output}.",
        )?;
        if self.format == DocumentFormat::Pdf {
            let fonts = fonts.directory().display().to_string().green();
            write!(f, "\nUsing fonts from {fonts}.")?;
        }
        Ok(())
    }
}
