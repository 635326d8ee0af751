use std::{
    fmt::{Display, Formatter, Result},
    path::PathBuf,
};

#[derive(Debug)]
pub(crate) enum FormatterError {
    FontRead(PathBuf, std::io::Error),
    FontParse(PathBuf, genpdf::error::Error),
    PdfRender(genpdf::error::Error),
    DocxPack(docx_rs::DocxError),
}

impl From<docx_rs::DocxError> for FormatterError {
    fn from(value: docx_rs::DocxError) -> Self {
        Self::DocxPack(value)
    }
}

impl From<genpdf::error::Error> for FormatterError {
    fn from(value: genpdf::error::Error) -> Self {
        Self::PdfRender(value)
    }
}

impl std::error::Error for FormatterError {}

impl Display for FormatterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FormatterError::FontRead(path, err) => {
                write!(f, "Formatter: Unable to read font {}: {err}", path.display())
            }
            FormatterError::FontParse(path, err) => {
                write!(f, "Formatter: Unable to load font {}: {err}", path.display())
            }
            FormatterError::PdfRender(err) => write!(f, "Formatter: PDF rendering failed: {err}"),
            FormatterError::DocxPack(err) => write!(f, "Formatter: DOCX packing failed: {err}"),
        }
    }
}
