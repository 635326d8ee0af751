use std::{error::Error, fmt::Display, str::FromStr};

const DOWNLOAD_STEM: &str = "creative_document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocumentFormat {
    Docx,
    Pdf,
}

impl DocumentFormat {
    pub(crate) fn content_type(&self) -> &'static str {
        match self {
            DocumentFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            DocumentFormat::Pdf => "application/pdf",
        }
    }

    pub(crate) fn extension(&self) -> &'static str {
        match self {
            DocumentFormat::Docx => "docx",
            DocumentFormat::Pdf => "pdf",
        }
    }

    /// Name offered to the browser in `Content-Disposition`.
    pub(crate) fn file_name(&self) -> String {
        format!("{DOWNLOAD_STEM}.{}", self.extension())
    }
}

impl Display for DocumentFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentFormat::Docx => write!(f, "DOCX"),
            DocumentFormat::Pdf => write!(f, "PDF"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct ParseDocumentFormatError(String);
impl Error for ParseDocumentFormatError {}
impl Display for ParseDocumentFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unable to parse document format '{}'. Must be one of [docx, pdf]",
            self.0
        )
    }
}

impl FromStr for DocumentFormat {
    type Err = ParseDocumentFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().trim_start_matches('.') {
            "docx" => Ok(DocumentFormat::Docx),
            "pdf" => Ok(DocumentFormat::Pdf),
            _ => Err(ParseDocumentFormatError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn download_names() {
        assert_eq!(DocumentFormat::Docx.file_name(), "creative_document.docx");
        assert_eq!(DocumentFormat::Pdf.file_name(), "creative_document.pdf");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("DOCX".parse::<DocumentFormat>().unwrap(), DocumentFormat::Docx);
        assert_eq!(".pdf".parse::<DocumentFormat>().unwrap(), DocumentFormat::Pdf);
        assert!("odt".parse::<DocumentFormat>().is_err());
    }
}
