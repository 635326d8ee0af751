mod docx;
mod error;
mod format;
mod layout;
mod pdf;

pub(crate) use docx::DocxFormatter;
pub(crate) use error::FormatterError;
pub(crate) use format::DocumentFormat;
pub(crate) use layout::Layout;
pub(crate) use pdf::{FontSource, PdfFormatter};

pub(crate) trait DocumentFormatter {
    fn document_format(&self) -> DocumentFormat;

    fn render(&self, layout: &Layout<'_>) -> Result<Vec<u8>, FormatterError>;

    fn format(&self, text: &str) -> Result<Vec<u8>, FormatterError> {
        self.render(&Layout::new(text))
    }
}
