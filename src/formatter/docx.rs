use std::io::Cursor;

use docx_rs::{BreakType, Docx, LineSpacing, Paragraph, Run, Style, StyleType};

use super::{DocumentFormat, DocumentFormatter, FormatterError, Layout};

const HEADING_STYLE_ID: &str = "Heading1";
const HEADING_STYLE_NAME: &str = "Heading 1";
/// Half-points.
const HEADING_SIZE: usize = 32;
/// 0.15 inch in twentieths of a point.
const SPACE_AFTER_BODY: u32 = 216;

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct DocxFormatter;

impl DocxFormatter {
    fn paragraph(text: &str) -> Paragraph {
        Paragraph::new().add_run(Self::run(text))
    }

    /// Line feeds and carriage returns become line breaks and tabs become
    /// tab characters.
    fn run(text: &str) -> Run {
        let mut run = Run::new();
        for (line_index, line) in text.split(&['\n', '\r'][..]).enumerate() {
            if line_index > 0 {
                run = run.add_break(BreakType::TextWrapping);
            }
            for (segment_index, segment) in line.split('\t').enumerate() {
                if segment_index > 0 {
                    run = run.add_tab();
                }
                if !segment.is_empty() {
                    run = run.add_text(segment);
                }
            }
        }
        run
    }

    fn heading_style() -> Style {
        Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
            .name(HEADING_STYLE_NAME)
            .size(HEADING_SIZE)
            .bold()
    }
}

impl DocumentFormatter for DocxFormatter {
    fn document_format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn render(&self, layout: &Layout<'_>) -> Result<Vec<u8>, FormatterError> {
        let docx = match layout {
            Layout::Raw(text) => Docx::new().add_paragraph(Self::paragraph(text)),
            Layout::Titled { title, body } => body.iter().fold(
                Docx::new()
                    .add_style(Self::heading_style())
                    .add_paragraph(Self::paragraph(title).style(HEADING_STYLE_ID)),
                |docx, line| {
                    docx.add_paragraph(
                        Self::paragraph(line)
                            .line_spacing(LineSpacing::new().after(SPACE_AFTER_BODY)),
                    )
                },
            ),
        };

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(docx_rs::DocxError::from)?;
        Ok(buffer.into_inner())
    }
}
