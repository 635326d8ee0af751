use std::path::{Path, PathBuf};

use genpdf::{
    elements::{Break, Paragraph},
    fonts::{FontData, FontFamily},
    style::Style,
    Alignment, Document, Element, Margins, SimplePageDecorator,
};

use super::{DocumentFormat, DocumentFormatter, FormatterError, Layout};

const FONT_DIRECTORY: &str = "fonts";
const REGULAR_FONT_FILE: &str = "arial.ttf";
const BOLD_FONT_FILE: &str = "arialbd.ttf";

const TITLE_FONT_SIZE: u8 = 16;
const BODY_FONT_SIZE: u8 = 12;
/// Lines of space after the title.
const TITLE_GAP: f64 = 1.0;
/// Lines of space after each body block.
const BODY_GAP: f64 = 0.5;
/// Millimetres: top, right, bottom, left.
const PAGE_MARGINS: (f64, f64, f64, f64) = (10.0, 10.0, 15.0, 10.0);

/// Where the regular and bold font files live.
#[derive(Debug, Clone)]
pub(crate) struct FontSource {
    directory: PathBuf,
}

impl FontSource {
    pub(crate) fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// `fonts/` next to the running executable.
    pub(crate) fn beside_executable() -> std::io::Result<Self> {
        let executable = std::env::current_exe()?;
        let install_dir = executable.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::new(install_dir.join(FONT_DIRECTORY)))
    }

    pub(crate) fn directory(&self) -> &Path {
        &self.directory
    }

    pub(crate) fn regular(&self) -> PathBuf {
        self.directory.join(REGULAR_FONT_FILE)
    }

    pub(crate) fn bold(&self) -> PathBuf {
        self.directory.join(BOLD_FONT_FILE)
    }

    fn read(path: PathBuf) -> Result<(PathBuf, Vec<u8>), FormatterError> {
        match std::fs::read(&path) {
            Ok(data) => Ok((path, data)),
            Err(e) => Err(FormatterError::FontRead(path, e)),
        }
    }

    fn parse((path, data): (PathBuf, Vec<u8>)) -> Result<FontData, FormatterError> {
        FontData::new(data, None).map_err(|e| FormatterError::FontParse(path, e))
    }

    /// Both files are read before either is parsed. Italic faces reuse the
    /// upright files; only two weights are bundled.
    pub(crate) fn family(&self) -> Result<FontFamily<FontData>, FormatterError> {
        let regular = Self::read(self.regular())?;
        let bold = Self::read(self.bold())?;
        let regular = Self::parse(regular)?;
        let bold = Self::parse(bold)?;
        Ok(FontFamily {
            italic: regular.clone(),
            bold_italic: bold.clone(),
            regular,
            bold,
        })
    }
}

/// One element of the rendered page flow.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Block<'text> {
    Title(&'text str),
    Text(&'text str),
    Gap(f64),
}

impl<'text> Block<'text> {
    fn flow(layout: &Layout<'text>) -> Vec<Block<'text>> {
        match layout {
            Layout::Raw(text) => vec![Block::Text(*text)],
            Layout::Titled { title, body } => {
                let mut blocks = vec![Block::Title(*title), Block::Gap(TITLE_GAP)];
                for line in body {
                    blocks.push(Block::Text(*line));
                    blocks.push(Block::Gap(BODY_GAP));
                }
                blocks
            }
        }
    }

    fn push_to(self, document: &mut Document) {
        match self {
            Block::Title(title) => document.push(
                Paragraph::new(title)
                    .aligned(Alignment::Center)
                    .styled(Style::new().bold().with_font_size(TITLE_FONT_SIZE)),
            ),
            Block::Text(text) => document.push(Paragraph::new(text)),
            Block::Gap(lines) => document.push(Break::new(lines)),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct PdfFormatter {
    fonts: FontSource,
}

impl PdfFormatter {
    pub(crate) fn new(fonts: FontSource) -> Self {
        Self { fonts }
    }

    pub(crate) fn fonts(&self) -> &FontSource {
        &self.fonts
    }

    fn page_decorator() -> SimplePageDecorator {
        let (top, right, bottom, left) = PAGE_MARGINS;
        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(Margins::trbl(top, right, bottom, left));
        decorator
    }
}

impl DocumentFormatter for PdfFormatter {
    fn document_format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn render(&self, layout: &Layout<'_>) -> Result<Vec<u8>, FormatterError> {
        let mut document = Document::new(self.fonts.family()?);
        document.set_minimal_conformance();
        document.set_page_decorator(Self::page_decorator());
        document.set_font_size(BODY_FONT_SIZE);

        if let Layout::Titled { title, .. } = layout {
            document.set_title(*title);
        }
        for block in Block::flow(layout) {
            block.push_to(&mut document);
        }

        let mut buffer = Vec::new();
        document.render(&mut buffer)?;
        Ok(buffer)
    }
}
