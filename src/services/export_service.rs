//! Turns the current lesson markdown into downloadable payloads.
//!
//! Markdown and plain text are identity transforms over the same bytes; the
//! format distinction is cosmetic. The PDF path goes through the printpdf
//! library and is compiled in only under the `pdf-export` feature, so a
//! build without a document engine degrades to the two text formats.

use crate::errors::{AppError, AppResult};

pub const LESSON_MARKDOWN_FILE: &str = "lesson_plan.md";
pub const LESSON_TEXT_FILE: &str = "lesson_plan.txt";
pub const LESSON_PDF_FILE: &str = "lesson_plan.pdf";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Text,
    Pdf,
}

/// One exportable payload with its fixed download metadata.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: &'static str,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// True when this build carries the document (PDF) exporter. Shells
    /// check this once at startup to decide whether to offer the option,
    /// instead of discovering failure per request.
    pub fn supports_document_export(&self) -> bool {
        cfg!(feature = "pdf-export")
    }

    pub fn export(&self, lesson_markdown: &str, format: ExportFormat) -> AppResult<ExportFile> {
        match format {
            ExportFormat::Markdown => Ok(ExportFile {
                file_name: LESSON_MARKDOWN_FILE,
                media_type: "text/markdown",
                bytes: lesson_markdown.as_bytes().to_vec(),
            }),
            ExportFormat::Text => Ok(ExportFile {
                file_name: LESSON_TEXT_FILE,
                media_type: "text/plain",
                bytes: lesson_markdown.as_bytes().to_vec(),
            }),
            ExportFormat::Pdf => self.export_pdf(lesson_markdown),
        }
    }

    #[cfg(feature = "pdf-export")]
    fn export_pdf(&self, lesson_markdown: &str) -> AppResult<ExportFile> {
        let bytes = pdf::render_document(lesson_markdown).map_err(|e| {
            log::warn!("PDF export failed: {}", e);
            AppError::ExportUnavailable(format!("PDF rendering failed: {}", e))
        })?;
        Ok(ExportFile {
            file_name: LESSON_PDF_FILE,
            media_type: "application/pdf",
            bytes,
        })
    }

    #[cfg(not(feature = "pdf-export"))]
    fn export_pdf(&self, _lesson_markdown: &str) -> AppResult<ExportFile> {
        Err(AppError::ExportUnavailable(
            "this build does not include the pdf-export feature".to_string(),
        ))
    }
}

#[cfg(feature = "pdf-export")]
mod pdf {
    use std::io::BufWriter;

    use printpdf::{BuiltinFont, Mm, PdfDocument};

    const PAGE_WIDTH_MM: f32 = 210.0;
    const PAGE_HEIGHT_MM: f32 = 297.0;
    const MARGIN_MM: f32 = 15.0;
    const FONT_SIZE_PT: f32 = 11.0;
    const LINE_HEIGHT_MM: f32 = 5.5;
    const MAX_LINE_CHARS: usize = 92;

    /// Lays the markdown out as plain paragraphs: blank-line-separated input
    /// becomes document paragraphs, long lines wrap on whitespace, and a
    /// fresh page starts when the cursor reaches the bottom margin.
    pub fn render_document(markdown: &str) -> Result<Vec<u8>, String> {
        let (doc, first_page, first_layer) = PdfDocument::new(
            "Lesson Plan",
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "content",
        );
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| e.to_string())?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

        for paragraph in paragraphs(markdown) {
            for line in wrap(&paragraph, MAX_LINE_CHARS) {
                if y < MARGIN_MM {
                    let (page, new_layer) =
                        doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
                    layer = doc.get_page(page).get_layer(new_layer);
                    y = PAGE_HEIGHT_MM - MARGIN_MM;
                }
                layer.use_text(line, FONT_SIZE_PT, Mm(MARGIN_MM), Mm(y), &font);
                y -= LINE_HEIGHT_MM;
            }
            // paragraph gap
            y -= LINE_HEIGHT_MM;
        }

        let mut buffer = Vec::new();
        doc.save(&mut BufWriter::new(&mut buffer))
            .map_err(|e| e.to_string())?;
        Ok(buffer)
    }

    /// Splits on blank lines; consecutive non-blank lines stay in one
    /// paragraph, each on its own layout line.
    fn paragraphs(text: &str) -> Vec<String> {
        let mut result = Vec::new();
        let mut current = Vec::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    result.push(current.join("\n"));
                    current.clear();
                }
            } else {
                current.push(line.trim_end());
            }
        }
        if !current.is_empty() {
            result.push(current.join("\n"));
        }
        result
    }

    fn wrap(paragraph: &str, width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        for source_line in paragraph.lines() {
            let mut current = String::new();
            for word in source_line.split_whitespace() {
                if current.is_empty() {
                    current = word.to_string();
                } else if current.chars().count() + 1 + word.chars().count() <= width {
                    current.push(' ');
                    current.push_str(word);
                } else {
                    lines.push(current);
                    current = word.to_string();
                }
            }
            lines.push(current);
        }
        lines
    }

}
