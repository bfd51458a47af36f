//! DOCX text extraction on top of `docx-rs`.
//!
//! The reader resolves `mc:AlternateContent` to its `mc:Choice` branch, so a
//! text box that Word also stores as a VML fallback is only seen once.

use docx_rs::{
    read_docx, DocumentChild, Docx, DrawingData, Paragraph, ParagraphChild, Run, RunChild, Table,
    TableCellContent, TableChild, TableRowChild, TextBoxContentChild,
};
use tracing::error;

use crate::extraction::text::join_sections;
use crate::extraction::{ExtractionError, MIN_TEXT_CHARS};

/// Extracts the raw (un-normalized) paragraph text of a DOCX upload.
///
/// Parse failures are fatal and carry the underlying message; there is no
/// fallback parser for Word documents.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = read_docx(bytes).map_err(|e| {
        error!("DOCX extraction failed: {e}");
        ExtractionError::ExtractionFailed(format!("Failed to extract text from DOCX: {e}"))
    })?;

    let text = join_sections(paragraphs(&docx));
    if text.chars().count() < MIN_TEXT_CHARS {
        return Err(ExtractionError::InsufficientText(
            "Could not extract sufficient text from document.".to_string(),
        ));
    }
    Ok(text)
}

/// One string per paragraph in document order, table cells included.
/// Paragraphs inside a text box come right after the paragraph anchoring it.
fn paragraphs(docx: &Docx) -> Vec<String> {
    let mut out = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(p) => collect_paragraph(p, &mut out),
            DocumentChild::Table(t) => collect_table(t, &mut out),
            _ => {}
        }
    }
    out
}

fn collect_paragraph(paragraph: &Paragraph, out: &mut Vec<String>) {
    let mut text = String::new();
    let mut nested = Vec::new();
    collect_inline(&paragraph.children, &mut text, &mut nested);

    out.push(text);
    out.append(&mut nested);
}

fn collect_inline(children: &[ParagraphChild], text: &mut String, nested: &mut Vec<String>) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => collect_run(run, text, nested),
            ParagraphChild::Hyperlink(link) => collect_inline(&link.children, text, nested),
            _ => {}
        }
    }
}

fn collect_run(run: &Run, text: &mut String, nested: &mut Vec<String>) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            RunChild::Drawing(drawing) => {
                if let Some(DrawingData::TextBox(text_box)) = &drawing.data {
                    for content in &text_box.children {
                        if let TextBoxContentChild::Paragraph(p) = content {
                            collect_paragraph(p, nested);
                        } else if let TextBoxContentChild::Table(t) = content {
                            collect_table(t, nested);
                        }
                    }
                }
            }
            _ => {}
        }
    }
}

fn collect_table(table: &Table, out: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(p) => collect_paragraph(p, out),
                    TableCellContent::Table(t) => collect_table(t, out),
                    _ => {}
                }
            }
        }
    }
}
