// Document Text Extractor
// Turns an uploaded résumé (PDF or Word) into one line of normalized plain text.

pub mod docx;
pub mod handlers;
pub mod pdf;
pub mod text;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;

use crate::extraction::pdf::PdfExtractor;
use crate::extraction::text::ExtractedText;

/// Below this many characters an extraction is treated as having found no
/// usable text layer.
pub const MIN_TEXT_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported file format. Please upload PDF or DOCX.")]
    UnsupportedFormat,

    #[error("{0}")]
    InsufficientText(String),

    #[error("{0}")]
    ExtractionFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Infers the kind from the filename suffix, ignoring case.
    /// Legacy `.doc` is routed to the DOCX parser, which rejects it if it is
    /// not actually a ZIP container.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let lower = filename.to_lowercase();
        if lower.ends_with(".pdf") {
            Some(DocumentKind::Pdf)
        } else if lower.ends_with(".doc") || lower.ends_with(".docx") {
            Some(DocumentKind::Docx)
        } else {
            None
        }
    }
}

/// A file as received from the client. Lives for one request.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Bytes,
}

#[derive(Debug, Serialize)]
pub struct ExtractTextResponse {
    pub success: bool,
    pub text: ExtractedText,
    pub length: usize,
    pub filename: String,
}

/// Dispatches uploads to the PDF strategy chain or the DOCX parser and
/// normalizes whatever comes back.
#[derive(Clone, Default)]
pub struct DocumentExtractor {
    pdf: PdfExtractor,
}

impl DocumentExtractor {
    pub fn new(pdf: PdfExtractor) -> Self {
        Self { pdf }
    }

    pub fn pdf_strategies(&self) -> Vec<&'static str> {
        self.pdf.strategy_names()
    }

    pub fn extract(&self, document: &UploadedDocument) -> Result<ExtractedText, ExtractionError> {
        let raw = match DocumentKind::from_filename(&document.filename) {
            Some(DocumentKind::Pdf) => self.pdf.extract(&document.bytes)?,
            Some(DocumentKind::Docx) => docx::extract_docx_text(&document.bytes)?,
            None => return Err(ExtractionError::UnsupportedFormat),
        };
        Ok(ExtractedText::normalize(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::extraction::pdf::PdfTextStrategy;

    struct FixedText(&'static str);

    impl PdfTextStrategy for FixedText {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn extract_pages(&self, _bytes: &[u8]) -> anyhow::Result<Vec<String>> {
            Ok(self.0.split('\u{c}').map(String::from).collect())
        }
    }

    fn upload(filename: &str, bytes: &'static [u8]) -> UploadedDocument {
        UploadedDocument {
            filename: filename.to_string(),
            bytes: Bytes::from_static(bytes),
        }
    }

    fn extractor_with_text(text: &'static str) -> DocumentExtractor {
        let strategy: Arc<dyn PdfTextStrategy> = Arc::new(FixedText(text));
        DocumentExtractor::new(PdfExtractor::with_strategies(vec![strategy]))
    }

    #[test]
    fn test_kind_from_filename() {
        assert_eq!(DocumentKind::from_filename("cv.pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("CV.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_filename("cv.docx"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_filename("cv.Doc"), Some(DocumentKind::Docx));
        assert_eq!(DocumentKind::from_filename("cv.txt"), None);
        assert_eq!(DocumentKind::from_filename("pdf"), None);
        assert_eq!(DocumentKind::from_filename(""), None);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = DocumentExtractor::default()
            .extract(&upload("notes.txt", b"plain text resume"))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat));
    }

    #[test]
    fn test_pdf_output_is_normalized() {
        let extractor = extractor_with_text(
            "Jane  Doe\0\nStaff Engineer\u{c}\n\n  Rust, Go, Kubernetes and distributed systems  ",
        );

        let text = extractor.extract(&upload("resume.PDF", b"%PDF-1.7")).unwrap();

        assert_eq!(
            text.as_str(),
            "Jane Doe Staff Engineer Rust, Go, Kubernetes and distributed systems"
        );
        assert_eq!(text.char_count(), text.as_str().chars().count());
    }

    #[test]
    fn test_docx_path_errors_are_fatal() {
        let err = DocumentExtractor::default()
            .extract(&upload("resume.docx", b"not a zip"))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::ExtractionFailed(_)));
    }

    #[test]
    fn test_error_messages_are_human_readable() {
        assert_eq!(
            ExtractionError::UnsupportedFormat.to_string(),
            "Unsupported file format. Please upload PDF or DOCX."
        );
        assert_eq!(
            ExtractionError::InsufficientText("nothing here".into()).to_string(),
            "nothing here"
        );
    }
}
