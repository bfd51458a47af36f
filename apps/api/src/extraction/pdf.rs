//! PDF text extraction as an ordered chain of strategies.
//!
//! Each strategy is tried in turn until one yields at least
//! `MIN_TEXT_CHARS` characters. A strategy that errors or panics counts as an
//! empty result so the next one still runs.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use tracing::{debug, info, warn};

use crate::extraction::text::join_sections;
use crate::extraction::{ExtractionError, MIN_TEXT_CHARS};

/// One way of turning PDF bytes into per-page text.
pub trait PdfTextStrategy: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>>;
}

/// Layout-aware extraction via `pdf-extract`, which positions glyphs and
/// reconstructs spacing and line breaks.
pub struct LayoutPdfStrategy;

impl PdfTextStrategy for LayoutPdfStrategy {
    fn name(&self) -> &'static str {
        "pdf-extract"
    }

    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
            .map_err(|e| anyhow!("pdf-extract failed: {e}"))
    }
}

/// Plain content-stream extraction via `lopdf`. Less accurate, but copes with
/// some files the layout pass chokes on.
pub struct ContentStreamPdfStrategy;

impl PdfTextStrategy for ContentStreamPdfStrategy {
    fn name(&self) -> &'static str {
        "lopdf"
    }

    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<String>> {
        let doc = lopdf::Document::load_mem(bytes).context("failed to load PDF")?;

        let mut pages = Vec::new();
        for (page_num, _page_id) in doc.get_pages() {
            let text = doc
                .extract_text(&[page_num])
                .with_context(|| format!("failed to extract text from page {page_num}"))?;
            pages.push(text);
        }
        Ok(pages)
    }
}

/// Ordered list of strategies sharing one minimum-length predicate.
#[derive(Clone)]
pub struct PdfExtractor {
    strategies: Vec<Arc<dyn PdfTextStrategy>>,
}

impl Default for PdfExtractor {
    fn default() -> Self {
        let strategies: Vec<Arc<dyn PdfTextStrategy>> = vec![
            Arc::new(LayoutPdfStrategy),
            Arc::new(ContentStreamPdfStrategy),
        ];
        Self::with_strategies(strategies)
    }
}

impl PdfExtractor {
    pub fn with_strategies(strategies: Vec<Arc<dyn PdfTextStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Returns the raw (un-normalized) text of the first strategy that
    /// produces enough of it.
    pub fn extract(&self, bytes: &[u8]) -> Result<String, ExtractionError> {
        for (attempt, strategy) in self.strategies.iter().enumerate() {
            if attempt > 0 {
                info!(
                    strategy = strategy.name(),
                    "Previous PDF extraction insufficient, trying fallback"
                );
            }

            let text = run_attempt(strategy.as_ref(), bytes);
            let chars = text.chars().count();
            debug!(strategy = strategy.name(), chars, "PDF extraction attempt finished");

            if chars >= MIN_TEXT_CHARS {
                return Ok(text);
            }
        }

        Err(ExtractionError::InsufficientText(
            "Could not extract sufficient text from PDF. Please ensure the PDF is not scanned/image-based."
                .to_string(),
        ))
    }
}

/// Runs one strategy, degrading any error or panic to an empty string.
fn run_attempt(strategy: &dyn PdfTextStrategy, bytes: &[u8]) -> String {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| strategy.extract_pages(bytes)));

    match outcome {
        Ok(Ok(pages)) => join_sections(pages),
        Ok(Err(e)) => {
            warn!(strategy = strategy.name(), "PDF extraction failed: {e:#}");
            String::new()
        }
        Err(_) => {
            warn!(strategy = strategy.name(), "PDF extraction panicked");
            String::new()
        }
    }
}
