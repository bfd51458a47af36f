use std::sync::Arc;

use crate::extraction::DocumentExtractor;
use crate::search::enhancer::QueryEnhancer;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// PDF strategy chain plus the DOCX parser.
    pub extractor: Arc<DocumentExtractor>,
    /// Precompiled vocabulary matchers.
    pub enhancer: Arc<QueryEnhancer>,
}
