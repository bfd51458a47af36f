// Query Enhancer
// Deterministic vocabulary and pattern matching over free-text job searches.
// No ML, no history, no persistence.

pub mod enhancer;
pub mod handlers;
pub mod salary;
pub mod vocabulary;

use serde::{Deserialize, Serialize};

use crate::search::salary::SalaryRange;

#[derive(Debug, Deserialize)]
pub struct SearchQueryRequest {
    pub query: String,
}

/// Structured filters pulled out of one search query. `None` means nothing
/// matched and serializes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancedQuery {
    pub original_query: String,
    pub extracted_keywords: Vec<String>,
    pub job_titles: Vec<String>,
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    pub experience_level: Option<String>,
    /// Upper snake case, e.g. `FULL_TIME`.
    pub job_type: Option<String>,
    pub salary_range: Option<SalaryRange>,
}

#[derive(Debug, Serialize)]
pub struct SearchQueryResponse {
    pub success: bool,
    pub enhanced_query: EnhancedQuery,
}
