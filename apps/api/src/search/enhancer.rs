//! Query Enhancer: turns a free-text job search into structured filters.
//!
//! Every vocabulary is compiled into a `RegexSet` once, when the enhancer is
//! built at startup, and shared read-only across requests.
//!
//! Matching rules:
//! - job titles, experience levels, job types: plain substring of the
//!   lowercased query
//! - skills: whole-word match, so "ai" does not fire on "airway"
//! - locations: capitalization heuristics on the original query
//! - keywords: whitespace tokens minus stop words and tokens under 3 chars

use std::collections::HashSet;

use regex::{Regex, RegexSet, RegexSetBuilder};
use tracing::debug;

use crate::search::salary::SalaryMatcher;
use crate::search::vocabulary::{EXPERIENCE_LEVELS, JOB_TITLES, JOB_TYPES, SKILLS, STOP_WORDS};
use crate::search::EnhancedQuery;

const MIN_KEYWORD_CHARS: usize = 3;

pub struct QueryEnhancer {
    job_titles: RegexSet,
    skills: RegexSet,
    experience_levels: RegexSet,
    job_types: RegexSet,
    salary: SalaryMatcher,
    locations: Vec<Regex>,
    stop_words: HashSet<&'static str>,
}

impl QueryEnhancer {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            job_titles: literal_set(JOB_TITLES)?,
            skills: RegexSetBuilder::new(
                SKILLS
                    .iter()
                    .map(|skill| format!(r"\b{}\b", regex::escape(skill))),
            )
            .build()?,
            experience_levels: literal_set(EXPERIENCE_LEVELS)?,
            job_types: literal_set(JOB_TYPES)?,
            salary: SalaryMatcher::new()?,
            locations: vec![
                Regex::new(r"\bin\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)")?,
                Regex::new(r"\bat\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)")?,
                Regex::new(r"(?i)\b(remote)\b")?,
            ],
            stop_words: STOP_WORDS.iter().copied().collect(),
        })
    }

    /// Never fails; an unhelpful query just yields empty fields.
    pub fn enhance(&self, query: &str) -> EnhancedQuery {
        let query_lower = query.to_lowercase();

        let enhanced = EnhancedQuery {
            original_query: query.to_string(),
            extracted_keywords: self.keywords(&query_lower),
            job_titles: all_matches(&self.job_titles, JOB_TITLES, &query_lower),
            skills: all_matches(&self.skills, SKILLS, &query_lower),
            locations: self.locations(query),
            experience_level: first_match(&self.experience_levels, EXPERIENCE_LEVELS, &query_lower)
                .map(str::to_string),
            job_type: first_match(&self.job_types, JOB_TYPES, &query_lower)
                .map(normalize_job_type),
            salary_range: self.salary.find(&query_lower),
        };

        debug!(
            titles = enhanced.job_titles.len(),
            skills = enhanced.skills.len(),
            locations = enhanced.locations.len(),
            keywords = enhanced.extracted_keywords.len(),
            "Enhanced search query"
        );
        enhanced
    }

    /// Runs against the original-case query; the patterns key off capitals.
    fn locations(&self, query: &str) -> Vec<String> {
        self.locations
            .iter()
            .flat_map(|pattern| pattern.captures_iter(query))
            .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    fn keywords(&self, query_lower: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        query_lower
            .split_whitespace()
            .filter(|word| !self.stop_words.contains(*word))
            .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
            .filter(|word| seen.insert(*word))
            .map(str::to_string)
            .collect()
    }
}

fn literal_set(words: &[&str]) -> Result<RegexSet, regex::Error> {
    RegexSet::new(words.iter().map(|w| regex::escape(w)))
}

/// Every vocabulary entry whose pattern matches, in vocabulary order.
fn all_matches(set: &RegexSet, vocabulary: &[&str], haystack: &str) -> Vec<String> {
    set.matches(haystack)
        .into_iter()
        .map(|i| vocabulary[i].to_string())
        .collect()
}

/// The earliest vocabulary entry (by table position) that matches.
fn first_match<'a>(set: &RegexSet, vocabulary: &[&'a str], haystack: &str) -> Option<&'a str> {
    set.matches(haystack).into_iter().next().map(|i| vocabulary[i])
}

/// "full-time" / "full time" -> "FULL_TIME".
fn normalize_job_type(job_type: &str) -> String {
    job_type.replace(['-', ' '], "_").to_uppercase()
}
