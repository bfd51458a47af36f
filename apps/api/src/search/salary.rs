use regex::{Captures, Regex};
use serde::Serialize;

/// Salary bounds in whole currency units. `min <= max` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryRange {
    pub min: u64,
    pub max: u64,
}

/// Ordered salary patterns; the first one that matches decides the range.
pub struct SalaryMatcher {
    patterns: Vec<Regex>,
}

impl SalaryMatcher {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            patterns: vec![
                // "100k-150k", "$100k - $150k", "100-150k"
                Regex::new(r"\$?([0-9]+)k?\s*-\s*\$?([0-9]+)k")?,
                // "$80,000 - $95,000", "80000-95000"
                Regex::new(r"\$?([0-9,]+)\s*-\s*\$?([0-9,]+)")?,
            ],
        })
    }

    /// Finds the first salary-like range in `query_lower`.
    ///
    /// Any "a-b" number pair counts, so "5-10 years" reads as a salary when it
    /// precedes a real one.
    pub fn find(&self, query_lower: &str) -> Option<SalaryRange> {
        self.patterns
            .iter()
            .find_map(|pattern| pattern.captures(query_lower).and_then(|c| to_range(&c)))
    }
}

fn to_range(caps: &Captures<'_>) -> Option<SalaryRange> {
    let mut min = parse_amount(caps.get(1)?.as_str())?;
    let mut max = parse_amount(caps.get(2)?.as_str())?;

    if caps.get(0)?.as_str().contains('k') {
        min = min.checked_mul(1000)?;
        max = max.checked_mul(1000)?;
    }
    Some(SalaryRange { min, max })
}

/// Parses "80,000" as 80000. `None` for separator-only or overflowing input.
fn parse_amount(raw: &str) -> Option<u64> {
    raw.replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(query: &str) -> Option<SalaryRange> {
        SalaryMatcher::new().unwrap().find(&query.to_lowercase())
    }

    #[test]
    fn test_k_suffix_range() {
        assert_eq!(find("100k-150k"), Some(SalaryRange { min: 100_000, max: 150_000 }));
    }

    #[test]
    fn test_dollar_k_range_with_spaces() {
        assert_eq!(
            find("Rust engineer $120K - $160K remote"),
            Some(SalaryRange { min: 120_000, max: 160_000 })
        );
    }

    #[test]
    fn test_k_only_on_upper_bound() {
        assert_eq!(find("90-120k"), Some(SalaryRange { min: 90_000, max: 120_000 }));
    }

    #[test]
    fn test_comma_separated_range() {
        assert_eq!(
            find("$80,000 - $95,000"),
            Some(SalaryRange { min: 80_000, max: 95_000 })
        );
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(
            find("paying 70000-90000 a year"),
            Some(SalaryRange { min: 70_000, max: 90_000 })
        );
    }

    #[test]
    fn test_no_salary_mention() {
        assert_eq!(find("senior react developer in Berlin"), None);
    }

    #[test]
    fn test_first_numeric_range_wins_even_if_not_salary() {
        assert_eq!(
            find("5-10 years experience, $80,000 - $95,000"),
            Some(SalaryRange { min: 5, max: 10 })
        );
    }

    #[test]
    fn test_separator_only_capture_is_ignored() {
        assert_eq!(find("a , - , b"), None);
    }

    #[test]
    fn test_overflowing_amount_is_ignored() {
        assert_eq!(find("99999999999999999999-1"), None);
    }

    #[test]
    fn test_inverted_range_is_kept_as_is() {
        assert_eq!(find("150k-100k"), Some(SalaryRange { min: 150_000, max: 100_000 }));
    }
}
