use serde::Serialize;

/// Plain text pulled out of a document, post-processed for downstream use.
///
/// Invariant: contains no NUL characters, every whitespace run is a single
/// ASCII space, and there is no leading or trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtractedText(String);

impl ExtractedText {
    /// Strips NULs and collapses whitespace. Idempotent.
    pub fn normalize(raw: &str) -> Self {
        let without_nul = raw.replace('\0', "");
        let collapsed = without_nul.split_whitespace().collect::<Vec<_>>().join(" ");
        ExtractedText(collapsed)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// Joins per-page (or per-paragraph) text with newlines and trims the result.
pub fn join_sections<I, S>(sections: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    for section in sections {
        text.push_str(section.as_ref());
        text.push('\n');
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_whitespace_runs() {
        let text = ExtractedText::normalize("  Jane  Doe\n\nSenior\tEngineer \r\n ");
        assert_eq!(text.as_str(), "Jane Doe Senior Engineer");
    }

    #[test]
    fn test_strips_nul_characters() {
        let text = ExtractedText::normalize("Ru\0st\0 developer");
        assert_eq!(text.as_str(), "Rust developer");
    }

    #[test]
    fn test_nul_between_words_does_not_merge_spacing() {
        let text = ExtractedText::normalize("a \0 b");
        assert_eq!(text.as_str(), "a b");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "   ",
            "already normalized text",
            "line one\nline two\n\n\tline three",
            "\0\0weird\0 \u{00a0}spacing\u{2003}here ",
        ];
        for input in inputs {
            let once = ExtractedText::normalize(input);
            let twice = ExtractedText::normalize(once.as_str());
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_char_count_counts_characters_not_bytes() {
        let text = ExtractedText::normalize("Résumé");
        assert_eq!(text.char_count(), 6);
        assert_eq!(text.as_str().len(), 8);
    }

    #[test]
    fn test_join_sections_separates_with_newlines_and_trims() {
        let joined = join_sections(["  first page", "", "second page  "]);
        assert_eq!(joined, "first page\n\nsecond page");
    }

    #[test]
    fn test_join_sections_empty_input() {
        assert_eq!(join_sections(Vec::<String>::new()), "");
    }
}
