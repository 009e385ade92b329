//! Task name patterns

/// Marker wrapped around a pattern authored in wildcard form, e.g. `.*shell.*`
const WILDCARD_MARKER: &str = ".*";

/// A single pattern within a category rule.
///
/// Both kinds match when their text is a case-insensitive substring of the
/// task name. The kind only records how the pattern was authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSpec {
    PlainSubstring(String),
    WildcardContains(String),
}

impl PatternSpec {
    pub fn plain(text: impl Into<String>) -> Self {
        PatternSpec::PlainSubstring(text.into())
    }

    pub fn wildcard(text: impl Into<String>) -> Self {
        PatternSpec::WildcardContains(text.into())
    }

    /// Classify an authored pattern string.
    ///
    /// Only a string that both starts and ends with `.*` around non-empty text
    /// is a wildcard; anything else, including `.*` in the middle, is kept
    /// verbatim as plain text.
    pub fn from_authored(authored: &str) -> Self {
        authored
            .strip_prefix(WILDCARD_MARKER)
            .and_then(|rest| rest.strip_suffix(WILDCARD_MARKER))
            .filter(|inner| !inner.is_empty())
            .map(PatternSpec::wildcard)
            .unwrap_or_else(|| PatternSpec::plain(authored))
    }

    /// The text that must appear in a task name
    pub fn text(&self) -> &str {
        match self {
            PatternSpec::PlainSubstring(text) | PatternSpec::WildcardContains(text) => text,
        }
    }
}

/// A pattern with its needle lowercased once at table construction
#[derive(Debug, Clone)]
pub(crate) struct CompiledPattern {
    pub(crate) spec: PatternSpec,
    needle: String,
}

impl CompiledPattern {
    pub(crate) fn new(spec: PatternSpec) -> Self {
        let needle = spec.text().to_lowercase();
        Self { spec, needle }
    }

    /// `lowered_name` must already be lowercase
    pub(crate) fn matches(&self, lowered_name: &str) -> bool {
        lowered_name.contains(&self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_authored_detects_wrapped_wildcard() {
        assert_eq!(
            PatternSpec::from_authored(".*shell.*"),
            PatternSpec::wildcard("shell")
        );
    }

    #[test]
    fn test_from_authored_keeps_inner_marker_as_plain_text() {
        assert_eq!(
            PatternSpec::from_authored("Change.*shell"),
            PatternSpec::plain("Change.*shell")
        );
    }

    #[test]
    fn test_from_authored_bare_markers_are_plain() {
        assert_eq!(PatternSpec::from_authored(".*"), PatternSpec::plain(".*"));
        assert_eq!(PatternSpec::from_authored(".*.*"), PatternSpec::plain(".*.*"));
    }

    #[test]
    fn test_compiled_pattern_is_case_insensitive() {
        let pattern = CompiledPattern::new(PatternSpec::plain("Install NVM"));
        assert!(pattern.matches("re-install nvm now"));
        assert!(!pattern.matches("install node"));
    }
}
