use crate::predicate::NamePredicate;

/// A [`NamePredicate`] built from include and skip patterns.
///
/// This mirrors the usual test runner arguments: a name is selected if it
/// matches any include pattern (or there are none) and matches no skip pattern.
/// Patterns match as substrings, or as whole names with
/// [`with_exact`](Self::with_exact).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameFilter {
    exact: bool,
    filter: Vec<String>,
    skip: Vec<String>,
}

impl NameFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exact(self, exact: bool) -> Self {
        Self { exact, ..self }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter.push(filter.into());
        self
    }

    pub fn extend_filter(mut self, filter: impl IntoIterator<Item = String>) -> Self {
        self.filter.extend(filter);
        self
    }

    pub fn with_skip(mut self, skip: impl Into<String>) -> Self {
        self.skip.push(skip.into());
        self
    }

    pub fn extend_skip(mut self, skip: impl IntoIterator<Item = String>) -> Self {
        self.skip.extend(skip);
        self
    }

    fn pattern_matches(&self, name: &str, pattern: &str) -> bool {
        match self.exact {
            true => name == pattern,
            false => name.contains(pattern),
        }
    }
}

impl NamePredicate for NameFilter {
    fn matches(&self, name: &str) -> bool {
        let in_filter = self.filter.is_empty()
            || self.filter.iter().any(|filter| self.pattern_matches(name, filter));
        in_filter && !self.skip.iter().any(|skip| self.pattern_matches(name, skip))
    }
}
