use std::borrow::Cow;

use crate::predicate::NamePredicate;

/// Selects the test whose name is exactly `target`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FullMatch(Cow<'static, str>);

impl FullMatch {
    pub fn new(target: impl Into<Cow<'static, str>>) -> Self {
        Self(target.into())
    }

    pub fn target(&self) -> &str {
        &self.0
    }
}

impl NamePredicate for FullMatch {
    fn matches(&self, name: &str) -> bool {
        name == self.0
    }
}
