use std::borrow::Cow;

use crate::predicate::NamePredicate;

/// Selects every test whose name contains `target`.
///
/// The empty target is contained in every name, the empty one included.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Substr(Cow<'static, str>);

impl Substr {
    pub fn new(target: impl Into<Cow<'static, str>>) -> Self {
        Self(target.into())
    }

    pub fn target(&self) -> &str {
        &self.0
    }
}

impl NamePredicate for Substr {
    fn matches(&self, name: &str) -> bool {
        name.contains(self.0.as_ref())
    }
}
