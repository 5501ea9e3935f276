//! Selecting tests by name.
//!
//! The bulk operations of the [`Registry`](crate::Registry) take a predicate
//! over test names: [`run_tests`](crate::Registry::run_tests) runs every test
//! whose name matches, [`show_tests`](crate::Registry::show_tests) lists them.
//!
//! Any `Fn(&str) -> bool` is a predicate. The types in this module cover the
//! common cases and are plain values: they keep no reference to a registry and
//! matching has no side effects.
//!
//! Implement [`NamePredicate`] to define a custom selection.

mod all;
pub use all::*;

mod full_match;
pub use full_match::*;

mod substr;
pub use substr::*;

mod name_filter;
pub use name_filter::*;

/// A decision whether a test name is selected.
pub trait NamePredicate {
    /// Return `true` if the test called `name` is selected.
    fn matches(&self, name: &str) -> bool;
}

impl<F> NamePredicate for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, name: &str) -> bool {
        self(name)
    }
}
