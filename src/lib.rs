//! A small test registry.
//!
//! Test types implement [`Test`](test::Test) and are registered under a unique
//! name. The [`Registry`] creates a fresh instance for every execution, drives it
//! through set-up, run and tear-down, and selects tests by name with
//! [`predicate`]s.
//!
//! ```
//! use kireg::{Registry, predicate::Substr, test::{Test, TestResult}};
//!
//! #[derive(Default)]
//! struct ParseNumber;
//!
//! impl Test for ParseNumber {
//!     fn run(&mut self) -> TestResult {
//!         "42".parse::<u8>().map(drop).map_err(|e| e.to_string().into())
//!     }
//! }
//!
//! #[derive(Default)]
//! struct ParseEmpty;
//!
//! impl Test for ParseEmpty {
//!     fn run(&mut self) -> TestResult {
//!         match "".parse::<u8>() {
//!             Ok(_) => Err("empty input parsed".into()),
//!             Err(_) => Ok(()),
//!         }
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry.register::<ParseNumber>("parse_number").unwrap();
//! registry.register::<ParseEmpty>("parse_empty").unwrap();
//!
//! assert_eq!(registry.show_tests(Substr::new("parse")), ["parse_empty", "parse_number"]);
//! registry.run_tests(Substr::new("parse")).unwrap();
//! ```

pub mod error;
pub mod event;
pub mod predicate;

mod registry;
pub use registry::*;

mod global;
pub use global::*;

mod lifecycle;

#[cfg(test)]
mod test_support;
