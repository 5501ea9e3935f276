use thiserror::Error;

use crate::test::{Phase, TestFailure};

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors reported by the [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RegistryError {
    #[error("a test named {name:?} is already registered")]
    DuplicateName { name: String },

    #[error("cannot register {name:?}: test type {type_name} is already registered as {existing:?}")]
    DuplicateType {
        name: String,
        existing: String,
        type_name: &'static str,
    },

    #[error("there is no test named {0:?}")]
    NotFound(String),

    #[error("test {name:?} failed during {phase}: {failure}")]
    Failed {
        name: String,
        phase: Phase,
        #[source]
        failure: TestFailure,
    },
}

impl RegistryError {
    /// Whether this is a rejected registration, by name or by type.
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            RegistryError::DuplicateName { .. } | RegistryError::DuplicateType { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RegistryError::Failed { .. })
    }

    /// The failure reported by the test, if this error came from one.
    pub fn failure(&self) -> Option<&TestFailure> {
        match self {
            RegistryError::Failed { failure, .. } => Some(failure),
            _ => None,
        }
    }

    pub fn phase(&self) -> Option<Phase> {
        match self {
            RegistryError::Failed { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    /// The test name this error refers to.
    pub fn name(&self) -> &str {
        match self {
            RegistryError::DuplicateName { name }
            | RegistryError::DuplicateType { name, .. }
            | RegistryError::NotFound(name)
            | RegistryError::Failed { name, .. } => name,
        }
    }
}
