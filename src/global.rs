use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use crate::registry::Registry;

static GLOBAL: LazyLock<Mutex<Registry>> = LazyLock::new(|| Mutex::new(Registry::new()));

/// The process wide registry.
///
/// It is created on first access and lives until the process exits;
/// [`Registry::clear`] empties it. The registry is not meant to be shared
/// between threads, the lock only serializes access. Tests run through the
/// returned guard must not call `global` themselves.
///
/// A poisoned lock is recovered: registration and clearing never leave the
/// registry half updated.
pub fn global() -> MutexGuard<'static, Registry> {
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}
