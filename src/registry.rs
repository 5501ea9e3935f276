use std::{
    any::{TypeId, type_name},
    collections::{BTreeMap, HashMap},
    fmt::{self, Debug},
};

use crossbeam_channel::Sender;
use tracing::{debug, error};

use crate::{
    error::{RegistryError, RegistryResult},
    event::{EventKind, EventSink, TestEvent},
    lifecycle::Lifecycle,
    predicate::NamePredicate,
    test::Test,
};

type CreateFn = Box<dyn Fn() -> Box<dyn Test> + Send + Sync>;

/// A function that adds tests to a registry.
///
/// Useful for collecting registrations at startup, for example in a
/// distributed slice, and applying them with [`Registry::register_all`].
pub type Registration = fn(&mut Registry) -> RegistryResult<()>;

struct Factory {
    create: CreateFn,
    type_id: TypeId,
    type_name: &'static str,
}

impl Debug for Factory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("type_id", &self.type_id)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Maps test names to factories and runs the tests they produce.
///
/// Names are unique and so are the test types behind them: a type can only be
/// registered under one name. Every execution works on a fresh instance that
/// is dropped before the call returns.
///
/// Iteration order, for listing as well as running, is the lexicographic order
/// of the names.
#[derive(Debug, Default)]
pub struct Registry {
    factories: BTreeMap<String, Factory>,
    types: HashMap<TypeId, String>,
    events: EventSink,
    catch_panics: bool,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send a [`TestEvent`] for every lifecycle step to `sender`.
    pub fn with_events(self, sender: Sender<TestEvent>) -> Self {
        Self {
            events: EventSink::new(sender),
            ..self
        }
    }

    /// Turn panics inside lifecycle steps into [`TestFailure::Panicked`](crate::test::TestFailure::Panicked).
    ///
    /// Off by default, in which case a panic unwinds through the registry
    /// after the instance was torn down.
    pub fn with_catch_panics(self, catch_panics: bool) -> Self {
        Self {
            catch_panics,
            ..self
        }
    }

    /// Register `T` under `name`, creating instances with [`Default`].
    pub fn register<T>(&mut self, name: impl Into<String>) -> RegistryResult<()>
    where
        T: Test + Default + 'static,
    {
        self.register_with(name, T::default)
    }

    /// Register the test type produced by `create` under `name`.
    ///
    /// Fails if `name` is taken or if the produced type is already registered
    /// under any name. A failed registration changes nothing.
    pub fn register_with<T, F>(&mut self, name: impl Into<String>, create: F) -> RegistryResult<()>
    where
        T: Test + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let name = name.into();
        let type_id = TypeId::of::<T>();
        let type_name = type_name::<T>();

        if let Some(existing) = self.types.get(&type_id) {
            return Err(RegistryError::DuplicateType {
                name,
                existing: existing.clone(),
                type_name,
            });
        }

        if self.factories.contains_key(&name) {
            return Err(RegistryError::DuplicateName { name });
        }

        debug!(test = name.as_str(), type_name, "registered");
        self.types.insert(type_id, name.clone());
        self.factories.insert(
            name,
            Factory {
                create: Box::new(move || Box::new(create()) as Box<dyn Test>),
                type_id,
                type_name,
            },
        );
        Ok(())
    }

    /// Apply `registrations` in order, stopping at the first error.
    pub fn register_all<'a>(
        &mut self,
        registrations: impl IntoIterator<Item = &'a Registration>,
    ) -> RegistryResult<()> {
        registrations
            .into_iter()
            .try_for_each(|registration| registration(self))
    }

    /// Create a fresh instance of the test registered as `name`.
    pub fn create_test(&self, name: &str) -> RegistryResult<Box<dyn Test>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        debug!(test = name, type_name = factory.type_name, "creating instance");
        let test = (factory.create)();
        self.events.emit(name, EventKind::Created);
        Ok(test)
    }

    /// Create, set up, run and tear down the test registered as `name`.
    ///
    /// Once set-up succeeded, tear-down runs exactly once, also when the run
    /// fails or panics. A run failure is returned as is, a tear-down failure
    /// following it is only logged.
    pub fn run_test(&self, name: &str) -> RegistryResult<()> {
        let test = self.create_test(name)?;
        Lifecycle {
            name,
            events: &self.events,
            catch_panics: self.catch_panics,
        }
        .execute(test)
    }

    /// Run every test whose name matches `predicate`, in name order.
    ///
    /// The first failure stops the batch and is returned; the remaining
    /// matching tests are not attempted.
    pub fn run_tests<P: NamePredicate>(&self, predicate: P) -> RegistryResult<()> {
        let selected: Vec<&str> = self.show_tests(predicate);
        for (index, name) in selected.iter().enumerate() {
            if let Err(err) = self.run_test(name) {
                error!(
                    test = *name,
                    error = %err,
                    not_attempted = selected.len() - index - 1,
                    "aborting test batch"
                );
                return Err(err);
            }
        }
        Ok(())
    }

    /// The names of all registered tests, in name order.
    pub fn show_all_tests(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// The names matching `predicate`, in name order.
    pub fn show_tests<P: NamePredicate>(&self, predicate: P) -> Vec<&str> {
        self.factories
            .keys()
            .map(String::as_str)
            .filter(|name| predicate.matches(name))
            .collect()
    }

    /// Remove every registration. Configuration is kept.
    pub fn clear(&mut self) {
        debug!(tests = self.factories.len(), "clearing registry");
        self.factories.clear();
        self.types.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        self.factories.len() == self.types.len()
            && self
                .factories
                .iter()
                .all(|(name, factory)| self.types.get(&factory.type_id) == Some(name))
    }
}
