//! Driving a single test instance through its lifecycle.
//!
//! The instance is torn down on every exit path after a successful set-up:
//! after a passing run, after a failing run, and while a panic from `run`
//! unwinds. Only the first failure is reported. A tear-down failure that
//! follows a run failure is logged and dropped.

use std::{
    any::Any,
    panic::{AssertUnwindSafe, catch_unwind},
};

use tracing::{debug, warn};

use crate::{
    error::{RegistryError, RegistryResult},
    event::{EventKind, EventSink},
    test::{Phase, Test, TestFailure, TestResult},
};

pub(crate) struct Lifecycle<'r> {
    pub(crate) name: &'r str,
    pub(crate) events: &'r EventSink,
    pub(crate) catch_panics: bool,
}

impl<'r> Lifecycle<'r> {
    pub(crate) fn execute(&self, mut test: Box<dyn Test>) -> RegistryResult<()> {
        debug!(test = self.name, "setting up");
        self.events.emit(self.name, EventKind::SetUp);
        if let Err(failure) = self.step(|| test.set_up()) {
            return Err(self.fail(Phase::SetUp, failure));
        }

        let guard = TearDownGuard {
            lifecycle: self,
            test: &mut *test,
            armed: true,
        };

        debug!(test = self.name, "running");
        self.events.emit(self.name, EventKind::Run);
        let run = self.step(|| guard.test.run());

        let tear_down = guard.tear_down();
        match (run, tear_down) {
            (Ok(()), Ok(())) => {
                self.events.emit(self.name, EventKind::Passed);
                Ok(())
            }
            (Ok(()), Err(failure)) => Err(self.fail(Phase::TearDown, failure)),
            (Err(failure), Ok(())) => Err(self.fail(Phase::Run, failure)),
            (Err(failure), Err(cleanup)) => {
                warn!(
                    test = self.name,
                    error = %cleanup,
                    "tear-down failed after a failed run, keeping the run failure"
                );
                Err(self.fail(Phase::Run, failure))
            }
        }
    }

    fn step(&self, f: impl FnOnce() -> TestResult) -> TestResult {
        match self.catch_panics {
            true => catch_unwind(AssertUnwindSafe(f))
                .unwrap_or_else(|payload| Err(TestFailure::Panicked(payload_as_string(payload)))),
            false => f(),
        }
    }

    fn fail(&self, phase: Phase, failure: TestFailure) -> RegistryError {
        debug!(test = self.name, %phase, error = %failure, "test failed");
        self.events.emit(self.name, EventKind::Failed(phase));
        RegistryError::Failed {
            name: self.name.to_string(),
            phase,
            failure,
        }
    }
}

/// Calls `tear_down` when dropped unless it was already called.
///
/// The drop path only runs while a panic from `run` unwinds, since the normal
/// path calls [`TearDownGuard::tear_down`] explicitly.
struct TearDownGuard<'l, 'r, 't> {
    lifecycle: &'l Lifecycle<'r>,
    test: &'t mut dyn Test,
    armed: bool,
}

impl TearDownGuard<'_, '_, '_> {
    fn tear_down(mut self) -> TestResult {
        self.armed = false;
        let Lifecycle { name, events, .. } = self.lifecycle;
        debug!(test = *name, "tearing down");
        events.emit(name, EventKind::TearDown);
        self.lifecycle.step(|| self.test.tear_down())
    }
}

impl Drop for TearDownGuard<'_, '_, '_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }

        let name = self.lifecycle.name;
        debug!(test = name, "tearing down while unwinding");
        self.lifecycle.events.emit(name, EventKind::TearDown);
        // A second panic during unwinding would abort the process.
        match catch_unwind(AssertUnwindSafe(|| self.test.tear_down())) {
            Ok(Ok(())) => {}
            Ok(Err(failure)) => {
                warn!(test = name, error = %failure, "tear-down failed while unwinding")
            }
            Err(payload) => warn!(
                test = name,
                panic = %payload_as_string(payload),
                "tear-down panicked while unwinding"
            ),
        }
    }
}

/// Convert a panic payload into a string.
///
/// This matches the common payload types produced by `panic!` (`&'static str` and `String`).
/// Other payload types are formatted as a generic placeholder.
pub(crate) fn payload_as_string(payload: Box<dyn Any + Send + 'static>) -> String {
    payload
        .downcast::<&'static str>()
        .map(|s| s.to_string())
        .or_else(|payload| payload.downcast::<String>().map(|s| *s))
        .unwrap_or_else(|_| String::from("Box<dyn Any>"))
}
