use std::cell::RefCell;

use crate::test::{Test, TestResult};

thread_local! {
    static CALLS: RefCell<Vec<(&'static str, &'static str)>> = const { RefCell::new(Vec::new()) };
}

/// What each lifecycle step of a probe returns.
#[derive(Debug, Clone, Copy)]
pub struct Script {
    pub set_up: fn() -> TestResult,
    pub run: fn() -> TestResult,
    pub tear_down: fn() -> TestResult,
}

fn pass() -> TestResult {
    Ok(())
}

impl Script {
    pub const PASS: Script = Script {
        set_up: pass,
        run: pass,
        tear_down: pass,
    };
}

/// A test that records every lifecycle call into a thread local log.
#[derive(Debug)]
pub struct Probe {
    name: &'static str,
    script: Script,
}

impl Probe {
    pub fn new(name: &'static str, script: Script) -> Self {
        Self { name, script }
    }

    fn record(&self, step: &'static str) {
        CALLS.with_borrow_mut(|calls| calls.push((self.name, step)));
    }
}

impl Test for Probe {
    fn set_up(&mut self) -> TestResult {
        self.record("set_up");
        (self.script.set_up)()
    }

    fn run(&mut self) -> TestResult {
        self.record("run");
        (self.script.run)()
    }

    fn tear_down(&mut self) -> TestResult {
        self.record("tear_down");
        (self.script.tear_down)()
    }
}

/// View on the calls recorded on the current thread since [`ProbeLog::start`].
pub struct ProbeLog;

impl ProbeLog {
    pub fn start() -> Self {
        CALLS.with_borrow_mut(Vec::clear);
        Self
    }

    pub fn calls(&self) -> Vec<(&'static str, &'static str)> {
        CALLS.with_borrow(Vec::clone)
    }

    pub fn count(&self, step: &str) -> usize {
        CALLS.with_borrow(|calls| calls.iter().filter(|(_, s)| *s == step).count())
    }

    /// Names of the probes that were set up, in order.
    pub fn tests(&self) -> Vec<&'static str> {
        CALLS.with_borrow(|calls| {
            calls
                .iter()
                .filter(|(_, step)| *step == "set_up")
                .map(|(name, _)| *name)
                .collect()
        })
    }
}

/// Declare distinct probe types, optionally overriding what a step returns.
macro_rules! probes {
    {$($name:ident $({ $($step:ident: $value:expr),* $(,)? })?),* $(,)?} => {$(
        #[derive(Debug)]
        struct $name($crate::test_support::Probe);

        impl Default for $name {
            fn default() -> Self {
                Self($crate::test_support::Probe::new(
                    stringify!($name),
                    $crate::test_support::Script {
                        $($($step: || $value,)*)?
                        ..$crate::test_support::Script::PASS
                    },
                ))
            }
        }

        impl $crate::test::Test for $name {
            fn set_up(&mut self) -> $crate::test::TestResult {
                $crate::test::Test::set_up(&mut self.0)
            }

            fn run(&mut self) -> $crate::test::TestResult {
                $crate::test::Test::run(&mut self.0)
            }

            fn tear_down(&mut self) -> $crate::test::TestResult {
                $crate::test::Test::tear_down(&mut self.0)
            }
        }
    )*};
}

pub(crate) use probes;
