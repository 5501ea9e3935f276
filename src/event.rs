//! Lifecycle events.
//!
//! A [`Registry`](crate::Registry) configured with
//! [`with_events`](crate::Registry::with_events) sends one [`TestEvent`] per
//! lifecycle step over a [`crossbeam_channel`] sender. The registry never waits
//! on the receiver and ignores a disconnected one.

use crossbeam_channel::Sender;

use crate::test::Phase;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEvent {
    pub name: String,
    pub kind: EventKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum EventKind {
    /// A fresh instance was created.
    Created,
    /// `set_up` is about to be called.
    SetUp,
    /// `run` is about to be called.
    Run,
    /// `tear_down` is about to be called.
    TearDown,
    Passed,
    Failed(Phase),
}

#[derive(Debug, Clone, Default)]
pub(crate) struct EventSink(Option<Sender<TestEvent>>);

impl EventSink {
    pub(crate) fn new(sender: Sender<TestEvent>) -> Self {
        Self(Some(sender))
    }

    pub(crate) fn emit(&self, name: &str, kind: EventKind) {
        if let Some(tx) = &self.0 {
            let _ = tx.send(TestEvent {
                name: name.to_string(),
                kind,
            });
        }
    }
}
