//! What happened to a test that the harness executed.

use std::{fmt, time::Duration};

#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct TestOutcome {
    pub status: TestStatus,
    pub duration: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestStatus {
    Passed,
    Ignored,
    Failed(TestFailure),
}

impl TestStatus {
    pub fn passed(&self) -> bool {
        *self == TestStatus::Passed
    }

    pub fn ignored(&self) -> bool {
        *self == TestStatus::Ignored
    }

    pub fn failed(&self) -> bool {
        matches!(self, TestStatus::Failed(_))
    }

    /// The word libtest prints after `test <name> ...`.
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Passed => "ok",
            TestStatus::Ignored => "ignored",
            TestStatus::Failed(_) => "FAILED",
        }
    }
}

/// Why a test failed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestFailure {
    /// The test function returned an error.
    Returned(String),
    Panicked(String),
    /// The test was marked `should_panic` but finished normally.
    DidNotPanic,
}

impl fmt::Display for TestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestFailure::Returned(err) => write!(f, "Error: {err}"),
            TestFailure::Panicked(msg) => write!(f, "panicked: {msg}"),
            TestFailure::DidNotPanic => f.write_str("note: test did not panic as expected"),
        }
    }
}
