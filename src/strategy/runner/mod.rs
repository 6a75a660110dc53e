//! Test execution and scheduling.
//!
//! A runner decides when and where the test execution functions handed to it
//! are called, and turns the resulting [`TestStatus`] into a [`TestOutcome`]
//! by timing it.
//!
//! Runners are only involved when no plugin owns the run loop.

use std::{num::NonZeroUsize, thread::Scope};

use crate::{
    outcome::{TestOutcome, TestStatus},
    test::TestMeta,
};

mod default;
pub use default::*;

/// A strategy for running tests and producing [`TestOutcome`] values.
pub trait TestRunner<Extra> {
    /// Run the given tests and return their outcomes.
    ///
    /// The input iterator yields `(f, meta)` pairs where `f` already includes
    /// the panic handler. The [`Scope`] lets the runner spawn threads that
    /// borrow the tests.
    ///
    /// The returned iterator does not have to keep the input order.
    fn run<'t, 's, I, F>(
        &self,
        tests: I,
        scope: &'s Scope<'s, 't>,
    ) -> impl Iterator<Item = (&'t TestMeta<Extra>, TestOutcome)>
    where
        I: ExactSizeIterator<Item = (F, &'t TestMeta<Extra>)>,
        F: (Fn() -> TestStatus) + Send + 's,
        Extra: Sync + 't;

    /// Return the number of workers this runner would use for `tests_count` tests.
    fn worker_count(&self, tests_count: usize) -> NonZeroUsize;
}
