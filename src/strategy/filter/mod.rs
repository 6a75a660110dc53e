//! Test filtering for kispec.
//!
//! A filter decides which tests from the input slice are collected for the run.
//! Tests that do not match the filter are removed entirely: they are not run,
//! not listed and plugins never see them. In particular a spec document only
//! describes the tests that survived filtering.
//!
//! Ignored tests are different: they are collected, show up in the spec and
//! are reported as ignored, only their function is never called.
//!
//! Implement [`TestFilter`] to define a filter strategy.

use crate::test::Test;

mod default;
pub use default::*;

/// The result of applying a [`TestFilter`].
///
/// The iterator is required to be an [`ExactSizeIterator`] so the harness
/// knows how many tests were collected before it starts working on them.
#[derive(Debug)]
pub struct FilteredTests<'t, I, Extra>
where
    I: ExactSizeIterator<Item = &'t Test<Extra>>,
    Extra: 't,
{
    /// The tests that are collected, in their original order.
    pub tests: I,

    /// The number of tests that were filtered out.
    pub filtered_out: usize,
}

/// A strategy for selecting which tests are collected.
pub trait TestFilter<Extra> {
    /// Filter the given slice of tests.
    ///
    /// The iterator must yield references into the original `tests` slice,
    /// keep their relative order and have an exact size.
    fn filter<'t>(
        &self,
        tests: &'t [Test<Extra>],
    ) -> FilteredTests<'t, impl ExactSizeIterator<Item = &'t Test<Extra>>, Extra>;
}
