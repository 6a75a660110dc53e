//! A composable test harness that can write a suite down as a spec document.
//!
//! Tests are plain [`Test`](test::Test) values, usually collected into a
//! static slice. [`harness`] runs them much like the built in harness does,
//! every part of it (filtering, panic handling, running, output)
//! can be swapped out through the `with_*` methods on [`TestHarness`].
//!
//! Passing `--spec <path>` to a binary built with [`harness_from_args`]
//! activates the [`SpecPlugin`](spec::SpecPlugin): instead of running
//! anything, the collected tests are written to `path` as an indented outline
//! of their groups, names and documentation.

pub mod args;
pub mod formatter;
pub mod outcome;
pub mod spec;

mod strategy;
pub use strategy::*;

mod harness;
pub use harness::*;

mod report;
pub use report::*;

#[cfg(test)]
mod test_support;
