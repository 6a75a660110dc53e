//! Calling test functions and turning what they do into a [`TestStatus`].
//!
//! The handler sees the test's [`TestMeta`], so it can honor markers like
//! [`should_panic`](TestMeta::should_panic).

use std::panic::UnwindSafe;

use crate::{
    outcome::TestStatus,
    test::{TestMeta, TestResult},
};

mod default;
pub use default::*;

/// Handlers are shared between runner threads, so they only get `&self`.
pub trait TestPanicHandler<Extra> {
    fn handle<F: FnOnce() -> TestResult + UnwindSafe>(
        &self,
        f: F,
        meta: &TestMeta<Extra>,
    ) -> TestStatus;
}
