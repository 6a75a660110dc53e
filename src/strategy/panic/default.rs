use std::{
    any::Any,
    panic::{UnwindSafe, catch_unwind},
};

use crate::{
    outcome::{TestFailure, TestStatus},
    panic::TestPanicHandler,
    test::{TestMeta, TestResult},
};

/// Catches panics, a test marked `should_panic` passes only if it panics.
#[derive(Debug, Default, Clone)]
pub struct DefaultPanicHandler;

impl<Extra> TestPanicHandler<Extra> for DefaultPanicHandler {
    fn handle<F: FnOnce() -> TestResult + UnwindSafe>(
        &self,
        f: F,
        meta: &TestMeta<Extra>,
    ) -> TestStatus {
        let failure = match (catch_unwind(f), meta.should_panic) {
            (Ok(TestResult(Ok(()))), false) | (Err(_), true) => return TestStatus::Passed,
            (Ok(TestResult(Err(err))), false) => TestFailure::Returned(err),
            (Ok(_), true) => TestFailure::DidNotPanic,
            (Err(payload), false) => TestFailure::Panicked(panic_message(payload)),
        };
        TestStatus::Failed(failure)
    }
}

/// The message of a `panic!`, payloads other than strings are not readable.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        return msg.to_string();
    }
    match payload.downcast::<String>() {
        Ok(msg) => *msg,
        Err(_) => String::from("Box<dyn Any>"),
    }
}
