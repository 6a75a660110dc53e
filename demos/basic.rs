//! A suite declared as a static slice.
//!
//! `cargo run --example basic -- --spec spec.txt` writes it down instead of
//! running it:
//!
//! ```text
//! Test specification
//!
//! stack
//!     A last in, first out collection.
//!     push_then_pop
//!         The last pushed value is popped first.
//!     len_counts_values
//!     empty
//!         A stack nothing was pushed onto.
//!         pop_returns_none
//!             Popping never panics.
//!         is_empty
//!
//! Generated by kispec
//! ```

use std::{
    borrow::Cow,
    process::{ExitCode, Termination},
};

use kispec::{
    args::HarnessArgs,
    test::{Test, TestFnHandle, TestGroup, TestMeta, TestResult},
};

const STACK: &[TestGroup] = &[TestGroup::documented(
    "stack",
    "
    A last in, first out collection.
    ",
)];

const STACK_EMPTY: &[TestGroup] = &[
    TestGroup::documented("stack", "A last in, first out collection."),
    TestGroup::documented("empty", "A stack nothing was pushed onto."),
];

/// `name` is unique in the suite, `original_name` is what the outline shows.
const fn test(
    name: &'static str,
    original_name: &'static str,
    docs: Option<&'static str>,
    groups: &'static [TestGroup],
    function: fn() -> TestResult,
) -> Test {
    let docs = match docs {
        Some(docs) => Some(Cow::Borrowed(docs)),
        None => None,
    };
    Test::new(
        TestFnHandle::from_const_fn(function),
        TestMeta {
            name: Cow::Borrowed(name),
            original_name: Some(Cow::Borrowed(original_name)),
            docs,
            groups: Cow::Borrowed(groups),
            ignore: false,
            should_panic: false,
            extra: (),
        },
    )
}

static TESTS: [Test; 4] = [
    test(
        "stack::push_then_pop",
        "push_then_pop",
        Some("The last pushed value is popped first."),
        STACK,
        push_then_pop,
    ),
    test(
        "stack::len_counts_values",
        "len_counts_values",
        None,
        STACK,
        len_counts_values,
    ),
    test(
        "stack::empty::pop_returns_none",
        "pop_returns_none",
        Some("Popping never panics."),
        STACK_EMPTY,
        pop_returns_none,
    ),
    test(
        "stack::empty::is_empty",
        "is_empty",
        None,
        STACK_EMPTY,
        is_empty,
    ),
];

fn push_then_pop() -> TestResult {
    let mut stack = vec![1, 2];
    stack.push(3);
    assert_eq!(stack.pop(), Some(3));
    ().into()
}

fn len_counts_values() -> TestResult {
    let stack = vec!['a', 'b', 'c'];
    assert_eq!(stack.len(), 3);
    ().into()
}

fn pop_returns_none() -> TestResult {
    let mut stack: Vec<u8> = Vec::new();
    assert_eq!(stack.pop(), None);
    ().into()
}

fn is_empty() -> TestResult {
    let stack: Vec<u8> = Vec::new();
    assert!(stack.is_empty());
    ().into()
}

fn main() -> ExitCode {
    let args = HarnessArgs::from_env();
    let harness = kispec::harness_from_args(&TESTS, &args);
    if args.list {
        harness.list();
        return ExitCode::SUCCESS;
    }
    harness.run().report()
}
