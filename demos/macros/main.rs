//! Tests registered with an attribute macro, run with:
//!
//! ```text
//! cargo run --example macros
//! cargo run --example macros -- --spec target/spec/macros.txt
//! ```

use std::process::{ExitCode, Termination};

use kispec::{
    args::HarnessArgs,
    test::{Test, TestGroup},
};

#[macro_use]
extern crate macros_support;

#[linkme::distributed_slice]
pub static TESTS: [Test];

const PARSER: &[TestGroup] = &[TestGroup::documented(
    "parser",
    "Turning text into values.",
)];

const LEXER: &[TestGroup] = &[TestGroup::new("lexer")];

/// Decimal integers parse into their value.
#[test(PARSER)]
fn parses_integers() {
    assert_eq!("42".parse::<i32>(), Ok(42));
    assert_eq!("-7".parse::<i32>(), Ok(-7));
}

/// Anything that is not a number is rejected.
///
/// Leading and trailing spaces count as not a number.
#[test(PARSER)]
fn rejects_garbage() {
    assert!("4two".parse::<i32>().is_err());
    assert!(" 42".parse::<i32>().is_err());
}

#[test(PARSER)]
#[should_panic]
fn empty_input_panics() {
    let input = "";
    if input.is_empty() {
        panic!("empty input");
    }
}

/// Words are separated by any amount of whitespace.
#[test(LEXER)]
fn splits_on_whitespace() {
    let words: Vec<_> = "let  x =\t1".split_whitespace().collect();
    assert_eq!(words, ["let", "x", "=", "1"]);
}

// Unicode identifiers are not supported yet.
#[test(LEXER)]
#[ignore]
fn splits_unicode() {
    let words: Vec<_> = "λ x".split_whitespace().collect();
    assert_eq!(words, ["λ", "x"]);
}

/// Not part of any group.
#[test]
fn stands_alone() {}

fn main() -> ExitCode {
    let args = HarnessArgs::from_env();
    let harness = kispec::harness_from_args(&TESTS, &args);
    if args.list {
        harness.list();
        return ExitCode::SUCCESS;
    }
    harness.run().report()
}
