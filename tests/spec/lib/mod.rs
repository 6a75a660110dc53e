use std::{
    borrow::Cow,
    io,
    string::FromUtf8Error,
    sync::{Arc, Mutex},
};

use kispec::{
    formatter::pretty::PrettyFormatter,
    test::{Test, TestFnHandle, TestGroup, TestMeta, TestResult},
};

mod sanitize;
pub use sanitize::*;

#[derive(Debug)]
#[allow(dead_code)]
pub enum Error {
    Poison,
    FromUtf8(FromUtf8Error),
}

#[derive(Debug, Default, Clone)]
pub struct Buffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .0
            .lock()
            .map_err(|_| io::Error::other("poison error"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Buffer {
    pub fn try_to_string(&self) -> Result<String, Error> {
        let guard = self.0.lock().map_err(|_| Error::Poison)?;
        String::from_utf8(guard.to_vec()).map_err(Error::FromUtf8)
    }

    pub fn formatter(&self) -> PrettyFormatter<Buffer> {
        PrettyFormatter::default().with_target(self.clone())
    }
}

pub const PARSER: &[TestGroup] = &[TestGroup::documented(
    "parser",
    "\n    Parsing of literals.\n    ",
)];
pub const LEXER: &[TestGroup] = &[TestGroup::new("lexer")];

pub fn must_not_run() -> TestResult {
    panic!("test bodies must not run while writing a spec")
}

pub fn passes() -> TestResult {
    TestResult(Ok(()))
}

pub fn suite_test(
    name: &'static str,
    original_name: Option<&'static str>,
    docs: Option<&'static str>,
    groups: &'static [TestGroup],
    function: fn() -> TestResult,
) -> Test {
    Test::new(
        TestFnHandle::from_const_fn(function),
        TestMeta {
            name: Cow::Borrowed(name),
            original_name: original_name.map(Cow::Borrowed),
            docs: docs.map(Cow::Borrowed),
            groups: Cow::Borrowed(groups),
            ignore: false,
            should_panic: false,
            extra: (),
        },
    )
}

/// A small suite spread over two groups.
pub fn suite(function: fn() -> TestResult) -> Vec<Test> {
    vec![
        suite_test(
            "parser::number",
            Some("number"),
            Some("Parses numbers.\n        Integers and floats.\n"),
            PARSER,
            function,
        ),
        suite_test("parser::string", Some("string"), None, PARSER, function),
        suite_test("lexer::tokens", Some("tokens"), Some(" Splits input. "), LEXER, function),
    ]
}

pub const SUITE_SPEC: &str = "\
Test specification

parser
    Parsing of literals.
    number
        Parses numbers.
        Integers and floats.
    string
lexer
    tokens
        Splits input.

Generated by kispec
";
