//! Turning harness events into output.
//!
//! The harness calls into a [`TestFormatter`] while it runs, and into a
//! [`TestListFormatter`] while it lists. Every method has a no-op default, so a
//! formatter only implements the events it cares about. Events are passed as
//! small `Fmt*` structs so new fields can be added without breaking
//! formatters.
//!
//! Formatter errors never abort a run. The harness collects them next to the
//! event that failed (see [`FormatError`]) and hands them out in the report.

use std::{fmt, time::Duration};

use crate::{
    outcome::TestOutcome,
    plugin::RunLoop,
    test::{Test, TestMeta},
};

pub mod common;
pub mod pretty;

#[derive(Debug)]
#[non_exhaustive]
pub struct FmtRunInit<'t, Extra> {
    pub tests: &'t [Test<Extra>],
}

#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct FmtRunStart {
    pub active: usize,
    pub filtered_out: usize,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct FmtTestIgnored<'t, Extra> {
    pub meta: &'t TestMeta<Extra>,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct FmtTestStart<'t, Extra> {
    pub meta: &'t TestMeta<Extra>,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct FmtTestOutcome<'t, Extra> {
    pub meta: &'t TestMeta<Extra>,
    pub outcome: TestOutcome,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct FmtRunOutcomes<'t, 'o> {
    pub outcomes: &'o [(&'t str, TestOutcome)],
    pub collected: usize,
    pub filtered_out: usize,
    pub run_loop: RunLoop,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct FmtSummary<'s> {
    pub lines: &'s [String],
}

#[derive(Debug)]
#[non_exhaustive]
pub struct FmtInitListing<'t, Extra> {
    pub tests: &'t [Test<Extra>],
}

#[derive(Debug)]
#[non_exhaustive]
pub struct FmtListTest<'t, Extra> {
    pub meta: &'t TestMeta<Extra>,
    pub ignored: bool,
}

#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct FmtEndListing {
    pub active: usize,
    pub ignored: usize,
}

pub trait TestFormatter<'t, Extra: 't> {
    type Error;

    fn fmt_run_init(&mut self, data: FmtRunInit<'t, Extra>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_run_start(&mut self, data: FmtRunStart) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_test_ignored(&mut self, data: FmtTestIgnored<'t, Extra>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_test_start(&mut self, data: FmtTestStart<'t, Extra>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_test_outcome(&mut self, data: FmtTestOutcome<'t, Extra>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_run_outcomes(&mut self, data: FmtRunOutcomes<'t, '_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    /// Lines contributed by plugins, written after everything else.
    fn fmt_summary(&mut self, data: FmtSummary<'_>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }
}

pub trait TestListFormatter<'t, Extra: 't> {
    type Error;

    fn fmt_init_listing(&mut self, data: FmtInitListing<'t, Extra>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_list_test(&mut self, data: FmtListTest<'t, Extra>) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }

    fn fmt_end_listing(&mut self, data: FmtEndListing) -> Result<(), Self::Error> {
        let _ = data;
        Ok(())
    }
}

/// The formatter event that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    RunInit,
    RunStart,
    TestIgnored,
    TestStart,
    TestOutcome,
    RunOutcomes,
    Summary,
    InitListing,
    ListTest,
    EndListing,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FormatError::RunInit => "fmt_run_init",
            FormatError::RunStart => "fmt_run_start",
            FormatError::TestIgnored => "fmt_test_ignored",
            FormatError::TestStart => "fmt_test_start",
            FormatError::TestOutcome => "fmt_test_outcome",
            FormatError::RunOutcomes => "fmt_run_outcomes",
            FormatError::Summary => "fmt_summary",
            FormatError::InitListing => "fmt_init_listing",
            FormatError::ListTest => "fmt_list_test",
            FormatError::EndListing => "fmt_end_listing",
        };
        f.write_str(name)
    }
}

/// Collecting `(source, error)` pairs without interrupting the caller.
pub(crate) trait PushOnError<Source, E> {
    fn push_on_error(&mut self, source: Source, res: Result<(), E>);
}

impl<Source, E> PushOnError<Source, E> for Vec<(Source, E)> {
    fn push_on_error(&mut self, source: Source, res: Result<(), E>) {
        if let Err(err) = res {
            self.push((source, err));
        }
    }
}
