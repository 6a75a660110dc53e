use std::{
    error::Error,
    process::{ExitCode, Termination},
    time::Duration,
};

use crate::{formatter::FormatError, outcome::TestOutcome, plugin::PluginError};

pub type TestOutcomes<'t> = Vec<(&'t str, TestOutcome)>;

#[derive(Debug)]
#[non_exhaustive]
pub struct TestReport<'t, FmtError: 't, PluginErr> {
    /// Outcomes in completion order, empty if a plugin owned the run loop.
    pub outcomes: TestOutcomes<'t>,
    pub duration: Duration,
    pub fmt_errors: Vec<(FormatError, FmtError)>,
    pub plugin_errors: Vec<(PluginError, PluginErr)>,

    /// Lines plugins added to the summary.
    pub summary: Vec<String>,
}

impl<FmtError, PluginErr> TestReport<'_, FmtError, PluginErr> {
    /// Failure if any test failed or any plugin reported an error.
    pub fn exit_code(&self) -> ExitCode {
        let failed = self.outcomes.iter().any(|(_, outcome)| outcome.status.failed());
        match failed || !self.plugin_errors.is_empty() {
            true => ExitCode::FAILURE,
            false => ExitCode::SUCCESS,
        }
    }
}

impl<FmtError, PluginErr: Error> Termination for TestReport<'_, FmtError, PluginErr> {
    fn report(self) -> ExitCode {
        for (hook, err) in &self.plugin_errors {
            eprintln!("error: {hook}: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
        }
        self.exit_code()
    }
}
