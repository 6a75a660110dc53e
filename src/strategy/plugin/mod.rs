//! Hooking into the harness lifecycle.
//!
//! A plugin is told about the collected tests once filtering is done, may take
//! over the run loop so that no test body is executed, and may add lines to
//! the final summary. The [spec plugin](crate::spec::SpecPlugin) is the
//! plugin this crate ships.
//!
//! Plugins are passed to the harness by value. `Option<P>` is a plugin too, so
//! a plugin that is only active under some command line flag can be handed in
//! as-is: `None` behaves exactly like [`NoPlugin`].

use std::{
    convert::Infallible,
    fmt::{self, Display},
};

use crate::test::Test;

/// Who drives the run after collection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunLoop {
    /// The harness runs the collected tests.
    #[default]
    Default,

    /// A plugin has done all the work already, no test is executed.
    Owned,
}

/// The plugin hook an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginError {
    CollectionFinish,
    TerminalSummary,
}

impl Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginError::CollectionFinish => f.write_str("collection_finish"),
            PluginError::TerminalSummary => f.write_str("terminal_summary"),
        }
    }
}

pub trait HarnessPlugin<'t, Extra> {
    type Error;

    /// Called once with every collected test, in collection order.
    fn collection_finish(&mut self, tests: &[&'t Test<Extra>]) -> Result<(), Self::Error> {
        let _ = tests;
        Ok(())
    }

    /// Called right before tests would be executed.
    fn run_loop(&mut self) -> RunLoop {
        RunLoop::Default
    }

    /// Called after the run, to add lines to the summary.
    fn terminal_summary(&mut self, lines: &mut Vec<String>) -> Result<(), Self::Error> {
        let _ = lines;
        Ok(())
    }
}

/// A plugin that does nothing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NoPlugin;

impl<'t, Extra> HarnessPlugin<'t, Extra> for NoPlugin {
    type Error = Infallible;
}

impl<'t, Extra, P> HarnessPlugin<'t, Extra> for Option<P>
where
    P: HarnessPlugin<'t, Extra>,
{
    type Error = P::Error;

    fn collection_finish(&mut self, tests: &[&'t Test<Extra>]) -> Result<(), Self::Error> {
        match self {
            Some(plugin) => plugin.collection_finish(tests),
            None => Ok(()),
        }
    }

    fn run_loop(&mut self) -> RunLoop {
        match self {
            Some(plugin) => plugin.run_loop(),
            None => RunLoop::Default,
        }
    }

    fn terminal_summary(&mut self, lines: &mut Vec<String>) -> Result<(), Self::Error> {
        match self {
            Some(plugin) => plugin.terminal_summary(lines),
            None => Ok(()),
        }
    }
}
