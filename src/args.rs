//! Command line arguments of a harness binary.
//!
//! The flags follow the ones `cargo test` forwards to libtest, so a test
//! target with `harness = false` can be driven the usual way, plus `--spec`
//! to write the suite down instead of running it.

use std::{ffi::OsString, num::NonZeroUsize, path::PathBuf};

use clap::Parser;

use crate::formatter::common::color::ColorSetting;

#[derive(Debug, Default, Clone, PartialEq, Eq, Parser)]
#[command(about = "Run the tests of this suite or write them down as a spec")]
pub struct HarnessArgs {
    /// Only collect tests whose name contains one of these filters.
    #[arg(value_name = "FILTER")]
    pub filters: Vec<String>,

    /// Match filters and skips against the whole test name.
    #[arg(long)]
    pub exact: bool,

    /// Drop tests whose name contains this (repeatable).
    #[arg(long, value_name = "FILTER")]
    pub skip: Vec<String>,

    /// List the collected tests instead of running them.
    #[arg(long)]
    pub list: bool,

    /// Number of threads used for running tests.
    #[arg(long, value_name = "N")]
    pub test_threads: Option<NonZeroUsize>,

    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorSetting,

    /// Create a test spec file at the given path instead of running the tests.
    #[arg(long, value_name = "path")]
    pub spec: Option<PathBuf>,

    /// Set on secondary workers of a distributed run.
    #[arg(long, hide = true)]
    pub worker_id: Option<String>,
}

impl HarnessArgs {
    /// Parse the arguments of the current process, exiting on invalid input.
    pub fn from_env() -> Self {
        Self::parse()
    }

    pub fn try_from_iter<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    /// Whether this process is the primary one of a (possibly distributed) run.
    pub fn is_primary(&self) -> bool {
        self.worker_id.is_none()
    }
}
