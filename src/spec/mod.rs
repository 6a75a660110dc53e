//! Writing the collected suite down as a spec document instead of running it.
//!
//! The [`SpecPlugin`] is created from `--spec <path>` and handed to the
//! harness. Once collection is done it builds the [outline](outline) of the
//! collected tests, frames it with a header and a footer, writes the result
//! to the path and takes over the run loop so no test body is executed. The
//! summary then points at the written file.
//!
//! ```text
//! Test specification
//!
//! parser
//!     Parsing of literals.
//!     number
//!         Parses numbers.
//!
//! Generated by kispec
//! ```
//!
//! Every part of the document can be changed with callbacks, see
//! [`SpecPlugin::on_header`], [`SpecPlugin::on_contents`] and
//! [`SpecPlugin::on_footer`].

use std::{
    env,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use log::debug;
use regex::{Captures, Regex};

use crate::{
    args::HarnessArgs,
    plugin::{HarnessPlugin, RunLoop},
    test::Test,
};

mod document;
mod error;
mod hooks;
mod item;
pub mod outline;

pub use document::SpecDocument;
pub use error::SpecError;
pub use hooks::{ExtensionPoint, HookError, SpecHooks};
pub use item::{ChainNode, CollectedItem};
pub use outline::{Outline, OutlineBlock, build_outline};

pub const DEFAULT_HEADER: &str = "Test specification";
pub const DEFAULT_FOOTER: &str = "Generated by kispec";

#[derive(Debug)]
pub struct SpecPlugin<'h> {
    path: PathBuf,
    header: String,
    footer: String,
    hooks: SpecHooks<'h>,
    /// Set once the document made it to disk.
    written: bool,
}

impl<'h> SpecPlugin<'h> {
    /// A plugin writing to `path`.
    ///
    /// Environment variables (`$NAME` or `${NAME}`) are expanded first, unset
    /// ones are kept as written. Then a leading `~` is expanded to the home
    /// directory and relative paths are resolved against the current
    /// directory.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: normalize_path(path.as_ref()),
            header: DEFAULT_HEADER.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            hooks: SpecHooks::default(),
            written: false,
        }
    }

    /// The plugin requested on the command line, if any.
    ///
    /// Secondary workers of a distributed run never write the spec.
    pub fn from_args(args: &HarnessArgs) -> Option<Self> {
        let path = args.spec.as_ref()?;
        if !args.is_primary() {
            debug!("not writing a test spec from worker {:?}", args.worker_id);
            return None;
        }
        Some(Self::new(path))
    }

    /// Replace the first header line.
    pub fn with_header_line(self, header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..self
        }
    }

    /// Replace the first footer line.
    pub fn with_footer_line(self, footer: impl Into<String>) -> Self {
        Self {
            footer: footer.into(),
            ..self
        }
    }

    pub fn on_header<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut Vec<String>, &[CollectedItem<'_>]) -> Result<(), HookError> + 'h,
    {
        self.hooks.header.register(callback);
        self
    }

    pub fn on_contents<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut Vec<OutlineBlock>, &[CollectedItem<'_>]) -> Result<(), HookError> + 'h,
    {
        self.hooks.contents.register(callback);
        self
    }

    pub fn on_footer<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut Vec<String>, &[CollectedItem<'_>]) -> Result<(), HookError> + 'h,
    {
        self.hooks.footer.register(callback);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn hooks(&self) -> &SpecHooks<'h> {
        &self.hooks
    }

    /// Build the document for `items`, in header, contents, footer order.
    pub fn build(&mut self, items: &[CollectedItem<'_>]) -> Result<SpecDocument, SpecError> {
        let mut header = vec![self.header.clone()];
        self.hooks.header.dispatch(&mut header, items)?;

        let mut contents = Outline::from_items(items).blocks;
        self.hooks.contents.dispatch(&mut contents, items)?;

        let mut footer = vec![self.footer.clone()];
        self.hooks.footer.dispatch(&mut footer, items)?;

        Ok(SpecDocument {
            header,
            contents,
            footer,
        })
    }

    /// Build the document for `items` and write it.
    pub fn generate(&mut self, items: &[CollectedItem<'_>]) -> Result<SpecDocument, SpecError> {
        let document = self.build(items)?;
        document.write_file(&self.path)?;
        Ok(document)
    }
}

impl<'t, Extra> HarnessPlugin<'t, Extra> for SpecPlugin<'_> {
    type Error = SpecError;

    fn collection_finish(&mut self, tests: &[&'t Test<Extra>]) -> Result<(), Self::Error> {
        let items: Vec<_> = tests
            .iter()
            .map(|test| CollectedItem::from(&test.meta))
            .collect();
        self.generate(&items)?;
        self.written = true;
        Ok(())
    }

    fn run_loop(&mut self) -> RunLoop {
        RunLoop::Owned
    }

    fn terminal_summary(&mut self, lines: &mut Vec<String>) -> Result<(), Self::Error> {
        if self.written {
            lines.push(format!("generated test spec file: {}", self.path.display()));
        }
        Ok(())
    }
}

static VARIABLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\w+|\{[^}]*\})").expect("variable pattern is valid"));

fn expand_vars(text: &str) -> String {
    VARIABLE
        .replace_all(text, |caps: &Captures| {
            let name = caps[1].trim_start_matches('{').trim_end_matches('}');
            env::var(name).unwrap_or_else(|_| caps[0].to_string())
        })
        .into_owned()
}

fn normalize_path(path: &Path) -> PathBuf {
    let path = match path.to_str() {
        Some(text) => PathBuf::from(expand_vars(text)),
        None => path.to_path_buf(),
    };
    let expanded = match (path.strip_prefix("~"), env::var_os("HOME")) {
        (Ok(rest), Some(home)) => PathBuf::from(home).join(rest),
        _ => path.clone(),
    };
    // Only an empty path fails here, it is left for the writer to report.
    std::path::absolute(&expanded).unwrap_or(expanded)
}
