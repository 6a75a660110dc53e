use std::{
    fmt,
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use log::info;

use crate::spec::{OutlineBlock, SpecError};

/// A finished spec document.
///
/// ```text
/// <header lines>
///
/// <outline blocks>
///
/// <footer lines>
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecDocument {
    pub header: Vec<String>,
    pub contents: Vec<OutlineBlock>,
    pub footer: Vec<String>,
}

impl fmt::Display for SpecDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.header {
            writeln!(f, "{line}")?;
        }
        writeln!(f)?;
        for block in &self.contents {
            write!(f, "{block}")?;
        }
        writeln!(f)?;
        for line in &self.footer {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl SpecDocument {
    pub fn write_to(&self, mut target: impl Write) -> io::Result<()> {
        write!(target, "{self}")?;
        target.flush()
    }

    /// Write the document to `path`, replacing any existing file.
    ///
    /// Missing parent directories are created.
    pub fn write_file(&self, path: &Path) -> Result<(), SpecError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| SpecError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        File::create(path)
            .and_then(|file| self.write_to(BufWriter::new(file)))
            .map_err(|source| SpecError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            "wrote test spec with {} entries to {}",
            self.contents.len(),
            path.display()
        );
        Ok(())
    }
}
