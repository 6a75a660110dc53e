use std::{io, path::PathBuf};

use thiserror::Error;

use crate::spec::HookError;

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("could not create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write test spec file {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{hook} callback failed")]
    Hook {
        hook: &'static str,
        #[source]
        source: HookError,
    },
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn messages_name_the_path_and_keep_the_source() {
        let err = SpecError::Write {
            path: PathBuf::from("/tmp/out/spec.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "could not write test spec file /tmp/out/spec.txt");
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("denied"));
    }

    #[test]
    fn hook_errors_name_the_hook() {
        let err = SpecError::Hook {
            hook: "spec_footer",
            source: "no footer today".into(),
        };
        assert_eq!(err.to_string(), "spec_footer callback failed");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("no footer today")
        );
    }
}
