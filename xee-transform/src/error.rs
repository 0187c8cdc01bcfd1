use std::path::{Path, PathBuf};

use thiserror::Error;
use xee_interpreter::error::{Error as XeeError, SpannedError};
use xee_interpreter::xml::DocumentsError;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Not well-formed XML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        /// The text that failed to parse, kept for error reports.
        src: String,
        #[source]
        source: xot::ParseError,
    },
    #[error("Cannot compile stylesheet {}: {source}", path.display())]
    Stylesheet {
        path: PathBuf,
        src: String,
        #[source]
        source: SpannedError,
    },
    #[error("Invalid xsl:output in {}: {message}", path.display())]
    Output { path: PathBuf, message: String },
    #[error("Cannot load document {}: {source}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: DocumentsError,
    },
    #[error("Transform of {} failed: {source}", path.display())]
    Transform {
        path: PathBuf,
        #[source]
        source: SpannedError,
    },
    #[error("Cannot serialize result of {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: XeeError,
    },
    #[error("{0}")]
    Usage(String),
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path of the file the error is about, if there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Error::Io { path, .. }
            | Error::Parse { path, .. }
            | Error::Stylesheet { path, .. }
            | Error::Output { path, .. }
            | Error::Document { path, .. }
            | Error::Transform { path, .. }
            | Error::Serialize { path, .. } => Some(path),
            Error::Usage(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_names_input() {
        let error = Error::Document {
            path: PathBuf::from("in.xml"),
            source: DocumentsError::DuplicateUri("file:///in.xml".to_string()),
        };
        assert_eq!(error.path(), Some(Path::new("in.xml")));
        assert!(error.to_string().starts_with("Cannot load document in.xml: "));
    }

    #[test]
    fn test_usage_has_no_path() {
        assert_eq!(Error::Usage("usage".to_string()).path(), None);
    }
}
