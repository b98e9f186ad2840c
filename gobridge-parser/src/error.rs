use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::parser::SyntaxError;

/// Result type for extraction (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(code(gobridge::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("syntax error in '{}': {message}", .path.display())]
    #[diagnostic(code(gobridge::syntax_error))]
    Syntax {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: SourceSpan,
        message: String,
    },

    #[error("GOPATH is not set")]
    #[diagnostic(
        code(gobridge::gopath_not_set),
        help("set GOPATH or pass --source-dir with the package directory")
    )]
    GopathNotSet,
}

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Attach the file name and contents to a syntax error.
    pub(crate) fn syntax(err: SyntaxError, path: &Path, src: &str) -> Box<Self> {
        Box::new(Error::Syntax {
            path: path.to_path_buf(),
            src: NamedSource::new(path.display().to_string(), src.to_string()),
            span: err.span.into(),
            message: err.message,
        })
    }
}
