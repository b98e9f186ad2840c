//! Core operations.
//!
//! Extraction and generation for the gobridge commands, separated from
//! argument parsing and output rendering.

pub mod generate;
pub mod inspect;

use std::path::PathBuf;

use gobridge_codegen_java::EmitError;
use miette::Diagnostic;
use thiserror::Error;

use crate::config::PackageSource;

pub use generate::generate;
pub use inspect::inspect;

/// Failure of one package; other packages of the run are unaffected.
#[derive(Debug, Error, Diagnostic)]
pub enum PackageError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Extract(gobridge_parser::Error),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl From<Box<gobridge_parser::Error>> for PackageError {
    fn from(err: Box<gobridge_parser::Error>) -> Self {
        Self::Extract(*err)
    }
}

/// Directory holding the Go files of `source`.
pub fn package_dir(source: &PackageSource) -> Result<PathBuf, PackageError> {
    match source {
        PackageSource::Dir(dir) => Ok(dir.clone()),
        PackageSource::ImportPath(path) => Ok(gobridge_parser::locate_package(path)?),
    }
}
