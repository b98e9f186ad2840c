//! Package directory discovery and whole-package extraction.

use std::{
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
};

use gobridge_core::Declaration;
use tracing::debug;

use crate::{
    ast::SourceFile,
    error::{Error, Result},
    extract::{Extractor, Visibility},
    parser::parse_source,
};

/// A parsed file and the path it was read from.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub path: PathBuf,
    pub source: SourceFile,
}

/// Every non-test Go file of one directory, in file-name order.
#[derive(Debug, Clone)]
pub struct ParsedPackage {
    pub dir: PathBuf,
    pub files: Vec<ParsedFile>,
}

/// Whether `path` names a Go test file (`*_test.go`).
pub fn is_test_file(path: &Path) -> bool {
    path.file_name()
        .and_then(OsStr::to_str)
        .is_some_and(|name| name.ends_with("_test.go"))
}

fn is_go_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "go")
}

/// Read and parse one Go file.
pub fn parse_file(path: &Path) -> Result<SourceFile> {
    let src = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_source(&src).map_err(|e| Error::syntax(e, path, &src))
}

/// Parse every `*.go` file directly inside `dir`, skipping test files.
///
/// The first read or syntax error aborts the whole package.
pub fn parse_package_dir(dir: &Path) -> Result<ParsedPackage> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if !path.is_file() || !is_go_file(&path) {
            continue;
        }
        if is_test_file(&path) {
            debug!(file = %path.display(), "skipping test file");
            continue;
        }
        paths.push(path);
    }
    paths.sort();

    let files = paths
        .into_iter()
        .map(|path| {
            let source = parse_file(&path)?;
            Ok(ParsedFile { path, source })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ParsedPackage {
        dir: dir.to_path_buf(),
        files,
    })
}

/// Extract one [`Declaration`] per file of the package in `dir`.
pub fn extract_package<V: Visibility>(
    dir: &Path,
    extractor: &Extractor<V>,
) -> Result<Vec<Declaration>> {
    let package = parse_package_dir(dir)?;
    Ok(package
        .files
        .iter()
        .map(|file| extractor.extract(&file.source, &file.source.package))
        .collect())
}

/// Resolve an import path to `$GOPATH/src/<import path>`.
pub fn locate_package(import_path: &str) -> Result<PathBuf> {
    package_dir(std::env::var_os("GOPATH").as_deref(), import_path)
}

/// Resolve an import path against an explicit GOPATH value.
///
/// Only the first entry of a path list is used.
pub fn package_dir(gopath: Option<&OsStr>, import_path: &str) -> Result<PathBuf> {
    let root = gopath
        .and_then(|value| std::env::split_paths(value).next())
        .filter(|root| !root.as_os_str().is_empty())
        .ok_or_else(|| Box::new(Error::GopathNotSet))?;
    Ok(root.join("src").join(import_path.trim_start_matches('/')))
}
