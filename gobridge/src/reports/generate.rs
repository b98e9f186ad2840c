//! Generate command report data structures.

use std::{
    collections::BTreeSet,
    path::{Path, PathBuf},
};

use gobridge_codegen_java::GeneratedBridge;

use super::output::{Output, Report};
use crate::ops::PackageError;

/// Result of one package of a generate run.
#[derive(Debug)]
pub struct PackageOutcome {
    /// Import path or directory the package was read from.
    pub label: String,
    pub result: Result<Vec<GeneratedBridge>, PackageError>,
}

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_root: PathBuf,
    pub packages: Vec<PackageOutcome>,
}

impl GenerateReport {
    /// Distinct files written by the run.
    pub fn generated_files(&self) -> usize {
        self.packages
            .iter()
            .filter_map(|p| p.result.as_ref().ok())
            .flatten()
            .flat_map(|bridge| [bridge.module.as_path(), bridge.package.as_path()])
            .collect::<BTreeSet<_>>()
            .len()
    }

    pub fn failed_packages(&self) -> usize {
        self.packages.iter().filter(|p| p.result.is_err()).count()
    }

    /// The failures of the run, by package label.
    pub fn into_failures(self) -> impl Iterator<Item = (String, PackageError)> {
        self.packages
            .into_iter()
            .filter_map(|p| p.result.err().map(|err| (p.label, err)))
    }

    fn display_path<'a>(&self, path: &'a Path) -> std::borrow::Cow<'a, str> {
        path.strip_prefix(&self.output_root)
            .unwrap_or(path)
            .to_string_lossy()
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for package in &self.packages {
            out.section(&package.label);
            match &package.result {
                Ok(bridges) if bridges.is_empty() => out.list_item("no exported functions"),
                Ok(bridges) => {
                    for bridge in bridges {
                        out.added_item(&self.display_path(&bridge.module));
                        out.added_item(&self.display_path(&bridge.package));
                    }
                }
                Err(_) => out.list_item("failed"),
            }
        }

        out.newline();
        out.key_value("Output", &self.output_root.display().to_string());
        out.preformatted(&format!(
            "Generated {} file(s) for {} of {} package(s)",
            self.generated_files(),
            self.packages.len() - self.failed_packages(),
            self.packages.len()
        ));
    }
}
