use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    config::{DEFAULT_SOURCE_PACKAGE, PackageSource},
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InspectCommand {
    /// Go import path to inspect
    #[arg(default_value = DEFAULT_SOURCE_PACKAGE)]
    pub package: String,

    /// Read the package from this directory instead of GOPATH
    #[arg(long)]
    pub source_dir: Option<PathBuf>,

    /// Print the declarations as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let source = match &self.source_dir {
            Some(dir) => PackageSource::Dir(dir.clone()),
            None => PackageSource::ImportPath(self.package.clone()),
        };
        let report = ops::inspect(&source).unwrap_or_exit();

        if self.json {
            let json = serde_json::to_string_pretty(&report.declarations)
                .wrap_err("Failed to serialize declarations")?;
            println!("{json}");
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
