use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    config::{GobridgeToml, Overrides, Settings},
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Go import paths to bridge (defaults to [source].packages)
    pub packages: Vec<String>,

    /// Path to gobridge.toml (defaults to ./gobridge.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root directory of the generated Java sources
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Java package the bridge package is nested in
    #[arg(long)]
    pub package_root: Option<String>,

    /// Read one package from this directory instead of GOPATH
    #[arg(long)]
    pub source_dir: Option<PathBuf>,
}

impl GenerateCommand {
    pub fn run(&self) -> Result<()> {
        let file = GobridgeToml::load(self.config.as_deref())
            .map_err(|e| *e)
            .unwrap_or_exit();
        let settings = Settings::resolve(
            file,
            Overrides {
                packages: self.packages.clone(),
                output: self.output.clone(),
                package_root: self.package_root.clone(),
                source_dir: self.source_dir.clone(),
            },
        );

        let report = ops::generate(&settings);
        report.render(&mut TerminalOutput::new());

        for (_, err) in report.into_failures() {
            eprintln!("{:?}", miette::Report::new(err));
        }

        Ok(())
    }
}
