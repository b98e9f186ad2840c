mod completions;
mod generate;
mod inspect;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use inspect::InspectCommand;

/// Extension trait for exiting on diagnostics with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T, E> UnwrapOrExit<T> for std::result::Result<T, E>
where
    E: Into<miette::Report>,
{
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", e.into());
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "gobridge")]
#[command(version)]
#[command(about = "Generate React Native Java bridges for Go packages")]
pub(crate) struct Cli {
    /// Show debug logging (overridden by GOBRIDGE_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Inspect(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate bridge modules and packages from Go packages
    Generate(GenerateCommand),

    /// Show the exported functions found in a Go package
    Inspect(InspectCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "gobridge",
            "-v",
            "generate",
            "example.com/a",
            "example.com/b",
            "-o",
            "out",
            "--package-root",
            "com.acme",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.packages, vec!["example.com/a", "example.com/b"]);
                assert_eq!(cmd.output.as_deref(), Some(std::path::Path::new("out")));
                assert_eq!(cmd.package_root.as_deref(), Some("com.acme"));
            }
            _ => panic!("expected generate"),
        }
    }
}
