use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::{Result, WrapErr};
use gobridge_core::create_file;
use tracing::info;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: Shell,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        let Some(path) = &self.output else {
            write_completions(self.shell, &mut io::stdout());
            return Ok(());
        };

        let mut file = create_file(path)
            .wrap_err_with(|| format!("failed to create '{}'", path.display()))?;
        write_completions(self.shell, &mut file);
        file.sync_all()
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        info!(shell = %self.shell, path = %path.display(), "wrote completions");
        Ok(())
    }
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_bash_script_names_the_binary() {
        let mut buf = Vec::new();

        write_completions(Shell::Bash, &mut buf);

        let script = String::from_utf8(buf).unwrap();
        assert!(script.contains("gobridge"));
        assert!(script.contains("generate"));
    }

    #[test]
    fn test_write_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("completions/gobridge.fish");
        let cmd = CompletionsCommand {
            shell: Shell::Fish,
            output: Some(path.clone()),
        };

        cmd.run().unwrap();

        assert!(fs::read_to_string(path).unwrap().contains("inspect"));
    }
}
