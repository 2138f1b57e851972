//! Shell completion generation command.

use std::io;

use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;

const BIN_NAME: &str = "linkchain";

/// Generate shell completion scripts.
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        if !global.quiet {
            eprintln!("# Generating {} completion script", self.shell);
            match self.shell {
                Shell::Bash => {
                    eprintln!(
                        "#   linkchain completions bash > ~/.local/share/bash-completion/completions/linkchain"
                    );
                }
                Shell::Zsh => {
                    eprintln!("#   linkchain completions zsh > ~/.zsh/completions/_linkchain");
                }
                Shell::Fish => {
                    eprintln!(
                        "#   linkchain completions fish > ~/.config/fish/completions/linkchain.fish"
                    );
                }
                _ => {}
            }
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
