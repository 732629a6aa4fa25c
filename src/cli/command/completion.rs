use std::io;
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};
use clap_complete::{generate, Shell};

use crate::cli::{build_cli, BIN_NAME};

pub fn spec() -> Command {
    Command::new("completion")
        .about("Generate shell completion scripts")
        .long_about(
            "Generate shell completion scripts for cobra-scaffold.\n\n\
            Installation examples:\n  \
            Bash:       cobra-scaffold completion bash > /usr/local/etc/bash_completion.d/cobra-scaffold\n  \
            Zsh:        cobra-scaffold completion zsh > ~/.zsh/completion/_cobra-scaffold\n  \
            Fish:       cobra-scaffold completion fish > ~/.config/fish/completions/cobra-scaffold.fish"
        )
        .arg(
            Arg::new("shell")
                .help("Shell type to generate completion for")
                .value_parser(clap::value_parser!(Shell))
                .required(true)
        )
}

pub fn action(matches: &ArgMatches) -> Result<()> {
    let shell = *matches.get_one::<Shell>("shell")
        .context("Shell argument is required")?;

    generate(shell, &mut build_cli(), BIN_NAME, &mut io::stdout());
    Ok(())
}
