pub mod command;

use clap::{Arg, ArgAction, Command};

pub const BIN_NAME: &str = "cobra-scaffold";

/// Full command tree, shared by `main` and completion generation
pub fn build_cli() -> Command {
    let version = env!("CARGO_PKG_VERSION");

    Command::new(BIN_NAME)
        .about(format!("cobra-scaffold v{} - Scaffold Go command-line applications built on cobra", version))
        .long_about(
            "cobra-scaffold creates the skeleton of a cobra application (entry point, root \
            command and LICENSE) and then adds subcommands to it, registering each one in \
            the generated root command file."
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .help("Config file (default is $HOME/.cobra.yaml)")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .global(true)
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log every file operation to stderr")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .subcommand(command::init::spec())
        .subcommand(command::add::spec())
        .subcommand(command::completion::spec())
        .version(version)
}
