mod cli;
mod code_generation;
mod project_management;
mod shared;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::cli::command;

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose { "cobra_scaffold=debug" } else { "cobra_scaffold=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time())
        .init();
}

fn main() -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("init", sub_matches)) => {
            command::init::action(sub_matches)
        }
        Some(("add", sub_matches)) => {
            command::add::action(sub_matches)
        }
        Some(("completion", sub_matches)) => {
            command::completion::action(sub_matches)
        }
        _ => unreachable!()
    }
}
