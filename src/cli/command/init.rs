use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

use crate::cli::command::shared::{absolutize, load_config, project_args, ProjectSettings};
use crate::project_management::scaffold::ProjectInitializer;

pub fn spec() -> Command {
    Command::new("init")
        .about("Initialize a cobra application")
        .long_about(
            "Initialize a cobra application in PATH (default: current directory).\n\
            \n\
            Creates:\n  \
            cmd/<app>/main.go   entry point (always rewritten)\n  \
            pkg/<app>/root.go   root command (kept if it already exists)\n  \
            LICENSE             license text (always rewritten)\n\
            \n\
            Re-running init never discards subcommands already registered in root.go."
        )
        .arg(
            Arg::new("path")
                .help("Project directory")
                .value_name("PATH")
                .default_value(".")
        )
        .args(project_args())
}

pub fn action(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let path = matches.get_one::<String>("path").map(String::as_str).unwrap_or(".");
    let root = absolutize(path)?;

    let settings = ProjectSettings::resolve(matches, &config, root)?;
    let registry = config.license_registry();
    let project = settings.project(&registry)?;

    println!("Initializing {} in {}", project.app_name, project.root().display());

    let report = ProjectInitializer::initialize(&project)
        .context("Failed to initialize project")?;

    println!("  ✓ Created {}", report.main_file.display());
    if report.root_created {
        println!("  ✓ Created {}", report.root_file.display());
    } else {
        println!("  • Kept existing {}", report.root_file.display());
    }
    println!("  ✓ Created {}", report.license_file.display());

    println!("[Success] {} is ready.", project.app_name);
    println!("Run 'cobra-scaffold add <name>' to add subcommands.");
    Ok(())
}
