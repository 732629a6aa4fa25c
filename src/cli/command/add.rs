use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches};

use crate::cli::command::shared::{absolutize, load_config, project_args, ProjectSettings};
use crate::project_management::scaffold::{Command, CommandInjector};
use crate::shared::utils::diff::show_diff;

pub fn spec() -> clap::Command {
    clap::Command::new("add")
        .about("Add a subcommand to a cobra application")
        .long_about(
            "Generate pkg/<app>/commands/<name>.go and register it in pkg/<app>/root.go.\n\
            \n\
            The project must have been created with 'cobra-scaffold init'. Commands are \
            registered in the order they are added. Adding the same name twice registers \
            it twice.\n\
            \n\
            Runs against the same project must not overlap: root.go is rewritten without locking."
        )
        .arg(
            Arg::new("name")
                .help("Command name (letters, digits and underscores)")
                .value_name("NAME")
                .required(true)
        )
        .arg(
            Arg::new("parent")
                .short('p')
                .long("parent")
                .help("Parent command name (recorded only; commands are registered on the root command)")
                .value_name("PARENT")
        )
        .arg(
            Arg::new("path")
                .long("path")
                .help("Project directory")
                .value_name("DIR")
                .default_value(".")
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .help("Show the change to root.go without writing any file")
                .action(ArgAction::SetTrue)
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

    let name = matches.get_one::<String>("name")
        .context("Command name is required")?;
    let parent = matches.get_one::<String>("parent").cloned();
    if let Some(parent) = &parent {
        eprintln!(
            "⚠️  Nested commands are not supported yet; '{}' will be registered on the root command, not under '{}'.",
            name, parent
        );
    }
    let command = Command::new(name.clone(), parent, &project)?;

    if matches.get_flag("dry-run") {
        return dry_run(&command);
    }

    let report = CommandInjector::add_command(&command)
        .with_context(|| format!("Failed to add command '{}'", command.cmd_name))?;

    println!("  ✓ Created {}", report.command_file.display());
    if report.import_added {
        println!("  ✓ Imported {} in {}", project.commands_import_path(), report.root_file.display());
    }
    if report.registered {
        println!("  ✓ Registered {} in {}", command.builder_symbol(), report.root_file.display());
    } else {
        eprintln!(
            "⚠️  No subcommands marker in {}; add 'rootCmd.AddCommand(commands.{}())' by hand.",
            report.root_file.display(),
            command.builder_symbol()
        );
    }

    println!("[Success] {} added to {}.", command.cmd_name, project.app_name);
    Ok(())
}

fn dry_run(command: &Command) -> Result<()> {
    let root_file: PathBuf = command.project.root_file();
    let old = CommandInjector::read_root_file(command)?;
    // Render anyway so template errors surface before a real run
    CommandInjector::render_command_file(command)?;
    let injection = CommandInjector::inject_command(&old, command)?;

    println!("Would create {}", command.file().display());
    println!("Changes to {}:", root_file.display());
    println!("---");
    show_diff(&String::from_utf8_lossy(&old), &String::from_utf8_lossy(&injection.content));
    println!("---");
    println!("[Dry run] No files were written.");
    Ok(())
}
