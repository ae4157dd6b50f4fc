use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use noteport::api::Exporter;
use noteport::config::NoteportConfig;
use noteport::error::Result;
use noteport::logging::LogFacade;
use noteport::perms::PermissionReport;
use noteport::source::apple::AppleNotesSource;
use std::path::PathBuf;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Export { directory }) => handle_export(directory),
        Some(Commands::Check { directory }) => handle_check(directory),
        Some(Commands::Config { key, value }) => handle_config(key, value),
        None => handle_export(None),
    }
}

fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "noteport", "noteport").map(|dirs| dirs.config_dir().to_path_buf())
}

fn handle_export(directory: Option<PathBuf>) -> Result<()> {
    // CLI argument > config file > built-in documents default
    let directory = directory.or_else(|| {
        config_dir()
            .and_then(|dir| NoteportConfig::load(dir).ok())
            .and_then(|config| config.export_dir)
    });

    let exporter = Exporter::new(AppleNotesSource::new(), LogFacade);
    let count = exporter.export(directory)?;

    println!("{}", format!("Exported {} note(s).", count).green());
    Ok(())
}

fn handle_check(directory: PathBuf) -> Result<()> {
    print!("{}", PermissionReport::inspect(&directory));
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let Some(dir) = config_dir() else {
        println!("No config directory available on this platform.");
        return Ok(());
    };

    let mut config = NoteportConfig::load(&dir).unwrap_or_default();
    match (key.as_deref(), value) {
        (None, _) | (Some("export-dir"), None) => match &config.export_dir {
            Some(path) => println!("export-dir = {}", path.display()),
            None => println!("export-dir is not set"),
        },
        (Some("export-dir"), Some(v)) => {
            config.export_dir = Some(PathBuf::from(v));
            config.save(&dir)?;
            println!("{}", "Saved.".green());
        }
        (Some(other), _) => println!("Unknown config key: {}", other),
    }
    Ok(())
}
