use anyhow::Result;
use clap::Parser;
use ghiblib::{config, logging, Config};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "ghiblib", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the config file (default: ~/.config/ghiblib/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Default JSON library file for save and load
    #[arg(long, global = true)]
    library: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run the interactive film library menu (the default)
    ///
    /// Presents a numbered menu for adding, removing, updating, classifying,
    /// listing, saving and loading films. Choose 0 to exit.
    Menu,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults if it doesn't exist
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(config::config_file_path);
    let mut config = Config::load_from(&config_path)?;
    if let Some(library) = cli.library {
        config = config.with_library_path(library);
    }

    logging::init(&config.logging)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => commands::run_menu(&config)?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config, &config_path),
            ConfigAction::Path => commands::config::show_path(&config_path),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config(&config_path)?,
        },
    }

    Ok(())
}
