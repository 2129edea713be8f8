use std::path::Path;

use anyhow::Result;
use ghiblib::{config, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config, config_path: &Path) {
    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config_path.display());
    let exists = config_path.exists();
    println!("File exists: {}\n", if exists { "yes" } else { "no (using defaults)" });

    println!("Settings:");
    println!(
        "  library_path: {}",
        config
            .library_path
            .as_ref()
            .map_or_else(|| String::from("<not set>"), |p| p.display().to_string())
    );
    println!("  autoload: {}", config.autoload);
    println!("  logging.level: {:?}", config.logging.level);
    println!("  logging.coloured: {}", config.logging.coloured);

    println!("\nPriority: CLI args > ENV vars (GHIBLIB_*) > Config file > Defaults");
}

/// Show the config file path.
pub fn show_path(config_path: &Path) {
    println!("{}", config_path.display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config(config_path: &Path) -> Result<()> {
    if config::ensure_config_file(config_path)? {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure ghiblib.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
