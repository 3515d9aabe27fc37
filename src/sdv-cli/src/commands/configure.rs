//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up sdv CLI defaults.

use crate::cli::PathArgs;
use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
///
/// # Arguments
/// * `paths` - Paths to persist as defaults (unset ones are left alone)
/// * `show` - If true, show current configuration
pub fn handle(paths: &PathArgs, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if config.update(paths) {
        config.save()?;
        println!("Configuration saved");
        show_config(&config);
    } else {
        show_usage();
    }

    Ok(())
}

/// Display the effective configuration
fn show_config(config: &Config) {
    let paths = config.resolve(&PathArgs::default());
    let origin = |configured: bool| if configured { "" } else { " (default)" };

    println!(
        "Data dir:    {}{}",
        paths.data_dir.display(),
        origin(config.data_dir.is_some())
    );
    println!(
        "Strings dir: {}{}",
        paths.strings_dir.display(),
        origin(config.strings_dir.is_some())
    );
    println!(
        "Output dir:  {}{}",
        paths.output_dir.display(),
        origin(config.output_dir.is_some())
    );

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: sdv configure --data-dir CONTENT/Data --strings-dir CONTENT/Strings");
    println!("   or: sdv configure --output-dir src/data");
    println!("   or: sdv configure --show");
    println!();
    println!("Note: point the directories at game content unpacked to JSON,");
    println!("      e.g. with StardewXnbHack.");
}
