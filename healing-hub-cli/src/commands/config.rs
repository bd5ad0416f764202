use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings::{Settings, settings_path};

/// Show the settings file and the effective values after defaults.
pub(crate) fn run_config_show(settings: &Settings, db_path: &Path) -> Result<(), CliError> {
    let path = settings_path();

    log::info!(
        "{}",
        "healing-hub Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let defaults = settings.normalize_defaults();
    log::info!("  Database:         {}", db_path.display());
    log::info!("  Default category: {}", defaults.category);
    log::info!("  Tool context:     {}", defaults.tool_context);

    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    println!("{}", settings_path().display());
    Ok(())
}
