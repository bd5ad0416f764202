use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Delete and recreate the glossary database.
pub(crate) fn run_reset(db_path: &Path, confirm: bool) -> Result<(), CliError> {
    if !confirm {
        log::warn!(
            "This will permanently delete the glossary database at:\n  {}",
            db_path.display(),
        );
        log::info!("Re-run with --confirm to proceed:");
        log::info!("  healing-hub reset --confirm");
        return Ok(());
    }

    if !db_path.exists() {
        log::info!("No glossary database found at {}", db_path.display());
        log::info!("Nothing to reset.");
        return Ok(());
    }

    std::fs::remove_file(db_path)
        .map_err(|e| CliError::other(format!("Failed to delete {}: {}", db_path.display(), e)))?;
    for suffix in ["-wal", "-shm"] {
        let mut sidecar = db_path.as_os_str().to_owned();
        sidecar.push(suffix);
        let _ = std::fs::remove_file(sidecar);
    }

    crate::commands::open_or_create(db_path)?;

    log::info!(
        "{}",
        "Glossary database reset.".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Path: {}", db_path.display());

    Ok(())
}
