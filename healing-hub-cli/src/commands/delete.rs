use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_delete(db_path: &Path, ids: &[i64], confirm: bool) -> Result<(), CliError> {
    let Some(conn) = crate::commands::open_existing(db_path)? else {
        return Ok(());
    };

    if !confirm {
        log::warn!("This will permanently delete {} term(s):", ids.len());
        for id in ids {
            match healing_hub_db::get_term(&conn, *id) {
                Ok(Some(term)) => log::info!("  #{} {} ({})", term.id, term.term, term.slug),
                Ok(None) => log::info!("  #{} (not found)", id),
                Err(e) => return Err(CliError::database(e.to_string())),
            }
        }
        log::info!("Re-run with --confirm to proceed.");
        return Ok(());
    }

    let removed = healing_hub_import::delete_terms(&conn, ids)?;
    log::info!(
        "{}",
        format!("Deleted {} term(s).", removed).if_supports_color(Stdout, |t| t.bold()),
    );
    if removed < ids.len() {
        log::info!("  {} ID(s) did not match any term.", ids.len() - removed);
    }

    Ok(())
}
