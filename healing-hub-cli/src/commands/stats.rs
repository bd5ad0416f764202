use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_stats(db_path: &Path) -> Result<(), CliError> {
    let Some(conn) = crate::commands::open_existing(db_path)? else {
        return Ok(());
    };

    let stats = healing_hub_db::term_stats(&conn)
        .map_err(|e| CliError::database(format!("Failed to query glossary stats: {}", e)))?;

    log::info!(
        "{}",
        "Glossary Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Terms:          {:>8}", stats.terms);
    log::info!("  Synonyms:       {:>8}", stats.synonyms);
    log::info!("  Tool links:     {:>8}", stats.tool_links);
    log::info!("  Imports:        {:>8}", stats.imports);

    if !stats.categories.is_empty() {
        crate::log_blank();
        log::info!("  By category:");
        for entry in &stats.categories {
            log::info!("    {:<24} {:>6}", entry.category, entry.terms);
        }
    }

    let logs = healing_hub_db::list_import_logs(&conn, Some(5))
        .map_err(|e| CliError::database(format!("Failed to query import log: {}", e)))?;
    if !logs.is_empty() {
        crate::log_blank();
        log::info!("  Recent imports:");
        for entry in &logs {
            log::info!(
                "    {}  {:<9} {:>5}  {}",
                entry.imported_at.if_supports_color(Stdout, |t| t.dimmed()),
                entry.source_format,
                entry.records_created,
                entry.source_name,
            );
        }
    }

    Ok(())
}
