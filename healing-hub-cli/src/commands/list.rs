use std::path::Path;

use healing_hub_core::truncate_with_ellipsis;
use healing_hub_db::TermQuery;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) fn run_list(
    db_path: &Path,
    category: Option<String>,
    limit: Option<u32>,
) -> Result<(), CliError> {
    let Some(conn) = crate::commands::open_existing(db_path)? else {
        return Ok(());
    };
    let terms = healing_hub_db::list_terms(&conn, &TermQuery { category, limit })
        .map_err(|e| CliError::database(format!("Failed to list terms: {}", e)))?;

    if terms.is_empty() {
        log::info!("No terms found.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!("{:<7} {:<30} {:<20} {}", "ID", "Slug", "Category", "Summary")
            .if_supports_color(Stdout, |t| t.bold()),
    );
    for term in &terms {
        log::info!(
            "{:<7} {:<30} {:<20} {}",
            term.id,
            truncate_with_ellipsis(&term.slug, 30),
            truncate_with_ellipsis(&term.category, 20),
            truncate_with_ellipsis(&term.short_definition, 60),
        );
    }
    crate::log_blank();
    log::info!("{} term(s)", terms.len());

    Ok(())
}
