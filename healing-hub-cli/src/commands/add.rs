use std::path::Path;

use healing_hub_catalog::{ImportTerm, NormalizeDefaults};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Create one term from a JSON object given on the command line.
pub(crate) fn run_add(
    db_path: &Path,
    json: &str,
    defaults: &NormalizeDefaults,
) -> Result<(), CliError> {
    let item: ImportTerm = serde_json::from_str(json)
        .map_err(|e| CliError::invalid_input(format!("Invalid JSON: {}", e)))?;

    let conn = crate::commands::open_or_create(db_path)?;
    let created = healing_hub_import::create_term(&conn, item, defaults)?;

    log::info!(
        "{} #{} {}",
        "Created".if_supports_color(Stdout, |t| t.green()),
        created.id,
        created.term,
    );
    log::info!("  Slug:     {}", created.slug);
    log::info!("  Category: {}", created.category);
    log::info!("  Summary:  {}", created.short_definition);

    Ok(())
}
