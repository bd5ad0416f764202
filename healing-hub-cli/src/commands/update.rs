use std::path::Path;

use healing_hub_catalog::TermPatch;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::cli_types::UpdateArgs;

pub(crate) fn run_update(db_path: &Path, id: i64, fields: UpdateArgs) -> Result<(), CliError> {
    let patch = TermPatch {
        term: fields.term,
        slug: fields.slug,
        category: fields.category,
        niche: fields.niche,
        short_definition: fields.short_definition,
        definition: fields.definition,
        synonyms: fields.synonyms,
        recommended_tools: None,
    };

    if patch == TermPatch::default() {
        return Err(CliError::invalid_input("Nothing to update; pass at least one field flag"));
    }

    let Some(conn) = crate::commands::open_existing(db_path)? else {
        return Ok(());
    };
    let before = healing_hub_db::get_term(&conn, id)
        .map_err(|e| CliError::database(e.to_string()))?;
    let updated = healing_hub_import::update_term(&conn, id, patch)?;

    log::info!(
        "{} #{} {}",
        "Updated".if_supports_color(Stdout, |t| t.green()),
        updated.id,
        updated.term,
    );
    if let Some(before) = before.filter(|b| b.slug != updated.slug) {
        log::info!("  Slug: {} -> {}", before.slug, updated.slug);
    } else {
        log::info!("  Slug: {}", updated.slug);
    }

    Ok(())
}
