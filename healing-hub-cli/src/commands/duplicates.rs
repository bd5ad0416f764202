use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Report groups of terms whose names match ignoring case.
pub(crate) fn run_duplicates(
    db_path: &Path,
    category: Option<&str>,
    json: bool,
) -> Result<(), CliError> {
    let Some(conn) = crate::commands::open_existing(db_path)? else {
        return Ok(());
    };
    let groups = healing_hub_import::find_duplicates(&conn, category)?;

    if json {
        let rendered = serde_json::to_string_pretty(&groups)
            .map_err(|e| CliError::other(format!("Failed to render groups: {}", e)))?;
        println!("{}", rendered);
        return Ok(());
    }

    if groups.is_empty() {
        log::info!("No duplicate terms found.");
        return Ok(());
    }

    log::info!(
        "{}",
        format!("{} duplicate group(s)", groups.len()).if_supports_color(Stdout, |t| t.bold()),
    );
    for group in &groups {
        crate::log_blank();
        log::info!(
            "  {} ({})",
            group.name.if_supports_color(Stdout, |t| t.cyan()),
            group.count,
        );
        for member in &group.members {
            log::info!(
                "    #{:<6} {:<30} {:<30} {}",
                member.id,
                member.slug,
                member.category,
                member.created_at.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
    crate::log_blank();
    log::info!("Remove unwanted entries with 'healing-hub delete <ID>... --confirm'.");

    Ok(())
}
