use std::io::Read;
use std::path::Path;

use healing_hub_catalog::NormalizeDefaults;
use healing_hub_import::{
    ImportOptions, ImportProgress, ImportResponse, LogProgress, SilentProgress, import_batch,
};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

pub(crate) struct ImportArgs {
    pub dry_run: bool,
    pub json: bool,
    pub source: Option<String>,
    pub defaults: NormalizeDefaults,
}

/// Import a batch from a file or stdin (`-`).
pub(crate) fn run_import(db_path: &Path, input: &str, args: ImportArgs) -> Result<(), CliError> {
    let raw = read_input(input)?;
    let source_name = args.source.unwrap_or_else(|| match input {
        "-" => "stdin".to_string(),
        path => Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string()),
    });

    let options = ImportOptions {
        source_name,
        defaults: args.defaults,
        dry_run: args.dry_run,
    };

    let conn = crate::commands::open_or_create(db_path)?;
    let progress: &dyn ImportProgress = if args.json {
        &SilentProgress
    } else {
        &LogProgress
    };
    let result = import_batch(&conn, &raw, &options, Some(progress));

    if args.json {
        let response = ImportResponse::from_result(&result);
        let rendered = serde_json::to_string_pretty(&response)
            .map_err(|e| CliError::other(format!("Failed to render response: {}", e)))?;
        println!("{}", rendered);
        return result.map(|_| ()).map_err(Into::into);
    }

    let outcome = result?;
    crate::log_blank();
    for term in &outcome.terms {
        match term.id {
            Some(id) => log::info!("  #{:<6} {} -> {}", id, term.term, term.slug),
            None => log::info!("  {:<7} {} -> {}", "(new)", term.term, term.slug),
        }
    }
    crate::log_blank();

    let summary = if outcome.dry_run {
        format!(
            "Dry run: {} {} record(s) would be imported",
            outcome.count, outcome.format
        )
    } else {
        format!("Imported {} {} record(s)", outcome.count, outcome.format)
    };
    log::info!("{}", summary.if_supports_color(Stdout, |t| t.bold()));

    Ok(())
}

fn read_input(input: &str) -> Result<String, CliError> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| CliError::invalid_input(format!("Failed to read {}: {}", input, e)))
    }
}
