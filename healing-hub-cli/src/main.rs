//! healing-hub CLI
//!
//! Operator tool for bulk-importing glossary terms, editing them, and
//! cleaning up duplicates.

mod cli_types;
mod commands;
mod error;
mod logging;
mod settings;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = settings::load_settings()?;
    let db_path = settings.resolve_db_path(cli.db);

    match cli.command {
        Commands::Import {
            input,
            dry_run,
            json,
            source,
        } => commands::import::run_import(
            &db_path,
            &input,
            commands::import::ImportArgs {
                dry_run,
                json,
                source,
                defaults: settings.normalize_defaults(),
            },
        ),
        Commands::Add { json } => {
            commands::add::run_add(&db_path, &json, &settings.normalize_defaults())
        }
        Commands::Update { id, fields } => commands::update::run_update(&db_path, id, fields),
        Commands::Duplicates { category, json } => {
            commands::duplicates::run_duplicates(&db_path, category.as_deref(), json)
        }
        Commands::Delete { ids, confirm } => commands::delete::run_delete(&db_path, &ids, confirm),
        Commands::List { category, limit } => commands::list::run_list(&db_path, category, limit),
        Commands::Stats => commands::stats::run_stats(&db_path),
        Commands::Reset { confirm } => commands::reset::run_reset(&db_path, confirm),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&settings, &db_path),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}
