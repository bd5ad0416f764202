//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "healing-hub")]
#[command(about = "Bulk import and clean up healing glossary terms", long_about = None)]
pub(crate) struct Cli {
    /// Path to the glossary database (overrides settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Field overrides for `update`. Omitted flags leave the field unchanged.
#[derive(Args, Clone, Default)]
pub(crate) struct UpdateArgs {
    /// New term name (regenerates the slug unless --slug is given)
    #[arg(long)]
    pub term: Option<String>,

    /// Explicit slug
    #[arg(long)]
    pub slug: Option<String>,

    /// Category (also sets niche unless --niche is given)
    #[arg(long)]
    pub category: Option<String>,

    /// Niche (also sets category unless --category is given)
    #[arg(long)]
    pub niche: Option<String>,

    /// Short definition; an empty value re-derives it from the definition
    #[arg(long)]
    pub short_definition: Option<String>,

    /// Long definition; an empty value synthesizes a placeholder
    #[arg(long)]
    pub definition: Option<String>,

    /// Replace synonyms (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub synonyms: Option<Vec<String>>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Import pasted glossary text or JSON from a file (or - for stdin)
    Import {
        /// Input file, or - to read stdin
        input: String,

        /// Parse, validate, and assign slugs without writing
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Print the result as JSON ({"success": true, "count": N} or {"error": "..."})
        #[arg(long)]
        json: bool,

        /// Label recorded in the import log (defaults to the file name)
        #[arg(long)]
        source: Option<String>,
    },

    /// Create a single term from a JSON object
    Add {
        /// JSON object, e.g. '{"term": "Reiki", "category": "Energy"}'
        json: String,
    },

    /// Edit a stored term
    Update {
        /// Term ID
        id: i64,

        #[command(flatten)]
        fields: UpdateArgs,
    },

    /// Find terms whose names differ only by case
    Duplicates {
        /// Only scan terms in this category or niche
        #[arg(long)]
        category: Option<String>,

        /// Print groups as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete terms by ID
    Delete {
        /// Term IDs to delete
        #[arg(required = true, num_args = 1..)]
        ids: Vec<i64>,

        /// Confirm deletion
        #[arg(long)]
        confirm: bool,
    },

    /// List stored terms
    List {
        /// Only show terms in this category or niche
        #[arg(long)]
        category: Option<String>,

        /// Maximum number of terms to show
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Show glossary statistics
    Stats,

    /// Delete and recreate the glossary database
    Reset {
        /// Confirm deletion
        #[arg(long)]
        confirm: bool,
    },

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and their effective values
    Show,

    /// Print the settings file path
    Path,
}
