//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use ciuchoteka_core::domain::Category;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ciuchoteka",
    bin_name = "ciuchoteka",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f457} Personal wardrobe tracker",
    long_about = "Ciuchoteka keeps a catalogue of your clothes and the outfits you \
                  wear, and tells you what each item really costs per wear.",
    after_help = "EXAMPLES:\n\
        \x20 ciuchoteka item add --name 'Rain jacket' --category outerwear --type jacket --cost 120 --photo jacket.jpg\n\
        \x20 ciuchoteka outfit add --photo today.jpg --item <ID> --item <ID>\n\
        \x20 ciuchoteka stats\n\
        \x20 ciuchoteka export --output ~/backups",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage clothing items.
    #[command(
        visible_alias = "i",
        about = "Manage clothing items",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ciuchoteka item add --name Chinos --category bottom --type trousers --photo chinos.jpg\n\
            \x20 ciuchoteka item list --category shoes\n\
            \x20 ciuchoteka item update <ID> --clear-cost"
    )]
    Item(ItemCommands),

    /// Manage outfits.
    #[command(
        visible_alias = "o",
        about = "Manage outfits",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ciuchoteka outfit add --photo today.jpg --item <ID>\n\
            \x20 ciuchoteka outfit add --photo party.jpg --date 2024-12-31\n\
            \x20 ciuchoteka outfit list"
    )]
    Outfit(OutfitCommands),

    /// Show wardrobe statistics.
    #[command(about = "Show wardrobe statistics")]
    Stats(StatsArgs),

    /// Show how much of the storage quota is used.
    #[command(about = "Show storage usage")]
    Storage,

    /// Write a JSON backup of the whole wardrobe.
    #[command(
        about = "Export a backup",
        after_help = "EXAMPLES:\n\
            \x20 ciuchoteka export\n\
            \x20 ciuchoteka export --output ~/backups"
    )]
    Export(ExportArgs),

    /// Replace the whole wardrobe with a backup.
    #[command(about = "Import a backup (replaces all data)")]
    Import(ImportArgs),

    /// Remove all data.
    #[command(about = "Delete all data")]
    Clear(ClearArgs),

    /// Initialise a Ciuchoteka configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 ciuchoteka init\n\
            \x20 ciuchoteka init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ciuchoteka completions bash > ~/.local/share/bash-completion/completions/ciuchoteka\n\
            \x20 ciuchoteka completions zsh  > ~/.zfunc/_ciuchoteka\n\
            \x20 ciuchoteka completions fish > ~/.config/fish/completions/ciuchoteka.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Ciuchoteka configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ciuchoteka config get storage.data_dir\n\
            \x20 ciuchoteka config list\n\
            \x20 ciuchoteka config path"
    )]
    Config(ConfigCommands),
}

// ── item ──────────────────────────────────────────────────────────────────────

/// Subcommands for `ciuchoteka item`.
#[derive(Debug, Subcommand)]
pub enum ItemCommands {
    /// Add a clothing item.
    Add(ItemAddArgs),

    /// List clothing items with usage.
    #[command(visible_alias = "ls")]
    List {
        /// Only show items in this category.
        #[arg(short = 'C', long = "category", value_name = "CATEGORY")]
        category: Option<Category>,
    },

    /// Show one item with its full statistics.
    Show {
        /// Item id.
        id: String,
    },

    /// Change some fields of an item.
    Update(ItemUpdateArgs),

    /// Delete an item and remove it from every outfit.
    #[command(visible_alias = "rm")]
    Delete {
        /// Item id.
        id: String,
    },
}

/// Arguments for `ciuchoteka item add`.
#[derive(Debug, Args)]
pub struct ItemAddArgs {
    /// Display name.
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: String,

    /// Category: outerwear, bottom, shoes, accessories or other.
    #[arg(short = 'C', long = "category", value_name = "CATEGORY")]
    pub category: Category,

    /// Free-text type, e.g. "jacket".
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub item_type: String,

    /// Purchase cost.
    #[arg(long = "cost", value_name = "AMOUNT")]
    pub cost: Option<f64>,

    /// Photo file (JPEG, PNG or WebP).
    #[arg(short = 'p', long = "photo", value_name = "FILE")]
    pub photo: PathBuf,
}

/// Arguments for `ciuchoteka item update`.
#[derive(Debug, Args)]
pub struct ItemUpdateArgs {
    /// Item id.
    pub id: String,

    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    #[arg(short = 'C', long = "category", value_name = "CATEGORY")]
    pub category: Option<Category>,

    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub item_type: Option<String>,

    /// New purchase cost.
    #[arg(long = "cost", value_name = "AMOUNT", conflicts_with = "clear_cost")]
    pub cost: Option<f64>,

    /// Forget the purchase cost.
    #[arg(long = "clear-cost")]
    pub clear_cost: bool,

    /// Replace the photo.
    #[arg(short = 'p', long = "photo", value_name = "FILE")]
    pub photo: Option<PathBuf>,
}

// ── outfit ────────────────────────────────────────────────────────────────────

/// Subcommands for `ciuchoteka outfit`.
#[derive(Debug, Subcommand)]
pub enum OutfitCommands {
    /// Record an outfit.
    Add(OutfitAddArgs),

    /// List outfits, newest first.
    #[command(visible_alias = "ls")]
    List,

    /// Change some fields of an outfit.
    Update(OutfitUpdateArgs),

    /// Delete an outfit.
    #[command(visible_alias = "rm")]
    Delete {
        /// Outfit id.
        id: String,
    },
}

/// Arguments for `ciuchoteka outfit add`.
#[derive(Debug, Args)]
pub struct OutfitAddArgs {
    /// Photo file (JPEG, PNG or WebP).
    #[arg(short = 'p', long = "photo", value_name = "FILE")]
    pub photo: PathBuf,

    /// When it was worn: RFC 3339 or YYYY-MM-DD (default: now).
    #[arg(short = 'd', long = "date", value_name = "DATE")]
    pub date: Option<String>,

    /// Item worn in this outfit (repeatable).
    #[arg(short = 'i', long = "item", value_name = "ID")]
    pub items: Vec<String>,
}

/// Arguments for `ciuchoteka outfit update`.
#[derive(Debug, Args)]
pub struct OutfitUpdateArgs {
    /// Outfit id.
    pub id: String,

    /// Replace the photo.
    #[arg(short = 'p', long = "photo", value_name = "FILE")]
    pub photo: Option<PathBuf>,

    /// New date: RFC 3339 or YYYY-MM-DD.
    #[arg(short = 'd', long = "date", value_name = "DATE")]
    pub date: Option<String>,

    /// Replace the item set (repeatable).
    #[arg(short = 'i', long = "item", value_name = "ID", conflicts_with = "clear_items")]
    pub items: Vec<String>,

    /// Remove every item from the outfit.
    #[arg(long = "clear-items")]
    pub clear_items: bool,
}

// ── stats / export / import / clear ───────────────────────────────────────────

/// Arguments for `ciuchoteka stats`.
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// How many items to rank (default: `stats.ranking_limit`).
    #[arg(short = 'n', long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

/// Arguments for `ciuchoteka export`.
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Directory to write the backup into (default: `export.directory`).
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,
}

/// Arguments for `ciuchoteka import`.
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Backup file to restore.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Replace data without asking")]
    pub yes: bool,
}

/// Arguments for `ciuchoteka clear`.
#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Delete data without asking")]
    pub yes: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ciuchoteka init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ciuchoteka completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ciuchoteka config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `storage.data_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_item_add() {
        let cli = Cli::parse_from([
            "ciuchoteka",
            "item",
            "add",
            "--name",
            "Boots",
            "--category",
            "Shoes",
            "--type",
            "boots",
            "--cost",
            "200",
            "--photo",
            "boots.jpg",
        ]);
        let Commands::Item(ItemCommands::Add(args)) = cli.command else {
            panic!("expected item add");
        };
        assert_eq!(args.category, Category::Shoes);
        assert_eq!(args.cost, Some(200.0));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = Cli::try_parse_from([
            "ciuchoteka", "item", "list", "--category", "hats",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cost_and_clear_cost_conflict() {
        let result = Cli::try_parse_from([
            "ciuchoteka", "item", "update", "abc", "--cost", "3", "--clear-cost",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn outfit_items_repeat() {
        let cli = Cli::parse_from([
            "ciuchoteka", "outfit", "add", "-p", "a.jpg", "-i", "x", "-i", "y",
        ]);
        let Commands::Outfit(OutfitCommands::Add(args)) = cli.command else {
            panic!("expected outfit add");
        };
        assert_eq!(args.items, vec!["x", "y"]);
        assert_eq!(args.date, None);
    }

    #[test]
    fn data_dir_is_global() {
        let cli = Cli::parse_from(["ciuchoteka", "storage", "--data-dir", "/tmp/w"]);
        assert_eq!(cli.global.data_dir, Some(PathBuf::from("/tmp/w")));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["ciuchoteka", "--quiet", "--verbose", "stats"]);
        assert!(result.is_err());
    }
}
