//! Clap derive structures for the `armory` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// armory -- command-line shell for a weapon catalogue service
#[derive(Debug, Parser)]
#[command(
    name = "armory",
    version,
    about = "Browse and manage a weapon catalogue from the command line",
    long_about = "Browse, add, update, delete, and search weapon records on a\n\
        weapon catalogue REST service, and forward free-text prompts to its\n\
        classification and text-generation endpoints.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Server profile to use
    #[arg(long, short = 'p', env = "ARMORY_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Service base URL (overrides profile)
    #[arg(long, short = 's', env = "ARMORY_SERVER", global = true)]
    pub server: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "ARMORY_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "ARMORY_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (default: none)
    #[arg(long, env = "ARMORY_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// View and manage weapon records
    #[command(alias = "w")]
    Weapons(WeaponsArgs),

    /// Classify by keyword through the image-tagging endpoint
    #[command(alias = "classify")]
    Search {
        /// Keyword to classify (e.g. "rifle")
        keyword: String,
    },

    /// Send a prompt to the text-generation endpoint
    #[command(alias = "chat")]
    Ask {
        /// Prompt text; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
    },

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Weapons ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct WeaponsArgs {
    #[command(subcommand)]
    pub command: WeaponsCommand,
}

#[derive(Debug, Subcommand)]
pub enum WeaponsCommand {
    /// Show one weapon
    Get {
        /// Weapon ID
        id: String,
    },

    /// Check whether a weapon exists
    Exists {
        /// Weapon ID
        id: String,
    },

    /// List every weapon
    #[command(alias = "ls")]
    List,

    /// Add a weapon
    Add {
        #[command(flatten)]
        fields: WeaponFields,

        /// Read the weapon from a JSON file instead of flags
        #[arg(
            long,
            conflicts_with_all = [
                "name", "kind", "manufacturer", "caliber",
                "magazine_capacity", "fire_rate", "ammo_count", "images",
            ]
        )]
        from_file: Option<PathBuf>,
    },

    /// Update a weapon; unspecified fields keep their current value
    Update {
        /// Weapon ID
        id: String,

        #[command(flatten)]
        fields: WeaponFields,
    },

    /// Delete a weapon
    #[command(alias = "rm")]
    Delete {
        /// Weapon ID
        id: String,
    },
}

/// Weapon attributes as typed by the user. Numbers are checked when the
/// command runs.
#[derive(Debug, Default, Args)]
pub struct WeaponFields {
    /// Weapon name
    #[arg(long)]
    pub name: Option<String>,

    /// Weapon type (e.g. "Assault rifle")
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: Option<String>,

    /// Manufacturer
    #[arg(long)]
    pub manufacturer: Option<String>,

    /// Caliber (e.g. "5.56x45mm")
    #[arg(long)]
    pub caliber: Option<String>,

    /// Magazine capacity (whole number)
    #[arg(long)]
    pub magazine_capacity: Option<String>,

    /// Fire rate in rounds per minute (whole number)
    #[arg(long)]
    pub fire_rate: Option<String>,

    /// Ammunition count (whole number)
    #[arg(long)]
    pub ammo_count: Option<String>,

    /// Image URL
    #[arg(long)]
    pub images: Option<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or extend the config file with guided setup
    Init,

    /// Display the current configuration
    Show,

    /// Print the config file location
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
