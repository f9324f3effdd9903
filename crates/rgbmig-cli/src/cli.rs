//! CLI argument definitions for rgbmig.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

/// Upstream of the consuming project.
pub const DEFAULT_REPO_URL: &str = "https://github.com/Rangi42/polishedcrystal.git";
/// Event-flag listing within the project tree.
pub const DEFAULT_EVENT_FLAGS_FILE: &str = "constants/event_flags.asm";
/// Grouped map-constant listing within the project tree.
pub const DEFAULT_MAP_CONSTANTS_FILE: &str = "constants/map_constants.asm";

#[derive(Parser)]
#[command(
    name = "rgbmig",
    version,
    about = "Derive save-data migration tables between project versions",
    long_about = "Derive save-data migration tables between two released versions\n\
                  of the project.\n\n\
                  Index tables are read from the constant listings of two branches\n\
                  and correlated by name; symbol files are pruned down to the\n\
                  labels the patching sources actually reference."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Map event-flag indexes from one branch to another.
    MapEvents(MapEventsArgs),

    /// Report the event-flag indexes a branch leaves unused.
    UnusedEvents(UnusedEventsArgs),

    /// Map (group, map) constants from one branch to another.
    MapTuples(MapTuplesArgs),

    /// Prune a debug symbol file down to referenced labels.
    FilterSym(FilterSymArgs),
}

#[derive(Parser)]
pub struct MapEventsArgs {
    /// Branch holding the old index assignment.
    #[arg(value_name = "OLD_BRANCH")]
    pub old_branch: String,

    /// Branch holding the new index assignment.
    #[arg(value_name = "NEW_BRANCH")]
    pub new_branch: String,

    /// Repository to clone the branches from.
    #[arg(long = "repo", value_name = "URL", default_value = DEFAULT_REPO_URL)]
    pub repo: String,

    /// Listing path within the repository.
    #[arg(long = "file", value_name = "PATH", default_value = DEFAULT_EVENT_FLAGS_FILE)]
    pub file: String,

    /// List names present in OLD_BRANCH but absent from NEW_BRANCH instead
    /// of rendering the mapping.
    #[arg(long = "diff")]
    pub diff: bool,

    /// Output format for the mapping.
    #[arg(long = "format", value_enum, default_value = "cpp")]
    pub format: OutputFormatArg,

    /// Version label of the old branch in rendered C++.
    #[arg(long = "from-version", value_name = "LABEL", default_value = "V7")]
    pub from_version: String,

    /// Version label of the new branch in rendered C++.
    #[arg(long = "to-version", value_name = "LABEL", default_value = "V8")]
    pub to_version: String,
}

#[derive(Parser)]
pub struct UnusedEventsArgs {
    /// Branch to scan for unused indexes.
    #[arg(value_name = "BRANCH")]
    pub branch: String,

    /// Repository to clone the branch from.
    #[arg(long = "repo", value_name = "URL", default_value = DEFAULT_REPO_URL)]
    pub repo: String,

    /// Listing path within the repository.
    #[arg(long = "file", value_name = "PATH", default_value = DEFAULT_EVENT_FLAGS_FILE)]
    pub file: String,

    /// Output format for the report.
    #[arg(long = "format", value_enum, default_value = "cpp")]
    pub format: OutputFormatArg,

    /// Values per row in the rendered array.
    #[arg(long = "per-line", value_name = "N", default_value_t = 10)]
    pub per_line: usize,
}

#[derive(Parser)]
pub struct MapTuplesArgs {
    /// Branch holding the old group/map assignment.
    #[arg(value_name = "OLD_BRANCH")]
    pub old_branch: String,

    /// Branch holding the new group/map assignment.
    #[arg(value_name = "NEW_BRANCH")]
    pub new_branch: String,

    /// Repository to clone the branches from.
    #[arg(long = "repo", value_name = "URL", default_value = DEFAULT_REPO_URL)]
    pub repo: String,

    /// Listing path within the repository.
    #[arg(long = "file", value_name = "PATH", default_value = DEFAULT_MAP_CONSTANTS_FILE)]
    pub file: String,

    /// List names present in OLD_BRANCH but absent from NEW_BRANCH instead
    /// of rendering the mapping.
    #[arg(long = "diff")]
    pub diff: bool,

    /// Output format for the mapping.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct FilterSymArgs {
    /// Symbol file to filter.
    #[arg(value_name = "INPUT_SYM")]
    pub input: PathBuf,

    /// Destination for the retained lines.
    #[arg(value_name = "OUTPUT_SYM")]
    pub output: PathBuf,

    /// Source roots scanned for string literals (repeatable).
    #[arg(long = "source-dir", value_name = "DIR", default_values_os_t = [
        PathBuf::from("src/patching"),
        PathBuf::from("src/core"),
    ])]
    pub source_dirs: Vec<PathBuf>,

    /// Extension of the scanned source files.
    #[arg(long = "extension", value_name = "EXT", default_value = "cpp")]
    pub extension: String,
}

/// Output format choices for the derivation subcommands.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// C++ source for paste-back into the patcher.
    Cpp,
    /// JSON for machine consumption.
    Json,
    /// Human-readable table.
    Table,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
