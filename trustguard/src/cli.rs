//! This file defines the command-line interface (CLI) for the trustguard application,
//! including all available commands and their arguments.
//! License: MIT OR Apache-2.0

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "trustguard",
    author = "Pythoughts Team",
    version = env!("CARGO_PKG_VERSION"),
    about = "Score content for spam risk and accounts for trust",
    long_about = "trustguard runs the content trust scoring engine from the command line. It classifies text with the heuristic spam classifier and computes bounded trust scores from account statistics, using the built-in weights or a YAML scoring configuration.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable all logging output.
    #[arg(long, short = 'q', global = true, help = "Suppress all log messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a scoring configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", global = true, env = "TRUSTGUARD_CONFIG", help = "Path to a scoring configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Specify the path to a custom YAML theme file.
    #[arg(long = "theme", value_name = "FILE", global = true, help = "Specify the path to a custom YAML theme file.")]
    pub theme: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `trustguard` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classifies content from a file or stdin with the spam classifier.
    #[command(about = "Classify content from a file or stdin for spam.")]
    Classify(ClassifyCommand),

    /// Computes a trust score from account statistics.
    #[command(about = "Compute a 0-100 trust score from account statistics.")]
    Trust(TrustCommand),

    /// Inspects the effective scoring configuration.
    #[command(subcommand, about = "Inspect the effective scoring configuration.")]
    Config(ConfigCommand),
}

/// Arguments for the `classify` command.
#[derive(Parser, Debug)]
pub struct ClassifyCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long = "input", short = 'i', value_name = "FILE", help = "Read content from a file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Identifier of the content's author, used only for event attribution.
    #[arg(long, short = 'a', value_name = "ID", default_value = "cli-user", help = "Author identifier recorded with spam events.")]
    pub author: String,

    #[arg(long = "account-age-days", value_name = "DAYS", help = "Age of the author's account in days.")]
    pub account_age_days: Option<f64>,

    #[arg(long = "previous-posts", value_name = "N", help = "Number of posts the author has published.")]
    pub previous_posts: Option<u32>,

    #[arg(long = "previous-reports", value_name = "N", help = "Number of moderation reports filed against the author.")]
    pub previous_reports: Option<u32>,

    #[arg(long, help = "The author's account is verified.")]
    pub verified: bool,

    /// Ignore any account flags and classify without history.
    #[arg(long = "no-metadata", help = "Classify without account history, ignoring account flags.")]
    pub no_metadata: bool,

    #[arg(long, help = "Print the result as JSON.")]
    pub json: bool,

    /// Append spam events as JSON lines to this file.
    #[arg(long = "audit-log", value_name = "FILE", help = "Append detected spam events to a JSON-lines file.")]
    pub audit_log: Option<PathBuf>,

    /// Exit with code 2 when the content is classified as spam.
    #[arg(long = "fail-on-spam", help = "Exit with code 2 when the content is spam.")]
    pub fail_on_spam: bool,
}

impl ClassifyCommand {
    /// True when any account flag was given on the command line.
    pub fn has_metadata_flags(&self) -> bool {
        self.account_age_days.is_some()
            || self.previous_posts.is_some()
            || self.previous_reports.is_some()
            || self.verified
    }
}

/// Arguments for the `trust` command.
#[derive(Parser, Debug)]
pub struct TrustCommand {
    #[arg(long = "account-age-days", value_name = "DAYS", default_value_t = 0.0)]
    pub account_age_days: f64,

    #[arg(long = "post-count", value_name = "N", default_value_t = 0.0)]
    pub post_count: f64,

    #[arg(long = "comment-count", value_name = "N", default_value_t = 0.0)]
    pub comment_count: f64,

    #[arg(long = "reputation-points", value_name = "N", default_value_t = 0.0)]
    pub reputation_points: f64,

    #[arg(long = "report-count", value_name = "N", default_value_t = 0.0)]
    pub report_count: f64,

    #[arg(long, help = "The account is verified.")]
    pub verified: bool,

    #[arg(long, help = "Print the result as JSON.")]
    pub json: bool,
}

/// Subcommands for the `config` command.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    #[command(about = "Print the effective scoring configuration as YAML.")]
    Show,
    #[command(about = "Print which configuration file is in effect.")]
    Path,
}
