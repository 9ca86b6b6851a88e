//! CLI argument definitions for titlenorm.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "titlenorm",
    version,
    about = "Normalise event and venue titles to a canonical form",
    long_about = "Normalise free-form event, location, and venue titles into a\n\
                  canonical whitespace-delimited token form, so near-duplicate\n\
                  records (\"Sydney Entertainment Centre\" vs \"Syd Ent Centre\")\n\
                  reduce to one spelling for deduplication or indexing."
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
    /// Normalise text given as arguments, or stdin lines when omitted.
    Normalise(NormaliseArgs),

    /// List the built-in lexicon tables.
    Lexicons,
}

#[derive(Parser)]
pub struct NormaliseArgs {
    /// Text to normalise; multiple arguments are joined with a space.
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Read options from a JSON file; command-line flags still win.
    #[arg(long = "options", value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Keep stopwords instead of dropping them.
    #[arg(long = "keep-stopwords")]
    pub keep_stopwords: bool,

    /// Keep punctuation instead of treating it as a separator.
    #[arg(long = "keep-punctuation")]
    pub keep_punctuation: bool,

    /// Keep the original character case.
    #[arg(long = "no-lowercase")]
    pub no_lowercase: bool,

    /// Keep characters that are neither alphanumeric nor whitespace.
    #[arg(long = "keep-non-alphanumeric")]
    pub keep_non_alphanumeric: bool,

    /// Keep full state names instead of abbreviating them.
    #[arg(long = "keep-state-names")]
    pub keep_state_names: bool,

    /// Leave city abbreviations as-is.
    #[arg(long = "no-city-aliases")]
    pub no_city_aliases: bool,

    /// Leave long country names as-is.
    #[arg(long = "keep-country-names")]
    pub keep_country_names: bool,

    /// Spell out all-digit tokens as cardinal words.
    #[arg(long = "digits-to-words")]
    pub digits_to_words: bool,

    /// Leave 4-digit years in place instead of labelling them.
    #[arg(long = "no-year-label")]
    pub no_year_label: bool,

    /// Leave repeated multi-word phrases in place.
    #[arg(long = "no-collapse-phrases")]
    pub no_collapse_phrases: bool,

    /// Keep only the first occurrence of each distinct word.
    #[arg(long = "collapse-words")]
    pub collapse_words: bool,

    /// Longest repeated-phrase window considered, in words.
    #[arg(long = "max-window", value_name = "N")]
    pub max_window: Option<usize>,
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
