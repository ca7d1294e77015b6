//! CLI argument parsing using clap.
//!
//! clap routes to the `resolver` command and owns the global options. The
//! resolver flags themselves are captured raw and parsed by
//! [`crate::core::parse_invocation`], since clustered short flags, aliasing
//! and the `--args` sub-list follow their own rules.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// Usage text for the `resolver` command.
pub const RESOLVER_USAGE: &str = "\
Usage: graphql-alchemist resolver [OPTIONS] -n NAME

Create a new file with the named resolver inside using a boilerplate

Options:
  -n, --name <NAME>            Set the name of the resolver (must be specified)
  -a, --async                  Declare the resolver as an async function
  -p, --parent                 Enable the parent argument (disabled by default)
  -i, --info                   Enable the info argument (disabled by default)
      --args <name:type>...    Space-separated resolver arguments; the list ends
                               at the next flag. Leave out for a resolver without args
  -q, --query                  Set the resolver type to query (default value)
  -m, --mutation               Set the resolver type to mutation
  -s, --subscription           Set the resolver type to subscription
  -h, --help                   Print this help

Short flags may be combined: -api equals -a -p -i.
";

/// `graphql-alchemist` - GraphQL boilerplate generator
///
/// Generates opinionated GraphQL resolver source files.
#[derive(Parser, Debug)]
#[command(name = "graphql-alchemist", version, about, long_about = None)]
#[command(disable_help_subcommand = true, arg_required_else_help = true)]
pub struct Args {
    /// Base directory for generated files (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Diagnostic log level, written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new file with the named resolver inside using a boilerplate
    #[command(disable_help_flag = true)]
    Resolver {
        /// Resolver flags (run `graphql-alchemist resolver -h` for details)
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "FLAGS")]
        tokens: Vec<String>,
    },
}

/// Verbosity for diagnostic logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    /// No diagnostics.
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}
