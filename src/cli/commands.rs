//! CLI commands and argument parsing

use crate::types::LogLevel;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Generate typed data classes from sample JSON and macro templates
#[derive(Parser, Debug)]
#[command(name = "gendata")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for listings and responses
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LogLevel,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level after `--verbose`
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a template against a sample document
    Gen(GenArgs),

    /// Print the inferred schema tree of a sample document
    Schema {
        /// Sample data file (JSON)
        #[arg(short, long)]
        data_file: PathBuf,

        /// Refine strings into date/time/duration types
        #[arg(long)]
        detect_string_subtypes: bool,
    },

    /// List supported languages
    Langs {
        /// Only the language with this code
        #[arg(long)]
        code: Option<String>,

        /// Only the language with this name
        #[arg(long)]
        name: Option<String>,
    },

    /// List the type tags a profile must map
    Types,

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8081")]
        port: u16,

        /// Extra profile files (YAML) to register next to the built-in ones
        #[arg(long = "profile")]
        profiles: Vec<PathBuf>,
    },
}

/// Arguments of the `gen` command
#[derive(Args, Debug, Clone, Default)]
pub struct GenArgs {
    /// Template file
    #[arg(short, long)]
    pub template_file: PathBuf,

    /// Sample data file (JSON)
    #[arg(short, long)]
    pub data_file: PathBuf,

    /// Config file (YAML or JSON)
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,

    /// Target language code or name (overrides the config)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Custom profile file (YAML), registered before resolving the language
    #[arg(long)]
    pub profile: Option<PathBuf>,

    /// Class name of the root node
    #[arg(long)]
    pub root_class_name: Option<String>,

    /// Prefix added to every class name
    #[arg(long)]
    pub prefix_class_name: Option<String>,

    /// Suffix added to every class name
    #[arg(long)]
    pub suffix_class_name: Option<String>,

    /// Sort properties by key
    #[arg(long)]
    pub sort_properties: bool,

    /// Refine strings into date/time/duration types
    #[arg(long)]
    pub detect_string_subtypes: bool,

    /// Directory to write files into (prints to stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Human-readable output
    Pretty,
}
