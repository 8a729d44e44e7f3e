//! CLI module
//!
//! Command-line interface for the generator.
//!
//! # Commands
//!
//! - `gen` - Render a template against a sample document
//! - `schema` - Print the inferred schema tree
//! - `langs` - List supported languages
//! - `types` - List the type tags a profile maps
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, GenArgs, OutputFormat};
pub use runner::{build_registry, write_files, Runner};
pub use server::{router, serve, ServerConfig};
