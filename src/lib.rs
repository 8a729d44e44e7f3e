// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # gendata
//!
//! Generate typed data classes from a sample JSON document and a macro
//! template.
//!
//! ## Features
//!
//! - **Schema inference**: merge every element of the sample into one tree
//!   of typed nodes
//! - **Macro templates**: `{{Name}}`, `{{Type}}`, `{{Properties}}` and
//!   friends, validated up front with precise error offsets
//! - **Language profiles**: YAML type mappings for Go, PHP and any custom
//!   language
//! - **Split output**: one file per class when the profile asks for it
//! - **HTTP mode**: the same pipeline behind a small REST API
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gendata::{GenerateConfig, GenerateRequest, Generator};
//!
//! let generator = Generator::with_builtin_profiles()?;
//! let response = generator.generate(&GenerateRequest::new(
//!     "{{Properties}}{{Name.PascalCase}} {{Type}};{{/Properties}}",
//!     r#"{"id": 1, "tags": ["a"]}"#,
//!     GenerateConfig::for_lang("go"),
//! ))?;
//! assert_eq!(response.rendered_files[0].content, "Id int;Tags []string;");
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  sample JSON ──► schema (merge + lattice) ──► format (profile) ─┐
//!                                                                 ├──► render ──► files
//!  template ────► syntax (validate + expand) ─────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Type tags and small shared enums
pub mod types;

/// Schema inference from sample data
pub mod schema;

/// Identifier case conversion
pub mod naming;

/// Template macro validation and expansion
pub mod syntax;

/// Language profiles
pub mod profile;

/// Profile-driven naming and typing of schema nodes
pub mod format;

/// Template rendering
pub mod render;

/// Generation pipeline
pub mod generator;

/// Generation configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::{ConfigOverrides, GenerateConfig};
pub use format::{FormatOptions, Formatter};
pub use generator::{
    GenerateFileRequest, GenerateRequest, GenerateResponse, Generator, RenderedFile,
};
pub use profile::{load_profile, LangProfile, ProfileRegistry, TypeMapping};
pub use schema::{infer_schema, Node, SchemaInferrer};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
