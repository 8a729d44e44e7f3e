//! Language profiles
//!
//! A profile maps lattice tags to target-language type strings and tells
//! the formatter how to name classes and files.
//!
//! # Overview
//!
//! - `LangProfile` - one target language
//! - `TypeMapping` - tag to type string table
//! - `ProfileRegistry` - built-in and registered profiles, looked up by code or name

mod registry;
mod types;

pub use registry::{load_profile, load_profile_from_str, ProfileRegistry, BUILTIN_PROFILES};
pub use types::{LangProfile, TypeMapping};

#[cfg(test)]
mod tests;
