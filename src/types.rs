//! Common types used throughout gendata
//!
//! This module contains the type lattice tags and other small enums
//! shared across the schema, formatting and CLI layers.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Tags
// ============================================================================

/// Inferred type of a schema node
///
/// The first twelve variants form the base lattice. `Date`, `Time`,
/// `DateTime` and `Duration` are string refinements that are only produced
/// when string subtype detection is switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeTag {
    Null,
    Bool,
    Int,
    Float,
    String,
    Object,
    Array,
    ArrayBool,
    ArrayInt,
    ArrayFloat,
    ArrayString,
    ArrayObject,
    Date,
    Time,
    DateTime,
    Duration,
}

impl TypeTag {
    /// The base lattice, in the order profiles list their mappings
    pub const BASE: [TypeTag; 12] = [
        TypeTag::Null,
        TypeTag::Bool,
        TypeTag::Int,
        TypeTag::Float,
        TypeTag::String,
        TypeTag::Object,
        TypeTag::Array,
        TypeTag::ArrayBool,
        TypeTag::ArrayInt,
        TypeTag::ArrayFloat,
        TypeTag::ArrayString,
        TypeTag::ArrayObject,
    ];

    /// String refinements
    pub const EXTENDED: [TypeTag; 4] = [
        TypeTag::Date,
        TypeTag::Time,
        TypeTag::DateTime,
        TypeTag::Duration,
    ];

    /// Wire name of the tag (matches the profile's typeMapping keys)
    pub fn as_str(self) -> &'static str {
        match self {
            TypeTag::Null => "null",
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::String => "string",
            TypeTag::Object => "object",
            TypeTag::Array => "array",
            TypeTag::ArrayBool => "arrayBool",
            TypeTag::ArrayInt => "arrayInt",
            TypeTag::ArrayFloat => "arrayFloat",
            TypeTag::ArrayString => "arrayString",
            TypeTag::ArrayObject => "arrayObject",
            TypeTag::Date => "date",
            TypeTag::Time => "time",
            TypeTag::DateTime => "dateTime",
            TypeTag::Duration => "duration",
        }
    }

    /// Any of the array tags
    pub fn is_array(self) -> bool {
        matches!(
            self,
            TypeTag::Array
                | TypeTag::ArrayBool
                | TypeTag::ArrayInt
                | TypeTag::ArrayFloat
                | TypeTag::ArrayString
                | TypeTag::ArrayObject
        )
    }

    /// A plain object (arrays of objects are not objects)
    pub fn is_object(self) -> bool {
        self == TypeTag::Object
    }

    /// Nodes with this tag carry children and become classes
    pub fn is_composite(self) -> bool {
        matches!(self, TypeTag::Object | TypeTag::ArrayObject)
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Data Format
// ============================================================================

/// Format of the sample data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    #[default]
    Json,
}

impl std::str::FromStr for DataFormat {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "json" => Ok(DataFormat::Json),
            other => Err(crate::error::Error::UnsupportedDataFormat {
                format: other.to_string(),
            }),
        }
    }
}

// ============================================================================
// Log Level
// ============================================================================

/// Log level for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
