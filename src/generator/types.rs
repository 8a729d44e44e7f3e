//! Generator request and response types

use crate::config::GenerateConfig;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::path::PathBuf;
use std::time::Duration;

/// One generation call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    /// Macro template
    pub tmpl: String,

    /// Sample data
    pub data: String,

    #[serde(default)]
    pub config: GenerateConfig,
}

impl GenerateRequest {
    pub fn new(tmpl: impl Into<String>, data: impl Into<String>, config: GenerateConfig) -> Self {
        Self {
            tmpl: tmpl.into(),
            data: data.into(),
            config,
        }
    }
}

/// A generation call whose inputs live on disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateFileRequest {
    pub tmpl_file: PathBuf,
    pub data_file: PathBuf,
    /// Optional config file; `config` is used when absent
    pub config_file: Option<PathBuf>,
    pub config: GenerateConfig,
}

/// One output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedFile {
    pub file_name: String,
    pub content: String,
}

/// Result of a generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub rendered_files: Vec<RenderedFile>,

    /// Wall-clock time of the call, serialized as nanoseconds
    #[serde(
        serialize_with = "serialize_nanos",
        deserialize_with = "deserialize_nanos"
    )]
    pub render_time: Duration,
}

impl GenerateResponse {
    /// Look up an output file by name
    pub fn file(&self, file_name: &str) -> Option<&RenderedFile> {
        self.rendered_files.iter().find(|f| f.file_name == file_name)
    }
}

fn serialize_nanos<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(duration.as_nanos() as u64)
}

fn deserialize_nanos<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_nanos)
}
