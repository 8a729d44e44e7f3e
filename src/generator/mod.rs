//! Code generation pipeline
//!
//! Ties the stages together:
//!
//! 1. check inputs and resolve the language profile
//! 2. validate and expand the template
//! 3. decode the sample data and infer its schema tree
//! 4. format the tree for the profile
//! 5. render one file (or one file per class when the profile splits)
//!
//! A call either returns every file or a single error; nothing is written
//! anywhere by this module.

mod types;

pub use types::{GenerateFileRequest, GenerateRequest, GenerateResponse, RenderedFile};

use crate::config::GenerateConfig;
use crate::error::{Error, Result};
use crate::format::Formatter;
use crate::profile::ProfileRegistry;
use crate::render::{split_nodes, Renderer};
use crate::schema::SchemaInferrer;
use crate::types::DataFormat;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Name given to the user template in error messages
const TEMPLATE_NAME: &str = "template";

/// Runs generation requests against a profile registry
#[derive(Debug, Clone)]
pub struct Generator {
    registry: ProfileRegistry,
}

impl Generator {
    pub fn new(registry: ProfileRegistry) -> Self {
        Self { registry }
    }

    /// Generator over the built-in profiles
    pub fn with_builtin_profiles() -> Result<Self> {
        Ok(Self::new(ProfileRegistry::builtin()?))
    }

    pub fn registry(&self) -> &ProfileRegistry {
        &self.registry
    }

    /// Generate code from an in-memory template and sample
    pub fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let started = Instant::now();

        if request.tmpl.trim().is_empty() {
            return Err(Error::empty("template"));
        }
        if request.data.trim().is_empty() {
            return Err(Error::empty("data"));
        }

        let config = &request.config;
        let profile = config.resolve_profile(&self.registry)?;
        let renderer = Renderer::compile(TEMPLATE_NAME, &request.tmpl)?;

        let value: serde_json::Value = match config.data_format()? {
            DataFormat::Json => serde_json::from_str(&request.data)?,
        };

        let mut root = SchemaInferrer::new()
            .with_string_subtypes(config.detect_string_subtypes)
            .infer(&value)?;
        debug!(nodes = root.node_count(), root = %root.tag, "Inferred schema tree");

        let options = config.format_options();
        Formatter::new(&profile, &options).format(&mut root)?;

        let nodes = split_nodes(&root, profile.split_by_files);
        debug!(
            lang = %profile.code,
            split = profile.split_by_files,
            files = nodes.len(),
            "Rendering"
        );

        let mut rendered_files = Vec::with_capacity(nodes.len());
        let mut seen = HashSet::new();
        for node in nodes {
            let content = renderer.render(node, profile.split_by_files)?;
            let file_name = node.file_name.clone().unwrap_or_default();
            if !seen.insert(file_name.clone()) {
                warn!(file = %file_name, "Duplicate output file name; later file shadows earlier one on disk");
            }
            rendered_files.push(RenderedFile { file_name, content });
        }

        let render_time = started.elapsed();
        info!(
            lang = %profile.code,
            files = rendered_files.len(),
            elapsed_us = render_time.as_micros() as u64,
            "Generation complete"
        );

        Ok(GenerateResponse {
            rendered_files,
            render_time,
        })
    }

    /// Generate code from files on disk
    pub fn generate_from_files(&self, request: &GenerateFileRequest) -> Result<GenerateResponse> {
        let tmpl = read_input(&request.tmpl_file)?;
        let data = read_input(&request.data_file)?;
        let config = match &request.config_file {
            Some(path) => GenerateConfig::load(path)?,
            None => request.config.clone(),
        };
        self.generate(&GenerateRequest { tmpl, data, config })
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })
}

#[cfg(test)]
mod tests;
