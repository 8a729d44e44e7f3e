//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, GenArgs, OutputFormat};
use crate::cli::server::{serve, ServerConfig};
use crate::config::{ConfigOverrides, GenerateConfig};
use crate::error::{Error, Result};
use crate::generator::{GenerateFileRequest, GenerateResponse, Generator};
use crate::profile::{load_profile, ProfileRegistry};
use crate::schema::SchemaInferrer;
use crate::types::TypeTag;
use serde_json::{json, Value};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Gen(args) => self.generate(args),
            Commands::Schema {
                data_file,
                detect_string_subtypes,
            } => self.schema(data_file, *detect_string_subtypes),
            Commands::Langs { code, name } => self.langs(code.as_deref(), name.as_deref()),
            Commands::Types => self.types(),
            Commands::Serve { port, profiles } => {
                let config = ServerConfig {
                    registry: build_registry(profiles)?,
                };
                serve(config, *port).await
            }
        }
    }

    /// Render a template and write (or print) the files
    fn generate(&self, args: &GenArgs) -> Result<()> {
        let mut registry = ProfileRegistry::builtin()?;
        let mut overrides = overrides_from_args(args);

        if let Some(path) = &args.profile {
            let profile = load_profile(path)?;
            info!(code = %profile.code, name = %profile.display_name(), path = %path.display(), "Registered custom profile");
            if overrides.lang.is_none() {
                overrides.lang = Some(profile.code.clone());
            }
            registry.register(profile)?;
        }

        let mut config = match &args.config_file {
            Some(path) => {
                debug!(path = %path.display(), "Loading config");
                GenerateConfig::load(path)?
            }
            None => GenerateConfig::default(),
        };
        config.apply_overrides(&overrides);

        let request = GenerateFileRequest {
            tmpl_file: args.template_file.clone(),
            data_file: args.data_file.clone(),
            config_file: None,
            config,
        };
        let response = Generator::new(registry).generate_from_files(&request)?;

        match &args.out {
            Some(dir) => write_files(dir, &response).map(|_| ()),
            None => {
                self.print_files(&response);
                Ok(())
            }
        }
    }

    /// Print the inferred (unformatted) schema tree
    fn schema(&self, data_file: &Path, detect_string_subtypes: bool) -> Result<()> {
        let content = fs::read_to_string(data_file).map_err(|e| {
            Error::config(format!(
                "Failed to read data file '{}': {}",
                data_file.display(),
                e
            ))
        })?;
        let value: Value = serde_json::from_str(&content)?;
        let root = SchemaInferrer::new()
            .with_string_subtypes(detect_string_subtypes)
            .infer(&value)?;

        self.output_message(&json!({
            "type": "SCHEMA",
            "nodes": root.node_count(),
            "root": root
        }));
        Ok(())
    }

    /// List languages
    fn langs(&self, code: Option<&str>, name: Option<&str>) -> Result<()> {
        let registry = ProfileRegistry::builtin()?;
        let langs = registry.list(code, name);

        self.output_message(&json!({
            "type": "LANGS",
            "langs": langs
        }));
        Ok(())
    }

    /// List the lattice tags
    fn types(&self) -> Result<()> {
        let base: Vec<&str> = TypeTag::BASE.iter().map(|t| t.as_str()).collect();
        let extended: Vec<&str> = TypeTag::EXTENDED.iter().map(|t| t.as_str()).collect();

        self.output_message(&json!({
            "type": "TYPES",
            "required": base,
            "optional": extended
        }));
        Ok(())
    }

    /// Print rendered files to stdout
    fn print_files(&self, response: &GenerateResponse) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(response).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                for file in &response.rendered_files {
                    println!("// ===== {} =====", file.file_name);
                    println!("{}", file.content);
                }
            }
        }
    }

    /// Output a message
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

fn overrides_from_args(args: &GenArgs) -> ConfigOverrides {
    ConfigOverrides {
        lang: args.lang.clone(),
        root_class_name: args.root_class_name.clone(),
        prefix_class_name: args.prefix_class_name.clone(),
        suffix_class_name: args.suffix_class_name.clone(),
        sort_properties: args.sort_properties,
        detect_string_subtypes: args.detect_string_subtypes,
    }
}

/// Built-in profiles plus any extra profile files
pub fn build_registry(profiles: &[PathBuf]) -> Result<ProfileRegistry> {
    let mut registry = ProfileRegistry::builtin()?;
    for path in profiles {
        let profile = load_profile(path)?;
        info!(code = %profile.code, name = %profile.display_name(), path = %path.display(), "Registered custom profile");
        registry.register(profile)?;
    }
    Ok(registry)
}

/// Write every rendered file into `dir`, creating it if needed
///
/// Returns the written paths. Files with the same name overwrite each other
/// in order; a warning is logged for each collision.
pub fn write_files(dir: &Path, response: &GenerateResponse) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut seen = HashSet::new();
    let mut written = Vec::with_capacity(response.rendered_files.len());
    for file in &response.rendered_files {
        if !seen.insert(file.file_name.as_str()) {
            warn!(file = %file.file_name, "Overwriting file written earlier in this run");
        }
        let path = dir.join(&file.file_name);
        fs::write(&path, &file.content)?;
        info!(path = %path.display(), bytes = file.content.len(), "Wrote file");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::RenderedFile;
    use std::time::Duration;

    fn response(names: &[&str]) -> GenerateResponse {
        GenerateResponse {
            rendered_files: names
                .iter()
                .enumerate()
                .map(|(i, name)| RenderedFile {
                    file_name: (*name).to_string(),
                    content: format!("content {i}"),
                })
                .collect(),
            render_time: Duration::ZERO,
        }
    }

    #[test]
    fn test_write_files_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/out");

        let written = write_files(&out, &response(&["a.go", "b.go"])).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(fs::read_to_string(out.join("b.go")).unwrap(), "content 1");
    }

    #[test]
    fn test_write_files_last_duplicate_wins() {
        let dir = tempfile::tempdir().unwrap();
        write_files(dir.path(), &response(&["a.go", "a.go"])).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("a.go")).unwrap(),
            "content 1"
        );
    }

    #[test]
    fn test_overrides_from_args() {
        let args = GenArgs {
            lang: Some("php".into()),
            suffix_class_name: Some("Dto".into()),
            sort_properties: true,
            ..GenArgs::default()
        };
        let overrides = overrides_from_args(&args);
        assert_eq!(overrides.lang.as_deref(), Some("php"));
        assert_eq!(overrides.suffix_class_name.as_deref(), Some("Dto"));
        assert!(overrides.sort_properties);
        assert!(!overrides.detect_string_subtypes);
    }

    #[test]
    fn test_build_registry_with_extra_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ts.yaml");
        fs::write(
            &path,
            r#"
code: ts
name: TypeScript
fileExtension: .ts
typeMapping:
  "null": "null"
  bool: boolean
  int: number
  float: number
  string: string
  object: "{{ Name }}"
  array: "any[]"
  arrayBool: "boolean[]"
  arrayInt: "number[]"
  arrayFloat: "number[]"
  arrayString: "string[]"
  arrayObject: "{{ Name }}[]"
"#,
        )
        .unwrap();

        let registry = build_registry(&[path]).unwrap();
        assert_eq!(registry.len(), 5);
        assert_eq!(registry.require("ts").unwrap().name, "TypeScript");
    }
}
