//! Generation configuration
//!
//! A config names the target language (a built-in profile code, or an
//! inline `langSettings` profile) and the naming options. It can be read
//! from a YAML or JSON file and overridden from the command line.

use crate::error::{Error, Result};
use crate::format::{FormatOptions, DEFAULT_ROOT_CLASS_NAME};
use crate::profile::{LangProfile, ProfileRegistry};
use crate::types::DataFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Generate Config
// ============================================================================

/// Complete generation config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateConfig {
    /// Built-in (or registered) profile code or name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Inline profile, used when `lang` is not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang_settings: Option<LangProfile>,

    /// Format of the sample data (only "json")
    #[serde(default = "default_data_format")]
    pub data_format: String,

    /// Class name given to the root node
    #[serde(default = "default_root_class_name")]
    pub root_class_name: String,

    #[serde(default)]
    pub prefix_class_name: String,

    #[serde(default)]
    pub suffix_class_name: String,

    /// Sort properties by key instead of keeping sample order
    #[serde(default)]
    pub sort_properties: bool,

    /// Refine strings into date/time/duration types
    #[serde(default)]
    pub detect_string_subtypes: bool,
}

fn default_data_format() -> String {
    "json".to_string()
}

fn default_root_class_name() -> String {
    DEFAULT_ROOT_CLASS_NAME.to_string()
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            lang: None,
            lang_settings: None,
            data_format: default_data_format(),
            root_class_name: default_root_class_name(),
            prefix_class_name: String::new(),
            suffix_class_name: String::new(),
            sort_properties: false,
            detect_string_subtypes: false,
        }
    }
}

impl GenerateConfig {
    /// Config targeting a registered language
    pub fn for_lang(lang: impl Into<String>) -> Self {
        Self {
            lang: Some(lang.into()),
            ..Self::default()
        }
    }

    /// Load a config file (YAML for .yaml/.yml, JSON otherwise)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parsed data format
    pub fn data_format(&self) -> Result<DataFormat> {
        self.data_format.parse()
    }

    /// Pick the profile this config targets
    ///
    /// `lang` wins over an inline profile. An inline profile is validated
    /// and gets its doc mapping filled in.
    pub fn resolve_profile(&self, registry: &ProfileRegistry) -> Result<LangProfile> {
        match (&self.lang, &self.lang_settings) {
            (Some(lang), _) if !lang.trim().is_empty() => Ok(registry.require(lang)?.clone()),
            (_, Some(profile)) => {
                profile.validate()?;
                Ok(profile.clone().with_resolved_doc_mapping())
            }
            _ => Err(Error::missing_field("lang")),
        }
    }

    /// Naming options for the formatter
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            root_class_name: if self.root_class_name.trim().is_empty() {
                default_root_class_name()
            } else {
                self.root_class_name.clone()
            },
            prefix_class_name: self.prefix_class_name.clone(),
            suffix_class_name: self.suffix_class_name.clone(),
            sort_properties: self.sort_properties,
        }
    }

    /// Apply command line overrides on top of this config
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(lang) = &overrides.lang {
            self.lang = Some(lang.clone());
        }
        if let Some(name) = &overrides.root_class_name {
            self.root_class_name = name.clone();
        }
        if let Some(prefix) = &overrides.prefix_class_name {
            self.prefix_class_name = prefix.clone();
        }
        if let Some(suffix) = &overrides.suffix_class_name {
            self.suffix_class_name = suffix.clone();
        }
        if overrides.sort_properties {
            self.sort_properties = true;
        }
        if overrides.detect_string_subtypes {
            self.detect_string_subtypes = true;
        }
    }
}

// ============================================================================
// Overrides
// ============================================================================

/// Values given on the command line; `None`/`false` leaves the config as is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub lang: Option<String>,
    pub root_class_name: Option<String>,
    pub prefix_class_name: Option<String>,
    pub suffix_class_name: Option<String>,
    pub sort_properties: bool,
    pub detect_string_subtypes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_defaults() {
        let config = GenerateConfig::from_json_str(r#"{"lang": "go"}"#).unwrap();
        assert_eq!(config.lang.as_deref(), Some("go"));
        assert_eq!(config.root_class_name, "RootClass");
        assert_eq!(config.data_format, "json");
        assert!(!config.sort_properties);
    }

    #[test]
    fn test_parse_yaml_with_inline_profile() {
        let yaml = r#"
rootClassName: Order
prefixClassName: Api
sortProperties: true
langSettings:
  code: rs
  name: Rust
  fileExtension: .rs
  typeMapping:
    "null": "Option<serde_json::Value>"
    bool: bool
    int: i64
    float: f64
    string: String
    object: "{{ Name.PascalCase }}"
    array: Vec<serde_json::Value>
    arrayBool: Vec<bool>
    arrayInt: Vec<i64>
    arrayFloat: Vec<f64>
    arrayString: Vec<String>
    arrayObject: "Vec<{{ Name.PascalCase }}>"
"#;
        let config = GenerateConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.root_class_name, "Order");
        assert!(config.sort_properties);

        let registry = ProfileRegistry::builtin().unwrap();
        let profile = config.resolve_profile(&registry).unwrap();
        assert_eq!(profile.code, "rs");
        assert_eq!(profile.doc_mapping().int, "i64");

        let options = config.format_options();
        assert_eq!(options.prefix_class_name, "Api");
        assert!(options.sort_properties);
    }

    #[test]
    fn test_resolve_profile_errors() {
        let registry = ProfileRegistry::builtin().unwrap();

        let err = GenerateConfig::default().resolve_profile(&registry).unwrap_err();
        assert_eq!(err.to_string(), "Missing required config field: lang");

        let err = GenerateConfig::for_lang("cobol")
            .resolve_profile(&registry)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownLanguage { .. }));
    }

    #[test]
    fn test_data_format() {
        let mut config = GenerateConfig::for_lang("go");
        assert_eq!(config.data_format().unwrap(), DataFormat::Json);

        config.data_format = "xml".into();
        assert!(config.data_format().is_err());
    }

    #[test]
    fn test_empty_root_class_name_falls_back() {
        let mut config = GenerateConfig::for_lang("go");
        config.root_class_name = " ".into();
        assert_eq!(config.format_options().root_class_name, "RootClass");
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = GenerateConfig::for_lang("go");
        config.prefix_class_name = "Keep".into();

        config.apply_overrides(&ConfigOverrides {
            lang: Some("php".into()),
            root_class_name: Some("Invoice".into()),
            sort_properties: true,
            ..ConfigOverrides::default()
        });

        assert_eq!(config.lang.as_deref(), Some("php"));
        assert_eq!(config.root_class_name, "Invoice");
        assert_eq!(config.prefix_class_name, "Keep");
        assert!(config.sort_properties);
    }

    #[test]
    fn test_load_by_extension() {
        let mut yaml = Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(yaml, "lang: php\nsuffixClassName: Dto").unwrap();
        let config = GenerateConfig::load(yaml.path()).unwrap();
        assert_eq!(config.lang.as_deref(), Some("php"));
        assert_eq!(config.suffix_class_name, "Dto");

        let mut json = Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{"lang": "go", "rootClassName": "Doc"}}"#).unwrap();
        let config = GenerateConfig::load(json.path()).unwrap();
        assert_eq!(config.root_class_name, "Doc");
    }

    #[test]
    fn test_load_missing_file() {
        let err = GenerateConfig::load("/nonexistent/gendata.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
