//! Built-in and custom language profiles
//!
//! The built-in profiles are embedded in the binary so `--lang go` works
//! without any files on disk. Custom profiles are YAML (or JSON) files with
//! the same shape.

use super::types::LangProfile;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Built-in profile definitions, in listing order
pub const BUILTIN_PROFILES: [(&str, &str); 4] = [
    ("common", include_str!("../../profiles/common.yaml")),
    ("go", include_str!("../../profiles/go.yaml")),
    ("go1.20", include_str!("../../profiles/go1.20.yaml")),
    ("php", include_str!("../../profiles/php.yaml")),
];

/// Registry of known language profiles
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: Vec<LangProfile>,
}

impl ProfileRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in profiles
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for (code, yaml) in BUILTIN_PROFILES {
            let profile = load_profile_from_str(yaml)
                .map_err(|e| Error::config(format!("Built-in profile '{code}' is invalid: {e}")))?;
            registry.register(profile)?;
        }
        Ok(registry)
    }

    /// Add a profile, replacing any profile with the same code
    pub fn register(&mut self, profile: LangProfile) -> Result<()> {
        profile.validate()?;
        let profile = profile.with_resolved_doc_mapping();
        match self.profiles.iter_mut().find(|p| p.code == profile.code) {
            Some(existing) => *existing = profile,
            None => self.profiles.push(profile),
        }
        Ok(())
    }

    /// Find a profile by code or name (exact match first, then ignoring case)
    pub fn get(&self, lang: &str) -> Option<&LangProfile> {
        self.profiles
            .iter()
            .find(|p| p.code == lang || p.name == lang)
            .or_else(|| {
                self.profiles.iter().find(|p| {
                    p.code.eq_ignore_ascii_case(lang) || p.name.eq_ignore_ascii_case(lang)
                })
            })
    }

    /// Like [`get`](Self::get) but fails with the list of known codes
    pub fn require(&self, lang: &str) -> Result<&LangProfile> {
        self.get(lang).ok_or_else(|| Error::UnknownLanguage {
            lang: lang.to_string(),
            available: self.codes().join(", "),
        })
    }

    /// Profiles matching the given filters (no filters lists everything)
    pub fn list(&self, code: Option<&str>, name: Option<&str>) -> Vec<&LangProfile> {
        self.profiles
            .iter()
            .filter(|p| code.map_or(true, |c| p.code.eq_ignore_ascii_case(c)))
            .filter(|p| name.map_or(true, |n| p.name.eq_ignore_ascii_case(n)))
            .collect()
    }

    /// Known profile codes in registration order
    pub fn codes(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.code.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Load a profile from a built-in code or a file path
pub fn load_profile(path: impl AsRef<Path>) -> Result<LangProfile> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if let Some((_, yaml)) = BUILTIN_PROFILES.iter().find(|(code, _)| *code == path_str) {
        return load_profile_from_str(yaml);
    }

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            let codes: Vec<_> = BUILTIN_PROFILES.iter().map(|(code, _)| *code).collect();
            Error::config(format!(
                "Profile '{}' not found. Built-in profiles: {}. Or provide a path to a YAML file.",
                path.display(),
                codes.join(", ")
            ))
        } else {
            Error::config(format!(
                "Failed to read profile file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;
    load_profile_from_str(&content)
}

/// Parse and validate a profile from YAML (JSON is valid YAML too)
pub fn load_profile_from_str(yaml: &str) -> Result<LangProfile> {
    let profile: LangProfile = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse profile YAML: {e}")))?;
    profile.validate()?;
    Ok(profile.with_resolved_doc_mapping())
}
