//! Language profile types

use crate::error::{Error, Result};
use crate::syntax;
use crate::types::TypeTag;
use serde::{Deserialize, Serialize};

/// Target type string for each lattice tag
///
/// Entries may contain macros (`"*{{ Name.PascalCase }}"`); they are
/// rendered against the node being typed. The string refinements fall back
/// to the `string` entry when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeMapping {
    #[serde(default)]
    pub null: String,
    #[serde(default)]
    pub bool: String,
    #[serde(default)]
    pub int: String,
    #[serde(default)]
    pub float: String,
    #[serde(default)]
    pub string: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub array: String,
    #[serde(default)]
    pub array_bool: String,
    #[serde(default)]
    pub array_int: String,
    #[serde(default)]
    pub array_float: String,
    #[serde(default)]
    pub array_string: String,
    #[serde(default)]
    pub array_object: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl TypeMapping {
    /// Mapping entry for a tag
    pub fn get(&self, tag: TypeTag) -> &str {
        match tag {
            TypeTag::Null => &self.null,
            TypeTag::Bool => &self.bool,
            TypeTag::Int => &self.int,
            TypeTag::Float => &self.float,
            TypeTag::String => &self.string,
            TypeTag::Object => &self.object,
            TypeTag::Array => &self.array,
            TypeTag::ArrayBool => &self.array_bool,
            TypeTag::ArrayInt => &self.array_int,
            TypeTag::ArrayFloat => &self.array_float,
            TypeTag::ArrayString => &self.array_string,
            TypeTag::ArrayObject => &self.array_object,
            TypeTag::Date => self.date.as_deref().unwrap_or(&self.string),
            TypeTag::Time => self.time.as_deref().unwrap_or(&self.string),
            TypeTag::DateTime => self.date_time.as_deref().unwrap_or(&self.string),
            TypeTag::Duration => self.duration.as_deref().unwrap_or(&self.string),
        }
    }

    /// Every base tag must map to a non-empty string with balanced macros
    pub fn validate(&self, field: &str) -> Result<()> {
        for tag in TypeTag::BASE {
            let entry = self.get(tag);
            if entry.trim().is_empty() {
                return Err(Error::missing_field(format!("{field}.{tag}")));
            }
            syntax::validate(entry)
                .map_err(|e| Error::invalid_value(format!("{field}.{tag}"), e.to_string()))?;
        }
        Ok(())
    }
}

/// Everything needed to emit code for one target language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LangProfile {
    /// Short identifier used on the command line ("go", "php")
    pub code: String,

    /// Human readable name
    #[serde(default)]
    pub name: String,

    /// Appended to every generated file name (".go")
    #[serde(default)]
    pub file_extension: String,

    /// Emit one file per object class instead of a single file
    #[serde(default, alias = "splitObjectByFiles")]
    pub split_by_files: bool,

    #[serde(default)]
    pub type_mapping: TypeMapping,

    /// Types for doc comments; defaults to a copy of `type_mapping`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_doc_mapping: Option<TypeMapping>,

    /// Applied to the prefixed/suffixed PascalCase key to get a class name
    #[serde(default)]
    pub class_name_template: String,

    /// Applied to a class node to get its file name (before the extension)
    #[serde(default)]
    pub file_name_template: String,
}

impl LangProfile {
    /// Check required fields and macro balance of every template
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(Error::missing_field("langSettings.code"));
        }

        self.type_mapping.validate("langSettings.typeMapping")?;
        if let Some(doc) = &self.type_doc_mapping {
            doc.validate("langSettings.typeDocMapping")?;
        }

        for (field, template) in [
            ("langSettings.classNameTemplate", &self.class_name_template),
            ("langSettings.fileNameTemplate", &self.file_name_template),
        ] {
            syntax::validate(template).map_err(|e| Error::invalid_value(field, e.to_string()))?;
        }
        Ok(())
    }

    /// Fill in the doc mapping with an independent copy of the type mapping
    #[must_use]
    pub fn with_resolved_doc_mapping(mut self) -> Self {
        if self.type_doc_mapping.is_none() {
            self.type_doc_mapping = Some(self.type_mapping.clone());
        }
        self
    }

    /// Mapping used for doc types
    pub fn doc_mapping(&self) -> &TypeMapping {
        self.type_doc_mapping.as_ref().unwrap_or(&self.type_mapping)
    }

    /// File extension with a leading dot, or empty
    pub fn extension(&self) -> String {
        let ext = self.file_extension.trim();
        if ext.is_empty() || ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{ext}")
        }
    }

    /// Display name, falling back to the code
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.code
        } else {
            &self.name
        }
    }
}
