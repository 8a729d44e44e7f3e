//! Language profile tests

use super::*;
use crate::error::Error;
use crate::types::TypeTag;
use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;

const MINIMAL_PROFILE: &str = r#"
code: kt
name: Kotlin
fileExtension: kt
typeMapping:
  "null": Any?
  bool: Boolean
  int: Int
  float: Double
  string: String
  object: "{{ Name }}"
  array: List<Any?>
  arrayBool: List<Boolean>
  arrayInt: List<Int>
  arrayFloat: List<Double>
  arrayString: List<String>
  arrayObject: "List<{{ Name }}>"
"#;

#[test]
fn test_builtin_profiles_load() {
    let registry = ProfileRegistry::builtin().unwrap();
    assert_eq!(registry.codes(), vec!["common", "go", "go1.20", "php"]);

    let go = registry.get("go").unwrap();
    assert_eq!(go.type_mapping.get(TypeTag::Int), "int");
    assert_eq!(go.type_mapping.get(TypeTag::ArrayString), "[]string");
    assert_eq!(go.type_mapping.get(TypeTag::Null), "interface{}");
    assert!(!go.split_by_files);

    let php = registry.get("php").unwrap();
    assert!(php.split_by_files);
    assert_eq!(php.doc_mapping().get(TypeTag::ArrayInt), "int[]");
    assert_eq!(php.type_mapping.get(TypeTag::ArrayInt), "array");
    assert_eq!(php.type_mapping.get(TypeTag::DateTime), "\\DateTime");
}

#[test]
fn test_lookup_by_name_and_case() {
    let registry = ProfileRegistry::builtin().unwrap();
    assert_eq!(registry.get("PHP").unwrap().code, "php");
    assert_eq!(registry.get("Go 1.20+").unwrap().code, "go1.20");
    assert!(registry.get("cobol").is_none());
}

#[test]
fn test_require_unknown_language() {
    let registry = ProfileRegistry::builtin().unwrap();
    let err = registry.require("cobol").unwrap_err();
    assert!(matches!(err, Error::UnknownLanguage { .. }));
    assert!(err.to_string().contains("\"cobol\" is not supported"));
    assert!(err.to_string().contains("go, go1.20"));
}

#[test]
fn test_list_filters() {
    let registry = ProfileRegistry::builtin().unwrap();
    assert_eq!(registry.list(None, None).len(), 4);
    assert_eq!(registry.list(Some("php"), None).len(), 1);
    assert_eq!(registry.list(None, Some("go")).len(), 1);
    assert!(registry.list(Some("go"), Some("PHP")).is_empty());
}

#[test]
fn test_doc_mapping_is_a_copy() {
    let mut profile = load_profile_from_str(MINIMAL_PROFILE).unwrap();
    assert_eq!(profile.doc_mapping(), &profile.type_mapping);

    profile.type_mapping.int = "Long".into();
    assert_eq!(profile.doc_mapping().int, "Int");
}

#[test]
fn test_extension_gets_leading_dot() {
    let profile = load_profile_from_str(MINIMAL_PROFILE).unwrap();
    assert_eq!(profile.extension(), ".kt");
    assert_eq!(profile.display_name(), "Kotlin");
}

#[test]
fn test_subtypes_fall_back_to_string() {
    let profile = load_profile_from_str(MINIMAL_PROFILE).unwrap();
    assert_eq!(profile.type_mapping.get(TypeTag::Date), "String");
    assert_eq!(profile.type_mapping.get(TypeTag::Duration), "String");
}

#[test]
fn test_missing_mapping_entry() {
    let yaml = MINIMAL_PROFILE.replace("  arrayObject: \"List<{{ Name }}>\"\n", "");
    let err = load_profile_from_str(&yaml).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing required config field: langSettings.typeMapping.arrayObject"
    );
}

#[test]
fn test_missing_code() {
    let yaml = MINIMAL_PROFILE.replace("code: kt", "code: \"\"");
    let err = load_profile_from_str(&yaml).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { field } if field == "langSettings.code"));
}

#[test]
fn test_unbalanced_mapping_macro() {
    let yaml = MINIMAL_PROFILE.replace("object: \"{{ Name }}\"", "object: \"{{Properties}}\"");
    let err = load_profile_from_str(&yaml).unwrap_err();
    assert!(err.to_string().contains("langSettings.typeMapping.object"));
}

#[test]
fn test_register_replaces_same_code() {
    let mut registry = ProfileRegistry::builtin().unwrap();
    let mut profile = load_profile_from_str(MINIMAL_PROFILE).unwrap();
    registry.register(profile.clone()).unwrap();
    assert_eq!(registry.len(), 5);

    profile.name = "Kotlin JVM".into();
    registry.register(profile).unwrap();
    assert_eq!(registry.len(), 5);
    assert_eq!(registry.get("kt").unwrap().name, "Kotlin JVM");
}

#[test]
fn test_load_profile_from_file_and_builtin() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(MINIMAL_PROFILE.as_bytes()).unwrap();

    let profile = load_profile(file.path()).unwrap();
    assert_eq!(profile.code, "kt");

    let go = load_profile("go").unwrap();
    assert_eq!(go.code, "go");

    let err = load_profile("/nonexistent/profile.yaml").unwrap_err();
    assert!(err.to_string().contains("Built-in profiles: common, go, go1.20, php"));
}
