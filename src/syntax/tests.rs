//! Macro language tests

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_expand_properties_loop() {
    let expanded = expand("{{Properties}}{{ Name.PascalCase }} {{ Type }};{{/Properties}}");
    assert_eq!(
        expanded,
        "{%- for node in node.properties %}{{ node.name | pascal_case }} {{ node.type }};{%- endfor %}"
    );
}

#[test_case("{{Name}}", "{{ node.name }}" ; "plain")]
#[test_case("{{ name }}", "{{ node.name }}" ; "lowercase with spaces")]
#[test_case("{{NAME.camelcase}}", "{{ node.name | camel_case }}" ; "shouting")]
#[test_case("{{Name.SnakeCase}}", "{{ node.name | snake_case }}" ; "snake")]
#[test_case("{{Name.KebabCase}}", "{{ node.name | kebab_case }}" ; "kebab")]
#[test_case("{{Name.DotCase}}", "{{ node.name | dot_case }}" ; "dot")]
#[test_case("{{Type.Doc}}", "{{ node.doc_type }}" ; "doc type")]
#[test_case("{{Type.IsArray}}x{{/Type.IsArray}}", "{%- if node.is_array %}x{%- endif %}" ; "is array")]
#[test_case("{{ Type.IsObject }}x{{ /Type.IsObject }}", "{%- if node.is_object %}x{%- endif %}" ; "is object")]
fn test_expand_single_macro(input: &str, expected: &str) {
    assert_eq!(expand(input), expected);
}

#[test]
fn test_expand_leaves_other_text_alone() {
    let text = "class {{ node.key }} { {% if true %}x{% endif %} } {{Names}}";
    assert_eq!(expand(text), text);
}

#[test]
fn test_expand_keeps_split_markers() {
    let text = "head\n{{SPLIT}}\n{{Name}}\n{{/SPLIT}}\ntail";
    assert_eq!(expand(text), "head\n{{SPLIT}}\n{{ node.name }}\n{{/SPLIT}}\ntail");
}

#[test]
fn test_validate_balanced() {
    validate("{{Properties}}{{Type.IsArray}}a{{/Type.IsArray}}{{/Properties}}").unwrap();
    validate("no macros at all").unwrap();
    validate("{{SPLIT}}x{{/SPLIT}}").unwrap();
}

#[test]
fn test_validate_missing_close() {
    let err = validate("{{Properties}}{{Name}}").unwrap_err();
    match err {
        Error::Syntax {
            message,
            tag,
            offset,
        } => {
            assert_eq!(message, "need close '{{/Properties}}'");
            assert_eq!(tag, "{{Properties}}");
            assert_eq!(offset, 0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_validate_missing_open_points_at_last_close() {
    let text = "{{Properties}}a{{/Properties}}b{{/Properties}}";
    let err = validate(text).unwrap_err();
    match err {
        Error::Syntax {
            message, offset, ..
        } => {
            assert_eq!(message, "need open '{{Properties}}'");
            assert_eq!(offset, text.rfind("{{/Properties}}").unwrap());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_validate_unbalanced_condition() {
    let err = validate("{{Type.IsObject}}x").unwrap_err();
    assert!(err.to_string().contains("need close '{{/Type.IsObject}}'"));
}

#[test]
fn test_validate_single_split_section() {
    let err = validate("{{SPLIT}}a{{/SPLIT}}{{SPLIT}}b{{/SPLIT}}").unwrap_err();
    assert!(err.to_string().contains("have only one '{{SPLIT}}'"));
}

#[test]
fn test_compile_rejects_before_expanding() {
    assert!(compile("{{/Properties}}").is_err());
    assert_eq!(compile("{{Type}}").unwrap(), "{{ node.type }}");
}

#[test]
fn test_extract_split() {
    let text = "package x\n{{SPLIT}}\nclass {{Name}}\n{{/SPLIT}}\n";
    assert_eq!(extract_split(text), Some("class {{Name}}\n"));
    assert_eq!(extract_split("no split"), None);
}

#[test]
fn test_strip_split() {
    let text = "package x\n{{SPLIT}}\nclass A\n{{/SPLIT}}\nend";
    assert_eq!(strip_split(text), "package x\nclass A\nend");
}

