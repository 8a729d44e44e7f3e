//! Generator tests

use super::*;
use crate::config::GenerateConfig;
use pretty_assertions::assert_eq;
use std::time::Duration;
use test_case::test_case;

const PROPS_TEMPLATE: &str = "{{Properties}}{{ Name.PascalCase }} {{ Type }};{{/Properties}}";

fn generator() -> Generator {
    Generator::with_builtin_profiles().unwrap()
}

fn go_request(tmpl: &str, data: &str) -> GenerateRequest {
    GenerateRequest::new(tmpl, data, GenerateConfig::for_lang("go"))
}

#[test]
fn test_generate_single_file() {
    let response = generator()
        .generate(&go_request(
            PROPS_TEMPLATE,
            r#"[{"id":1,"tags":["go"]},{"id":2,"tags":["php"]}]"#,
        ))
        .unwrap();

    assert_eq!(response.rendered_files.len(), 1);
    assert_eq!(response.rendered_files[0].file_name, "root_class.go");
    assert_eq!(response.rendered_files[0].content, "Id int;Tags []string;");
}

#[test]
fn test_generate_is_deterministic() {
    let request = go_request(
        "{{Properties}}{{Name}}:{{Type}}\n{{/Properties}}",
        r#"{"z": 1, "a": {"b": [1.5, 2]}, "m": [{"x": null}, {"x": "s"}]}"#,
    );
    let first = generator().generate(&request).unwrap();
    let second = generator().generate(&request).unwrap();
    assert_eq!(first.rendered_files, second.rendered_files);
}

#[test]
fn test_split_by_files() {
    let template = "<?php\n{{SPLIT}}\nclass {{Name}}\n{\n{{Properties}}    public {{Type}} ${{Name.CamelCase}};\n{{/Properties}}}\n{{/SPLIT}}\n";
    let request = GenerateRequest::new(
        template,
        r#"{"id": 1, "owner": {"name": "x"}}"#,
        GenerateConfig::for_lang("php"),
    );

    let response = generator().generate(&request).unwrap();
    let names: Vec<_> = response
        .rendered_files
        .iter()
        .map(|f| f.file_name.as_str())
        .collect();
    assert_eq!(names, vec!["RootClass.php", "Owner.php"]);

    let owner = response.file("Owner.php").unwrap();
    // block tags trim the whitespace in front of them
    assert_eq!(owner.content, "class Owner\n{    public string $name;}\n");
}

#[test]
fn test_split_disabled_yields_one_file() {
    let request = go_request("{{SPLIT}}{{Name}}{{/SPLIT}}", r#"{"a": {"b": 1}}"#);
    let response = generator().generate(&request).unwrap();
    assert_eq!(response.rendered_files.len(), 1);
    assert_eq!(response.rendered_files[0].content, "RootClass");
}

#[test_case("", "{}", "template is empty" ; "empty template")]
#[test_case("  \n", "{}", "template is empty" ; "blank template")]
#[test_case("{{Name}}", "", "data is empty" ; "empty data")]
#[test_case("{{Properties}}", "{}", "need close '{{/Properties}}'" ; "unbalanced template")]
#[test_case("{{Name}}", "{not json", "Failed to parse JSON" ; "bad json")]
#[test_case("{{Name}}", "42", "expected a JSON object or array" ; "scalar root")]
fn test_generate_errors(tmpl: &str, data: &str, expected: &str) {
    let err = generator().generate(&go_request(tmpl, data)).unwrap_err();
    assert!(
        err.to_string().contains(expected),
        "expected '{expected}' in '{err}'"
    );
}

#[test]
fn test_unknown_language() {
    let request = GenerateRequest::new("{{Name}}", "{}", GenerateConfig::for_lang("cobol"));
    let err = generator().generate(&request).unwrap_err();
    assert!(err.to_string().contains("\"cobol\" is not supported"));
}

#[test]
fn test_unsupported_data_format() {
    let mut config = GenerateConfig::for_lang("go");
    config.data_format = "yaml".into();
    let err = generator()
        .generate(&GenerateRequest::new("{{Name}}", "{}", config))
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedDataFormat { .. }));
}

#[test]
fn test_response_serializes_render_time_as_nanos() {
    let response = GenerateResponse {
        rendered_files: vec![RenderedFile {
            file_name: "a.go".into(),
            content: "x".into(),
        }],
        render_time: Duration::from_micros(3),
    };
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["renderTime"], 3000);
    assert_eq!(json["renderedFiles"][0]["fileName"], "a.go");

    let back: GenerateResponse = serde_json::from_value(json).unwrap();
    assert_eq!(back, response);
}

#[test]
fn test_generate_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let tmpl = dir.path().join("struct.tmpl");
    let data = dir.path().join("sample.json");
    let config = dir.path().join("gendata.yaml");
    std::fs::write(&tmpl, PROPS_TEMPLATE).unwrap();
    std::fs::write(&data, r#"{"user_id": 7}"#).unwrap();
    std::fs::write(&config, "lang: go1.20\nrootClassName: Event\n").unwrap();

    let response = generator()
        .generate_from_files(&GenerateFileRequest {
            tmpl_file: tmpl,
            data_file: data,
            config_file: Some(config),
            config: GenerateConfig::default(),
        })
        .unwrap();

    assert_eq!(response.rendered_files[0].file_name, "event.go");
    assert_eq!(response.rendered_files[0].content, "UserId int;");
}

#[test]
fn test_generate_from_missing_file() {
    let err = generator()
        .generate_from_files(&GenerateFileRequest {
            tmpl_file: "/nonexistent/t.tmpl".into(),
            data_file: "/nonexistent/d.json".into(),
            config_file: None,
            config: GenerateConfig::for_lang("go"),
        })
        .unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));
}
