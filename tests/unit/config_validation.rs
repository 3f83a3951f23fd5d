//! Unit tests for format definitions and document validation.

use continuous_track::config::{
    validate_config, ConfigDocument, FormatDefinition, Multiplicity, ValueType,
};
use continuous_track::error::{Error, SchemaError};

const GEARBOX_FORMAT: &str = r#"
description = "Small format used to exercise the validator"

[elements.label]
type = "string"
required = "0"

[elements.stage]
required = "+"

[elements.stage.elements.ratio]
type = "double"
required = "1"

[elements.stage.elements.teeth]
type = "int"
required = "1"

[elements.note]
required = "*"
copy_data = true
"#;

fn gearbox() -> FormatDefinition {
    FormatDefinition::parse(GEARBOX_FORMAT).expect("Format should parse")
}

fn validate(content: &str) -> Result<toml::Table, Error> {
    let document = ConfigDocument::parse(content).unwrap();
    validate_config(&document, &gearbox()).map(|v| v.into_table())
}

/// Test that a custom format parses in declaration order.
#[test]
fn test_custom_format_layout() {
    let format = gearbox();

    let names: Vec<_> = format.elements().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["label", "stage", "note"]);
    assert_eq!(format.element("stage").unwrap().required, Multiplicity::OneOrMore);
    assert_eq!(
        format.element("stage").and_then(|s| s.element("teeth")).unwrap().value_type,
        Some(ValueType::Int)
    );
    assert!(format.element("note").unwrap().copy_data);
}

/// Test that a conforming document is normalized.
#[test]
fn test_valid_document() {
    let table = validate(
        r#"
label = "two-stage"

[[stage]]
ratio = 3
teeth = 12

[[stage]]
ratio = 2.5
teeth = "40"
"#,
    )
    .expect("Document should validate");

    let stages = table["stage"].as_array().unwrap();
    assert_eq!(stages.len(), 2);
    assert_eq!(stages[0]["ratio"].as_float(), Some(3.0));
    assert_eq!(stages[1]["teeth"].as_integer(), Some(40));
    assert_eq!(table["note"].as_array().map(Vec::len), Some(0));
}

/// Test that missing required elements are reported with their path.
#[test]
fn test_missing_elements() {
    let result = validate("label = \"empty\"");
    assert!(matches!(
        result,
        Err(Error::Schema(SchemaError::MissingElement { ref path })) if path == "stage"
    ));

    let result = validate("[[stage]]\nratio = 1.0\n[[stage]]\nratio = 2.0\nteeth = 3\n");
    assert!(matches!(
        result,
        Err(Error::Schema(SchemaError::MissingElement { ref path })) if path == "stage[0]::teeth"
    ));
}

/// Test that values which cannot be coerced are rejected.
#[test]
fn test_type_mismatches() {
    let cases = [
        ("[[stage]]\nratio = \"steep\"\nteeth = 3\n", "stage[0]::ratio", "double"),
        ("[[stage]]\nratio = 1.0\nteeth = 3.5\n", "stage[0]::teeth", "int"),
        ("label = 7\n[[stage]]\nratio = 1.0\nteeth = 3\n", "label", "string"),
        ("stage = 4\n", "stage[0]", "table"),
        ("note = \"free text\"\n[[stage]]\nratio = 1.0\nteeth = 3\n", "note[0]", "table"),
    ];

    for (content, expected_path, expected_type) in cases {
        match validate(content) {
            Err(Error::Schema(SchemaError::TypeMismatch { path, expected, .. })) => {
                assert_eq!(path, expected_path);
                assert_eq!(expected, expected_type);
            }
            other => panic!("expected type mismatch at {}, got {:?}", expected_path, other),
        }
    }
}

/// Test that opaque elements are copied without inspection.
#[test]
fn test_copy_data_passthrough() {
    let table = validate(
        r#"
[[stage]]
ratio = 1.0
teeth = 3

[[note]]
anything = { goes = [1, "two", 3.0] }
"#,
    )
    .unwrap();

    let note = &table["note"][0];
    assert_eq!(note["anything"]["goes"].as_array().map(Vec::len), Some(3));
}

/// Test that unknown elements are dropped from the normalized document.
#[test]
fn test_unknown_elements_dropped() {
    let table = validate(
        r#"
colour = "red"

[[stage]]
ratio = 1.0
teeth = 3
backlash = 0.01
"#,
    )
    .unwrap();

    assert!(!table.contains_key("colour"));
    assert!(!table["stage"][0].as_table().unwrap().contains_key("backlash"));
}

/// Test that broken format definitions are rejected.
#[test]
fn test_invalid_formats() {
    let cases = [
        "[elements.a]\nrequired = \"2\"\n",
        "[elements.a]\nrequired = \"1\"\nunits = \"m\"\n",
        "[elements.a]\nrequired = \"1\"\ntype = \"float\"\n",
        "[elements.a]\nrequired = \"*\"\ncopy_data = true\ntype = \"string\"\n",
        "[elements.a]\nrequired = \"1\"\ntype = \"int\"\n[elements.a.elements.b]\nrequired = \"1\"\n",
    ];

    for content in cases {
        assert!(
            matches!(
                FormatDefinition::parse(content),
                Err(Error::Schema(SchemaError::InvalidFormat(_)))
            ),
            "format should be rejected:\n{}",
            content
        );
    }
}

/// Test that the shipped format file matches the embedded canonical format.
#[test]
fn test_shipped_format_matches_canonical() {
    let shipped = FormatDefinition::load(env!("CARGO_MANIFEST_DIR")).unwrap();
    assert_eq!(&shipped, FormatDefinition::canonical().unwrap());
}
