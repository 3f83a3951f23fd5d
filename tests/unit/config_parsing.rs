//! Unit tests for TOML document parsing and the typed configuration view.

use continuous_track::config::{
    load_document, validate_config, ConfigDocument, FormatDefinition, PluginConfig,
};
use continuous_track::error::{Error, SchemaError};

fn typed(content: &str) -> PluginConfig {
    let document = ConfigDocument::parse(content).expect("Failed to parse TOML");
    let validated = validate_config(&document, FormatDefinition::canonical().unwrap())
        .expect("Document should validate");
    PluginConfig::from_validated(validated).expect("Typed view should deserialize")
}

/// Test parsing a complete track into the typed view.
#[test]
fn test_parse_track_config() {
    let config = typed(
        r#"
name = "right_track"

[sprocket]
joint = "sprocket_axle"
pitch_diameter = 0.28

[[trajectory.segment]]
joint = "front_wheel"
end_position = 3.14159

[[trajectory.segment]]
joint = "bottom_slide"
end_position = 1.2

[pattern]
elements_per_round = 36

[[pattern.element]]
[[pattern.element.collision]]
name = "shoe"
"#,
    );

    assert_eq!(config.name.as_deref(), Some("right_track"));
    assert_eq!(config.sprocket.joint.as_str(), "sprocket_axle");
    assert_eq!(config.sprocket.pitch_diameter.0, 0.28);
    assert_eq!(config.segment_count(), 2);
    assert_eq!(config.trajectory.segments[0].joint.as_str(), "front_wheel");
    assert_eq!(config.trajectory.segments[1].end_position.0, 1.2);
    assert_eq!(config.pattern.elements_per_round, 36);
    assert_eq!(config.element_count(), 1);
    assert_eq!(config.pattern.elements[0].collisions.len(), 1);
    assert!(config.pattern.elements[0].visuals.is_empty());
}

/// Test that numeric strings and integers are coerced to their declared types.
#[test]
fn test_parse_coerced_values() {
    let config = typed(
        r#"
[sprocket]
joint = "drive"
pitch_diameter = "0.5"

[[trajectory.segment]]
joint = "idler"
end_position = 2

[pattern]
elements_per_round = " 12 "

[[pattern.element]]
"#,
    );

    assert_eq!(config.sprocket.pitch_diameter.0, 0.5);
    assert_eq!(config.trajectory.segments[0].end_position.0, 2.0);
    assert_eq!(config.pattern.elements_per_round, 12);
}

/// Test that opaque shape content survives parsing untouched.
#[test]
fn test_parse_shape_descriptor() {
    let config = typed(
        r#"
[sprocket]
joint = "drive"
pitch_diameter = 0.3

[[trajectory.segment]]
joint = "idler"
end_position = 1.5

[pattern]
elements_per_round = 20

[[pattern.element]]
[[pattern.element.visual]]
name = "shoe_visual"
cast_shadows = false
[pattern.element.visual.geometry.mesh]
uri = "model://track/meshes/shoe.dae"
scale = [1.0, 1.0, 1.0]
"#,
    );

    let visual = &config.pattern.elements[0].visuals[0];
    assert_eq!(visual.name(), Some("shoe_visual"));
    assert_eq!(visual.get("cast_shadows").and_then(|v| v.as_bool()), Some(false));

    let mesh = &visual.as_table()["geometry"]["mesh"];
    assert_eq!(mesh["uri"].as_str(), Some("model://track/meshes/shoe.dae"));
    assert_eq!(mesh["scale"].as_array().map(Vec::len), Some(3));
}

/// Test that long scoped joint names are kept whole.
#[test]
fn test_parse_long_joint_name() {
    let content = format!(
        r#"
[sprocket]
joint = "{}"
pitch_diameter = 0.3

[[trajectory.segment]]
joint = "idler"
end_position = 1.5

[pattern]
elements_per_round = 20

[[pattern.element]]
"#,
        long_name()
    );

    let document = ConfigDocument::parse(&content).unwrap();
    let validated = validate_config(&document, FormatDefinition::canonical().unwrap()).unwrap();
    let config = PluginConfig::from_validated(validated).expect("Long names should deserialize");
    assert_eq!(config.sprocket.joint, long_name());
}

fn long_name() -> String {
    format!("model::left_track::link::{}", "j".repeat(100))
}

/// Test loading a document from disk.
#[test]
fn test_load_document_from_file() {
    let path = std::env::temp_dir().join(format!(
        "continuous_track_parsing_{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "name = \"on_disk\"\n[sprocket]\njoint = \"drive\"\n").unwrap();

    let document = load_document(&path).expect("Document should load");
    assert_eq!(document.as_table()["name"].as_str(), Some("on_disk"));
    assert_eq!(document.as_table()["sprocket"]["joint"].as_str(), Some("drive"));

    std::fs::remove_file(&path).ok();
}

/// Test that a missing file is reported as an I/O error.
#[test]
fn test_load_document_missing_file() {
    let result = load_document("/nonexistent/continuous_track/left.toml");
    assert!(matches!(result, Err(Error::Io { .. })));
}

/// Test that malformed TOML is reported as a schema error.
#[test]
fn test_parse_malformed() {
    let result: Result<ConfigDocument, _> = "pitch_diameter = = 0.3".parse();
    assert!(matches!(result, Err(Error::Schema(SchemaError::Malformed(_)))));
}
