//! Example: Loading a track description and laying out its elements.
//!
//! This example demonstrates how to:
//! - Mirror a host model's joints in a `JointTable`
//! - Load and bind a track document from TOML
//! - Compute segment lengths and element placements
//! - Report loading errors with their element paths
//!
//! Run with: `RUST_LOG=continuous_track=debug cargo run --example load_track`

use std::path::PathBuf;

use continuous_track::{
    load_document, model::JointGeometry, ConfigDocument, JointKind, JointTable, Properties,
    Result, TrackLayout,
};
use nalgebra::{Point3, Vector3};
use tracing_subscriber::EnvFilter;

/// Wheel joint turning about the lateral axis, with the track running 0.1 m out.
fn wheel(x: f64) -> JointGeometry {
    JointGeometry {
        anchor: Point3::new(x, 0.0, 0.0),
        axis: Vector3::y(),
        child_origin: Point3::new(x, 0.0, 0.1),
    }
}

fn rover_model() -> JointTable {
    JointTable::new()
        .with_joint("left_sprocket_axle", JointKind::Revolute)
        .with_geometry("left_front_wheel", JointKind::Revolute, wheel(0.4))
        .with_joint("left_bottom_slide", JointKind::Prismatic)
        .with_geometry("left_rear_wheel", JointKind::Revolute, wheel(-0.4))
        .with_joint("left_top_slide", JointKind::Prismatic)
        .with_joint("left_suspension", JointKind::Fixed)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "continuous_track=info".into());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Continuous Track Loading Example ===\n");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos/track.toml"));

    let model = rover_model();
    let document = load_document(&path)?;
    let properties = Properties::load(&model, &document)?;

    println!("Track: {}", properties.name().unwrap_or("(unnamed)"));
    println!(
        "  Sprocket: {} (pitch diameter {} m)",
        properties.sprocket().joint.name(),
        properties.sprocket().pitch_diameter.value()
    );

    println!("  Trajectory:");
    for (index, segment) in properties.trajectory().iter().enumerate() {
        let kind = if segment.joint.is_rotational() { "rad" } else { "m" };
        println!(
            "    [{}] {} -> {} {}",
            index,
            segment.joint.name(),
            segment.end_position.value(),
            kind
        );
    }

    let pattern = properties.pattern();
    println!("  Pattern: {} per round", pattern.elements_per_round);
    for (index, element) in pattern.elements.iter().enumerate() {
        println!(
            "    [{}] {} collision, {} visual",
            index,
            element.collision_sdfs.len(),
            element.visual_sdfs.len()
        );
    }
    println!();

    let layout = TrackLayout::compose(&properties, &model)?;

    println!("Layout:");
    println!("  Perimeter: {:.4} m", layout.perimeter());
    println!("  Element pitch: {:.4} m", layout.element_pitch());
    for (index, segment) in layout.segments().iter().enumerate() {
        println!(
            "    [{}] {:.4} m ({:.3} m per joint unit)",
            index, segment.length, segment.joint_to_track
        );
    }

    for variant in 0..layout.variant_count() {
        let placements = layout.placements(variant)?;
        println!("  Variant {}: {} placements", variant, placements.len());
        for placement in placements.iter().take(3) {
            println!(
                "    segment {} step {} element {} at {:.4}",
                placement.segment, placement.step, placement.element, placement.joint_position
            );
        }
    }

    let track_position = layout.track_position(1.0);
    println!(
        "  Sprocket at 1 rad: track at {:.4} m, variant {}",
        track_position,
        layout.variant_at(track_position)
    );
    println!();

    // Broken documents are rejected with the path of the offending element
    println!("Error reporting:");
    let content = document.to_toml_string();
    let broken = [
        content.replace("left_sprocket_axle", "left_bottom_slide"),
        content.replace("left_top_slide", "left_suspension"),
        content.replace("elements_per_round = 30", "elements_per_round = 0"),
        content.replace("pitch_diameter = 0.24", "pitch_diameter = \"wide\""),
    ];
    for content in &broken {
        let document = ConfigDocument::parse(content)?;
        match Properties::load(&model, &document) {
            Ok(_) => println!("  unexpectedly loaded"),
            Err(e) => println!("  {}", e),
        }
    }

    Ok(())
}
