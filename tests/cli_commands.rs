// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Tangible Contributors

//! CLI runner tests against files on disk

use std::fs;
use std::path::Path;
use tangible::cli::Runner;
use tangible::{Orientation, TangibleConfig};
use tempfile::tempdir;

#[test]
fn test_render_and_write() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("scene.json");
    fs::write(
        &input,
        r#"[
            {"type": "cube", "width": 1, "height": 2, "depth": 3},
            {"type": "rotate_extrusion", "item": {"type": "circle", "radius": 2}}
        ]"#,
    )?;

    let runner = Runner::new(TangibleConfig {
        output_dir: Some(dir.path().join("out")),
        ..Default::default()
    });
    let outcome = runner.render(&input)?;
    let path = runner.write(Path::new("scene.scad"), &outcome.source)?;

    assert_eq!(
        fs::read_to_string(path)?,
        "cube([1, 3, 2]);\nrotate_extrude()\n{\n    circle(2);\n};"
    );
    Ok(())
}

#[test]
fn test_connect_polygons() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("layers.json");
    fs::write(
        &input,
        r#"[
            {"type": "polygon", "points": [[0, 0], [0, 1], [1, 1], [1, 0], [0, 0]]},
            {"type": "polygon", "points": [[0, 0], [0, 2], [2, 2], [2, 0], [0, 0]]}
        ]"#,
    )?;

    let outcome = Runner::default().connect(&input, Some(3.0), Some(Orientation::Vertical))?;
    assert!(outcome.source.starts_with("union()\n{\n    translate([0, 0, 0])\n    {\n        polyhedron("));
    assert!(outcome.source.contains("[0, 0, 3], [0, 2, 3], [2, 2, 3], [2, 0, 3]"));
    Ok(())
}

#[test]
fn test_invalid_input_is_reported() -> anyhow::Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("bad.json");
    fs::write(&input, r#"{"type": "sphere", "radius": -1}"#)?;

    let err = Runner::default().render(&input).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to load AST file"));
    assert!(message.contains("invalid sphere: radius must be a positive number, got -1"));
    Ok(())
}
