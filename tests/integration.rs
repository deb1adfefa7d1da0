// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Integration tests for kindle2md parsing and rendering.

use kindle2md::{parser, renderer};
use std::fs;

const FULL_EXPORT: &str = r#"{
    "title": "The Story of My Life",
    "authors": "Keller, Helen",
    "highlights": [
        {
            "text": "The beginning of my life was simple",
            "note": null,
            "isNoteOnly": false,
            "location": { "value": "12", "url": "kindle://a" }
        },
        {
            "text": "knowledge is love",
            "note": "look this up",
            "isNoteOnly": false,
            "location": { "value": "34", "url": "kindle://b" }
        },
        {
            "text": "",
            "note": "finish chapter",
            "isNoteOnly": true,
            "location": { "value": "56", "url": "kindle://c" }
        }
    ]
}"#;

/// Parses and renders a representative export, checking the exact bytes.
#[test]
fn renders_full_export() {
    let export = parser::parse_export(FULL_EXPORT).unwrap();
    let markdown =
        renderer::render_export(&export, &renderer::RenderOptions::default()).unwrap();

    let expected = concat!(
        "# The Story of My Life\n\n",
        "Authors: Keller, Helen\n\n",
        "## Highlights with Notes\n\n",
        "- knowledge is love ([34](kindle://b))\n",
        "    - Note: look this up\n",
        "- Note: finish chapter ([56](kindle://c))\n",
        "\n\n",
        "## All Highlights\n\n",
        "- The beginning of my life was simple ([12](kindle://a))\n",
        "- knowledge is love ([34](kindle://b))\n",
        "    - Note: look this up\n",
        "- Note: finish chapter ([56](kindle://c))\n",
    );
    assert_eq!(markdown, expected);
}

/// The same input must produce byte-identical output on every render.
#[test]
fn rendering_is_deterministic() {
    let export = parser::parse_export(FULL_EXPORT).unwrap();
    let opts = renderer::RenderOptions::default();

    let first = renderer::render_export(&export, &opts).unwrap();
    let second = renderer::render_export(&export, &opts).unwrap();
    assert_eq!(first, second);
}

/// An export with no entries still renders both section headings.
#[test]
fn empty_export_renders_section_skeleton() {
    let json = r#"{"title": "T", "authors": "A", "highlights": []}"#;
    let export = parser::parse_export(json).unwrap();
    let markdown =
        renderer::render_export(&export, &renderer::RenderOptions::default()).unwrap();

    assert_eq!(
        markdown,
        "# T\n\nAuthors: A\n\n## Highlights with Notes\n\n\n\n## All Highlights\n\n"
    );
}

/// The file-output path writes the rendered string verbatim.
#[test]
fn written_file_matches_rendered_string() {
    let export = parser::parse_export(FULL_EXPORT).unwrap();
    let markdown =
        renderer::render_export(&export, &renderer::RenderOptions::default()).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("book.md");
    fs::write(&out_path, &markdown).unwrap();

    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, markdown);
    assert!(!written.ends_with("\n\n\n"), "no extra trailing newlines");
}

/// A contradictory entry fails the render, so the writer never runs.
#[test]
fn contradictory_entry_produces_no_output_file() {
    let json = r#"{
        "title": "T",
        "authors": "A",
        "highlights": [{
            "text": "something",
            "note": "stray",
            "isNoteOnly": true,
            "location": { "value": "9", "url": "kindle://z" }
        }]
    }"#;
    let export = parser::parse_export(json).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("book.md");

    let rendered = renderer::render_export(&export, &renderer::RenderOptions::default());
    assert!(rendered.is_err());
    assert!(!out_path.exists());
}

/// Missing top-level fields are rejected at parse time.
#[test]
fn missing_required_fields_fail_to_parse() {
    for json in [
        r#"{"authors": "A", "highlights": []}"#,
        r#"{"title": "T", "highlights": []}"#,
        r#"{"title": "T", "authors": "A"}"#,
    ] {
        assert!(parser::parse_export(json).is_err(), "accepted {json}");
    }
}
