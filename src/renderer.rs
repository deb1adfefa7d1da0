// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! Markdown rendering for parsed Bookcision exports.
//!
//! This module transforms a [`KindleExport`] into a Markdown document. The
//! output format is designed to be clean and readable while preserving the
//! order of the exported entries.
//!
//! # Output Format
//!
//! The rendered Markdown includes:
//! - A top-level heading with the book's title
//! - An `Authors:` line
//! - An optional `## Highlights with Notes` section listing only the entries
//!   that carry a note
//! - An `## All Highlights` section listing every entry
//!
//! Entries that appear in the notes section appear again in the full listing.
//!
//! # Example
//!
//! ```
//! use kindle2md::parser::{Entry, KindleExport, Location};
//! use kindle2md::renderer::{RenderOptions, render_export};
//!
//! let export = KindleExport {
//!     title: "Walden".into(),
//!     authors: "Thoreau, Henry David".into(),
//!     highlights: vec![Entry {
//!         text: "The mass of men lead lives of quiet desperation.".into(),
//!         note: None,
//!         is_note_only: false,
//!         location: Location {
//!             value: "89".into(),
//!             url: "kindle://book?action=open&location=89".into(),
//!         },
//!     }],
//! };
//!
//! let markdown = render_export(&export, &RenderOptions::default()).unwrap();
//!
//! assert!(markdown.starts_with("# Walden"));
//! assert!(markdown.contains("quiet desperation"));
//! ```

use crate::parser::{Entry, KindleExport};
use snafu::prelude::*;
use std::fmt::Write;

/// Error type for rendering failures.
///
/// Rendering fails only on contradictory entries, where the `isNoteOnly`
/// marker disagrees with the presence of highlight text. The index refers to
/// the entry's zero-based position in the export's `highlights` list.
#[derive(Debug, Snafu)]
pub enum RenderError {
    /// An entry marked note-only carries highlight text.
    #[snafu(display("entry {index} is marked note-only but contains highlight text"))]
    NoteOnlyWithText {
        /// Position of the offending entry in the export.
        index: usize,
    },

    /// An entry marked as a highlight has no text.
    #[snafu(display("entry {index} is a highlight with no text"))]
    HighlightWithoutText {
        /// Position of the offending entry in the export.
        index: usize,
    },
}

/// Configuration options for Markdown rendering.
///
/// Controls which optional elements are included in the rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Whether to include the "Highlights with Notes" section.
    ///
    /// When enabled, entries with an attached note are listed in their own
    /// section ahead of the full listing. They still appear in the full
    /// listing afterwards.
    pub notes_section: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            notes_section: true,
        }
    }
}

/// Renders a parsed Bookcision export as Markdown.
///
/// This is the main entry point for rendering. It processes all entries in
/// the export and produces a complete Markdown document. Nothing is written
/// anywhere: callers receive the full document or the first error.
///
/// # Arguments
///
/// * `export` - The parsed export to render
/// * `opts` - Configuration options controlling the output format
///
/// # Errors
///
/// Returns an error for the first entry whose `isNoteOnly` marker contradicts
/// its text, leaving no partial output behind.
pub fn render_export(export: &KindleExport, opts: &RenderOptions) -> Result<String, RenderError> {
    let mut out = String::new();
    writeln!(out, "# {}\n", export.title).unwrap();
    writeln!(out, "Authors: {}\n", export.authors).unwrap();

    if opts.notes_section {
        writeln!(out, "## Highlights with Notes\n").unwrap();
        for (index, entry) in export.highlights.iter().enumerate() {
            if entry.note.is_some() {
                render_entry(&mut out, entry, index)?;
            }
        }
        out.push_str("\n\n");
    }

    writeln!(out, "## All Highlights\n").unwrap();
    for (index, entry) in export.highlights.iter().enumerate() {
        render_entry(&mut out, entry, index)?;
    }

    Ok(out)
}

/// Renders a single entry as zero, one, or two bullet lines.
///
/// A note-only entry with an empty or absent note emits nothing, matching the
/// export format's own behavior for such records.
fn render_entry(out: &mut String, entry: &Entry, index: usize) -> Result<(), RenderError> {
    ensure!(
        !entry.is_note_only || entry.text.is_empty(),
        NoteOnlyWithTextSnafu { index }
    );
    ensure!(
        entry.is_note_only || !entry.text.is_empty(),
        HighlightWithoutTextSnafu { index }
    );

    let link = format!("[{}]({})", entry.location.value, entry.location.url);

    if entry.is_note_only {
        if let Some(note) = &entry.note
            && !note.is_empty()
        {
            writeln!(out, "- Note: {note} ({link})").unwrap();
        }
    } else {
        writeln!(out, "- {} ({link})", entry.text).unwrap();
        if let Some(note) = &entry.note
            && !note.is_empty()
        {
            writeln!(out, "    - Note: {note}").unwrap();
        }
    }

    Ok(())
}
