// SPDX-License-Identifier: GPL-3.0-only
// Copyright (C) 2025 Brian Hetro <whee@smaertness.net>

//! JSON parsing for Bookcision Kindle exports.
//!
//! This module handles deserialization of the JSON format produced by the
//! Bookcision bookmarklet. The format contains the book's metadata and the
//! ordered list of highlights and standalone notes taken while reading.
//!
//! # Format Overview
//!
//! A Bookcision export contains:
//! - The book's title and authors
//! - A list of entries, each either a highlight (with optional attached note)
//!   or a standalone note
//! - A location for every entry: a display value plus a `kindle://` deep link
//!
//! # Example
//!
//! ```
//! use kindle2md::parser::parse_export;
//!
//! let json = r#"{
//!     "title": "The Story of My Life",
//!     "authors": "Keller, Helen",
//!     "highlights": [{
//!         "text": "The beginning of my life was simple",
//!         "note": null,
//!         "isNoteOnly": false,
//!         "location": { "value": "12", "url": "kindle://book?action=open" }
//!     }]
//! }"#;
//!
//! let export = parse_export(json).unwrap();
//! assert_eq!(export.highlights.len(), 1);
//! ```

use serde::Deserialize;
use snafu::prelude::*;

/// Error type for JSON parsing failures.
#[derive(Debug, Snafu)]
pub enum ParseError {
    /// Failed to parse JSON content.
    #[snafu(display("failed to parse JSON: {source}"))]
    Json {
        /// The underlying JSON parsing error.
        source: serde_json::Error,
    },
}

/// The root structure of a Bookcision Kindle export.
///
/// This represents every note and highlight exported for a single book.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KindleExport {
    /// The book's title.
    pub title: String,

    /// The book's authors, as a single display string (e.g. "Keller, Helen").
    pub authors: String,

    /// The entries in reading order, exactly as exported.
    pub highlights: Vec<Entry>,
}

/// A single highlight-or-note item from the export.
///
/// An entry is either a highlight (possibly with a note attached to it) or a
/// standalone note with no underlying highlighted text. The two shapes are
/// distinguished by [`is_note_only`](Self::is_note_only); an entry whose
/// `text` contradicts that flag is rejected at render time.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// The highlighted passage. Empty for standalone notes.
    pub text: String,

    /// The note attached to this entry, if any.
    ///
    /// Bookcision emits `null` for highlights without notes; older exports
    /// omit the key entirely. Both map to `None`.
    #[serde(default)]
    pub note: Option<String>,

    /// Whether this entry is a standalone note rather than a highlight.
    pub is_note_only: bool,

    /// Where the entry sits in the book.
    pub location: Location,
}

/// A page/position reference plus a deep link back into the book.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Location {
    /// The display form of the position (e.g. "1278").
    pub value: String,

    /// A `kindle://` URL that opens the book at this position.
    pub url: String,
}

/// Parses a JSON string into a [`KindleExport`] structure.
///
/// This is the main entry point for parsing Bookcision exports. All
/// field-presence validation happens here: a document missing `title`,
/// `authors`, `highlights`, or any required entry field fails to parse.
///
/// # Arguments
///
/// * `json_str` - The raw JSON content from a Bookcision export file
///
/// # Errors
///
/// Returns an error if the JSON is malformed or doesn't match the expected
/// Bookcision export schema.
///
/// # Example
///
/// ```
/// use kindle2md::parser::parse_export;
///
/// let json = r#"{
///     "title": "Walden",
///     "authors": "Thoreau, Henry David",
///     "highlights": []
/// }"#;
///
/// let export = parse_export(json).unwrap();
/// assert_eq!(export.title, "Walden");
/// ```
pub fn parse_export(json_str: &str) -> Result<KindleExport, ParseError> {
    serde_json::from_str(json_str).context(JsonSnafu)
}
