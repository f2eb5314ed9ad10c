//! Descriptor documents
//!
//! A descriptor is a markdown file that may open with a `---` delimited header
//! block. The header holds a small key/value document; everything after the
//! closing marker is free text. Files without a complete header block are pure
//! body.

mod header;
mod scalar;

use crate::error::StorageError;
use std::path::Path;

pub use header::{parse_header, Header};

/// Marker line that opens and closes a header block.
pub const HEADER_MARKER: &str = "---";

/// A parsed descriptor: structured header plus trailing free text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub header: Header,
    pub body: String,
}

impl Document {
    /// Body with surrounding whitespace removed, or `None` when nothing is left.
    pub fn trimmed_body(&self) -> Option<&str> {
        let body = self.body.trim();
        if body.is_empty() {
            None
        } else {
            Some(body)
        }
    }
}

/// Parse descriptor text into its header and body.
pub fn parse_document(text: &str) -> Document {
    let normalized = normalize_line_endings(text);
    match split_header_block(&normalized) {
        Some((block, body)) => Document {
            header: parse_header(block),
            body: body.to_string(),
        },
        None => Document {
            header: Header::new(),
            body: normalized,
        },
    }
}

/// Read and parse a descriptor file.
pub fn read_document(path: &Path) -> Result<Document, StorageError> {
    let text = std::fs::read_to_string(path).map_err(|e| StorageError::io(path, e))?;
    Ok(parse_document(&text))
}

/// Unify line endings and drop a leading byte order mark.
fn normalize_line_endings(text: &str) -> String {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split `---\n<block>\n---\n<body>`; `None` if the opening or closing marker is missing.
fn split_header_block(text: &str) -> Option<(&str, &str)> {
    let (first, rest) = text.split_once('\n')?;
    if first.trim_end() != HEADER_MARKER {
        return None;
    }

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == HEADER_MARKER {
            return Some((&rest[..offset], &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
