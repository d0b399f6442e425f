//! Metadata header parsing
//!
//! A content file starts with an optional fenced header:
//!
//! ```text
//! ---
//! title: "Hello"
//! date: "2024-01-01"
//! ---
//! body text
//! ```
//!
//! The splitter is lossless: rejoining header and body with the same
//! delimiters reconstructs the input byte for byte.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Metadata header fields declared by the content author
///
/// Field presence is a caller contract; the splitter performs no shape
/// validation. Unknown keys are kept in `extra` in author order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// ISO-8601 date string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "coverImage", skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse a metadata header from a content source string
    /// Returns (front_matter, body)
    ///
    /// A missing header yields an empty mapping and the entire input as
    /// body. A present, well-delimited header with invalid YAML is a
    /// `Malformed` error.
    pub fn parse(source: &str) -> Result<(Self, &str), ContentError> {
        let (header, body) = split_document(source);

        match header {
            None => Ok((FrontMatter::default(), body)),
            Some(header) if header.trim().is_empty() => Ok((FrontMatter::default(), body)),
            Some(header) => match serde_yaml::from_str::<FrontMatter>(header) {
                Ok(fm) => Ok((fm, body)),
                Err(e) => Err(ContentError::Malformed(format!(
                    "invalid metadata header: {}",
                    e
                ))),
            },
        }
    }

    /// Parse the `date` field as an ISO-8601 calendar date
    pub fn parse_date(&self) -> Option<NaiveDate> {
        let s = self.date.as_deref()?.trim();

        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(d);
        }
        // Fall back to a full datetime, keeping the date part
        if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }

        None
    }
}

/// Split raw text into a metadata header and a body
///
/// The header is the text between an opening `---` line and the next
/// closing `---` line. Without an opening fence, or with an unterminated
/// one, the whole input is body.
///
/// Round-trip invariant: when a header is found,
/// `format!("---\n{header}\n---\n{body}")` equals the original input.
pub fn split_document(source: &str) -> (Option<&str>, &str) {
    let Some(rest) = source.strip_prefix("---\n") else {
        return (None, source);
    };

    if let Some(end) = rest.find("\n---\n") {
        (Some(&rest[..end]), &rest[end + 5..])
    } else if let Some(header) = rest.strip_suffix("\n---") {
        // Closing fence on the last line, no trailing newline
        (Some(header), "")
    } else {
        (None, source)
    }
}
