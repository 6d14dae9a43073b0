//! Player and club tag validation.
//!
//! Upstream identifies players and clubs by short alphanumeric tags
//! (e.g. `#9LUU9RR`). User input arrives in every shape imaginable, so
//! all tag-bearing routes normalize through [`Tag::parse`] before a
//! request is forwarded upstream.

use std::fmt;

use thiserror::Error;

/// Tag validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TagError {
    #[error("Tag is required")]
    Missing,

    #[error("Tag contains invalid characters (only letters and digits are allowed)")]
    InvalidCharacters,

    #[error("Tag must be between 3 and 15 characters, got {0}")]
    InvalidLength(usize),
}

/// A validated tag in canonical form: uppercase alphanumeric,
/// 3-15 characters, no `#` prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    /// Normalize and validate raw user input into a canonical tag.
    ///
    /// Strips `#` characters wherever they appear, uppercases the rest,
    /// then enforces the character set and length bounds.
    pub fn parse(raw: &str) -> Result<Tag, TagError> {
        if raw.trim().is_empty() {
            return Err(TagError::Missing);
        }

        let cleaned: String = raw
            .chars()
            .filter(|c| *c != '#')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if !cleaned.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()) {
            return Err(TagError::InvalidCharacters);
        }

        if cleaned.len() < 3 || cleaned.len() > 15 {
            return Err(TagError::InvalidLength(cleaned.len()));
        }

        Ok(Tag(cleaned))
    }

    /// The canonical tag without any prefix.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form used in upstream request paths (`%23` is `#`).
    pub fn encoded(&self) -> String {
        format!("%23{}", self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
