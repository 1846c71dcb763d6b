use std::fmt;

use serde::{Deserialize, Serialize};

/// A single content difference, located by offset and length.
///
/// Both values are carried as text, exactly as the producer formatted them.
/// Nothing here parses or checks them; leading zeros and non-numeric
/// sentinels pass through untouched. The two fields are independent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffEntry {
    offset: Option<String>,
    length: Option<String>,
}

impl DiffEntry {
    /// Create an entry holding exactly `offset` and `length`.
    pub fn new(offset: Option<String>, length: Option<String>) -> Self {
        Self { offset, length }
    }

    /// Create an entry with both values present.
    pub fn at(offset: impl Into<String>, length: impl Into<String>) -> Self {
        Self::new(Some(offset.into()), Some(length.into()))
    }

    /// Create an entry with both values absent.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> Option<&str> {
        self.offset.as_deref()
    }

    pub fn length(&self) -> Option<&str> {
        self.length.as_deref()
    }

    /// Returns `true` if neither value is present.
    pub fn is_empty(&self) -> bool {
        self.offset.is_none() && self.length.is_none()
    }
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "diff[offset={}, length={}]",
            self.offset().unwrap_or("-"),
            self.length().unwrap_or("-")
        )
    }
}
