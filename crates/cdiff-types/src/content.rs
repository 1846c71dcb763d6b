use std::fmt;

use serde::{Deserialize, Serialize};

/// Content to put or update for one side of a comparison.
///
/// The payload is opaque text. An absent payload means no content was
/// supplied, which is distinct from an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRecord {
    data: Option<String>,
}

impl ContentRecord {
    /// Create a record holding exactly `data`.
    pub fn new(data: Option<String>) -> Self {
        Self { data }
    }

    /// Create a record with a present payload.
    pub fn from_data(data: impl Into<String>) -> Self {
        Self::new(Some(data.into()))
    }

    /// Create a record with no payload.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The stored payload, if any.
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    /// Returns `true` if a payload was supplied (even an empty one).
    pub fn is_present(&self) -> bool {
        self.data.is_some()
    }

    /// Consume the record and return the payload.
    pub fn into_data(self) -> Option<String> {
        self.data
    }
}

impl fmt::Display for ContentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.data {
            Some(data) => write!(f, "content[{} bytes]", data.len()),
            None => write!(f, "content[-]"),
        }
    }
}
