use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::entry::DiffEntry;

/// The differences between left and right content sharing one ID.
///
/// `diff_result_type` is an open label chosen by the producer. `diffs` is
/// never absent; an empty collection carries an empty sequence. Entry order
/// is the order the differences occur in the content and is preserved
/// through serialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiffCollection {
    diff_result_type: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    diffs: Vec<DiffEntry>,
}

impl DiffCollection {
    /// Create a collection holding exactly `diff_result_type` and `diffs`.
    pub fn new(diff_result_type: Option<String>, diffs: Vec<DiffEntry>) -> Self {
        Self {
            diff_result_type,
            diffs,
        }
    }

    /// Create a collection with a present label.
    pub fn labeled(diff_result_type: impl Into<String>, diffs: Vec<DiffEntry>) -> Self {
        Self::new(Some(diff_result_type.into()), diffs)
    }

    /// Create a collection with no label and no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn diff_result_type(&self) -> Option<&str> {
        self.diff_result_type.as_deref()
    }

    /// The entries in order.
    pub fn diffs(&self) -> &[DiffEntry] {
        &self.diffs
    }

    pub fn len(&self) -> usize {
        self.diffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diffs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffEntry> {
        self.diffs.iter()
    }

    /// Consume the collection and return its label and entries.
    pub fn into_parts(self) -> (Option<String>, Vec<DiffEntry>) {
        (self.diff_result_type, self.diffs)
    }
}

impl<'a> IntoIterator for &'a DiffCollection {
    type Item = &'a DiffEntry;
    type IntoIter = std::slice::Iter<'a, DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.diffs.iter()
    }
}

impl IntoIterator for DiffCollection {
    type Item = DiffEntry;
    type IntoIter = std::vec::IntoIter<DiffEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.diffs.into_iter()
    }
}

impl fmt::Display for DiffCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} diffs)",
            self.diff_result_type().unwrap_or("-"),
            self.diffs.len()
        )
    }
}

// `"diffs": null` decodes to an empty sequence.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DiffEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<DiffEntry>>::deserialize(deserializer)?.unwrap_or_default())
}
