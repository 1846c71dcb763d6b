use cdiff_types::{ContentRecord, DiffCollection, DiffEntry};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record with a defined JSON representation.
pub trait WireShape: Serialize + DeserializeOwned {
    /// Shape name used in log fields and error messages.
    const NAME: &'static str;
}

impl WireShape for ContentRecord {
    const NAME: &'static str = "ContentRecord";
}

impl WireShape for DiffEntry {
    const NAME: &'static str = "DiffEntry";
}

impl WireShape for DiffCollection {
    const NAME: &'static str = "DiffCollection";
}
