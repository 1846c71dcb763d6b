//! Wire records for the content-diff API.
//!
//! These are the immutable value types exchanged at the API boundary. They
//! carry whatever a producer computed elsewhere and expose read accessors
//! only; construction never fails.
//!
//! # Key Types
//!
//! - [`ContentRecord`] — Content payload to put/update for a left or right revision
//! - [`DiffEntry`] — A single difference located by offset and length (kept as text)
//! - [`DiffCollection`] — A labeled, ordered sequence of differences
//!
//! # JSON Shapes
//!
//! ```text
//! ContentRecord   -> { "data": string | null }
//! DiffEntry       -> { "offset": string | null, "length": string | null }
//! DiffCollection  -> { "diffResultType": string | null, "diffs": [DiffEntry, ...] }
//! ```

pub mod collection;
pub mod content;
pub mod entry;

pub use collection::DiffCollection;
pub use content::ContentRecord;
pub use entry::DiffEntry;
