//! JSON codec for content-diff wire records.
//!
//! Turns [`ContentRecord`], [`DiffEntry`] and [`DiffCollection`] into JSON
//! bytes and back, enforcing a configurable payload size limit.
//!
//! # Key Types
//!
//! - [`JsonCodec`] — Size-limited JSON encoder/decoder
//! - [`CodecConfig`] — Codec settings, loadable from TOML
//! - [`WireShape`] — Marker for types with a defined JSON shape
//!
//! [`ContentRecord`]: cdiff_types::ContentRecord
//! [`DiffEntry`]: cdiff_types::DiffEntry
//! [`DiffCollection`]: cdiff_types::DiffCollection

pub mod codec;
pub mod config;
pub mod error;
pub mod shape;

pub use codec::JsonCodec;
pub use config::{CodecConfig, DEFAULT_MAX_PAYLOAD_SIZE};
pub use error::{CodecError, CodecResult};
pub use shape::WireShape;
