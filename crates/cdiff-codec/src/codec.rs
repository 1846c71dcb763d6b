use tracing::{debug, warn};

use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult};
use crate::shape::WireShape;

/// JSON codec for wire records.
///
/// Payloads larger than [`CodecConfig::max_payload_size`] are rejected on
/// both sides: encoded output is dropped, and oversized input is never parsed.
#[derive(Clone, Debug, Default)]
pub struct JsonCodec {
    config: CodecConfig,
}

impl JsonCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a record as JSON bytes.
    pub fn encode<T: WireShape>(&self, value: &T) -> CodecResult<Vec<u8>> {
        self.encode_to_string(value).map(String::into_bytes)
    }

    /// Encode a record as a JSON string.
    pub fn encode_to_string<T: WireShape>(&self, value: &T) -> CodecResult<String> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(|e| CodecError::Serialization {
            shape: T::NAME,
            reason: e.to_string(),
        })?;
        self.check_size::<T>(json.len())?;
        debug!(shape = T::NAME, bytes = json.len(), "encoded payload");
        Ok(json)
    }

    /// Decode a record from JSON bytes.
    pub fn decode<T: WireShape>(&self, data: &[u8]) -> CodecResult<T> {
        self.check_size::<T>(data.len())?;
        let value = serde_json::from_slice(data).map_err(|e| CodecError::Deserialization {
            shape: T::NAME,
            reason: e.to_string(),
        })?;
        debug!(shape = T::NAME, bytes = data.len(), "decoded payload");
        Ok(value)
    }

    /// Decode a record from a JSON string.
    pub fn decode_str<T: WireShape>(&self, s: &str) -> CodecResult<T> {
        self.decode(s.as_bytes())
    }

    fn check_size<T: WireShape>(&self, size: usize) -> CodecResult<()> {
        if self.config.allows(size) {
            return Ok(());
        }
        warn!(
            shape = T::NAME,
            bytes = size,
            max = self.config.max_payload_size,
            "payload rejected"
        );
        Err(CodecError::PayloadTooLarge {
            shape: T::NAME,
            size,
            max: self.config.max_payload_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdiff_types::{ContentRecord, DiffCollection, DiffEntry};
    use proptest::prelude::*;

    fn limited(max: usize) -> JsonCodec {
        JsonCodec::new(CodecConfig {
            max_payload_size: max,
            pretty: false,
        })
    }

    #[test]
    fn encode_added_collection() {
        let codec = JsonCodec::default();
        let diffs = DiffCollection::labeled("ADDED", vec![DiffEntry::at("3", "7")]);
        let json = codec.encode_to_string(&diffs).unwrap();
        assert_eq!(
            json,
            r#"{"diffResultType":"ADDED","diffs":[{"offset":"3","length":"7"}]}"#
        );
        assert_eq!(codec.encode(&diffs).unwrap(), json.into_bytes());
    }

    #[test]
    fn changed_collection_roundtrip_keeps_order() {
        let codec = JsonCodec::default();
        let diffs = DiffCollection::labeled(
            "CHANGED",
            vec![DiffEntry::at("0", "5"), DiffEntry::at("10", "2")],
        );
        let bytes = codec.encode(&diffs).unwrap();
        let decoded: DiffCollection = codec.decode(&bytes).unwrap();
        assert_eq!(decoded, diffs);
        assert_eq!(decoded.diffs()[0], DiffEntry::at("0", "5"));
        assert_eq!(decoded.diffs()[1], DiffEntry::at("10", "2"));
    }

    #[test]
    fn content_roundtrip() {
        let codec = JsonCodec::default();
        for record in [ContentRecord::from_data("eyJhIjoxfQ=="), ContentRecord::empty()] {
            let json = codec.encode_to_string(&record).unwrap();
            let decoded: ContentRecord = codec.decode_str(&json).unwrap();
            assert_eq!(decoded, record);
        }
    }

    #[test]
    fn entry_with_absent_length() {
        let codec = JsonCodec::default();
        let entry = DiffEntry::new(Some("42".into()), None);
        let json = codec.encode_to_string(&entry).unwrap();
        assert_eq!(json, r#"{"offset":"42","length":null}"#);
        let decoded: DiffEntry = codec.decode_str(&json).unwrap();
        assert_eq!(decoded.offset(), Some("42"));
        assert_eq!(decoded.length(), None);
    }

    #[test]
    fn pretty_output_decodes() {
        let codec = JsonCodec::new(CodecConfig::pretty());
        let diffs = DiffCollection::labeled("REMOVED", vec![DiffEntry::at("1", "1")]);
        let json = codec.encode_to_string(&diffs).unwrap();
        assert!(json.contains('\n'));
        let decoded: DiffCollection = codec.decode_str(&json).unwrap();
        assert_eq!(decoded, diffs);
    }

    #[test]
    fn encode_rejects_oversized() {
        let codec = limited(16);
        let record = ContentRecord::from_data("x".repeat(100));
        let err = codec.encode(&record).unwrap_err();
        match err {
            CodecError::PayloadTooLarge { shape, size, max } => {
                assert_eq!(shape, "ContentRecord");
                assert!(size > 16);
                assert_eq!(max, 16);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn decode_rejects_oversized() {
        let codec = limited(8);
        let err = codec
            .decode::<DiffEntry>(br#"{"offset":"1","length":"2"}"#)
            .unwrap_err();
        assert!(matches!(err, CodecError::PayloadTooLarge { shape: "DiffEntry", .. }));
    }

    #[test]
    fn zero_limit_accepts_anything() {
        let codec = limited(0);
        let record = ContentRecord::from_data("y".repeat(4096));
        let bytes = codec.encode(&record).unwrap();
        let decoded: ContentRecord = codec.decode(&bytes).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn decode_invalid_json() {
        let codec = JsonCodec::default();
        let err = codec.decode_str::<DiffCollection>("{not json").unwrap_err();
        assert!(matches!(
            err,
            CodecError::Deserialization { shape: "DiffCollection", .. }
        ));
    }

    #[test]
    fn decode_numeric_offset_fails() {
        let codec = JsonCodec::default();
        let err = codec
            .decode_str::<DiffEntry>(r#"{"offset":3,"length":"7"}"#)
            .unwrap_err();
        assert!(matches!(err, CodecError::Deserialization { .. }));
    }

    #[test]
    fn decode_null_diffs() {
        let codec = JsonCodec::default();
        let decoded: DiffCollection = codec
            .decode_str(r#"{"diffResultType":null,"diffs":null}"#)
            .unwrap();
        assert_eq!(decoded, DiffCollection::empty());
    }

    #[test]
    fn error_messages() {
        let err = CodecError::PayloadTooLarge {
            shape: "DiffEntry",
            size: 20,
            max: 10,
        };
        assert_eq!(err.to_string(), "DiffEntry payload too large: 20 bytes (max 10)");
    }

    proptest! {
        #[test]
        fn collection_roundtrip(
            label in proptest::option::of("[A-Z]{1,10}"),
            spans in proptest::collection::vec(("[0-9]{1,6}", "[0-9]{1,6}"), 0..32),
        ) {
            let codec = JsonCodec::default();
            let entries = spans.into_iter().map(|(o, l)| DiffEntry::at(o, l)).collect();
            let diffs = DiffCollection::new(label, entries);
            let bytes = codec.encode(&diffs).unwrap();
            let decoded: DiffCollection = codec.decode(&bytes).unwrap();
            prop_assert_eq!(decoded, diffs);
        }
    }
}
