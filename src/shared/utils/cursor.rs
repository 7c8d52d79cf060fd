//! Opaque scan-continuation cursors.
//!
//! A cursor carries the partition key of the last item seen, as the JSON map
//! `{"id": "<lastItemId>"}` encoded with URL-safe base64. Decoding is
//! forgiving: anything unparseable means "no cursor" (start from the
//! beginning), never an error.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use std::collections::HashMap;

pub fn encode_cursor(last_id: &str) -> String {
    let mut data = HashMap::new();
    data.insert("id", last_id);
    // serializing a map of strings cannot fail
    let json = serde_json::to_string(&data).unwrap_or_default();
    URL_SAFE.encode(json.as_bytes())
}

pub fn decode_cursor(cursor: &str) -> Option<String> {
    if cursor.is_empty() {
        return None;
    }

    let bytes = match URL_SAFE.decode(cursor) {
        Ok(bytes) => bytes,
        Err(e) => {
            log::warn!("Ignoring malformed cursor (base64): {}", e);
            return None;
        }
    };

    let data: HashMap<String, String> = match serde_json::from_slice(&bytes) {
        Ok(data) => data,
        Err(e) => {
            log::warn!("Ignoring malformed cursor (json): {}", e);
            return None;
        }
    };

    data.get("id").cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let cursor = encode_cursor("franchise-123");
        assert_eq!(decode_cursor(&cursor).as_deref(), Some("franchise-123"));
    }

    #[test]
    fn test_empty_cursor_decodes_to_none() {
        assert_eq!(decode_cursor(""), None);
    }

    #[test]
    fn test_invalid_base64_decodes_to_none() {
        assert_eq!(decode_cursor("!!!not-base64!!!"), None);
    }

    #[test]
    fn test_valid_base64_invalid_json_decodes_to_none() {
        let cursor = URL_SAFE.encode(b"not json at all");
        assert_eq!(decode_cursor(&cursor), None);
    }

    #[test]
    fn test_json_without_id_key_decodes_to_none() {
        let cursor = URL_SAFE.encode(br#"{"other":"value"}"#);
        assert_eq!(decode_cursor(&cursor), None);
    }
}
