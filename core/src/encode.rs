//! Encoder passthrough. No validation is performed on this path.

use crate::errors::NsonError;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Encodes to a JSON string.
pub fn encode_string<T: Serialize + ?Sized>(value: &T) -> Result<String, NsonError> {
    serde_json::to_string(value).map_err(NsonError::Encode)
}

/// Encodes to JSON bytes.
pub fn encode_vec<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, NsonError> {
    serde_json::to_vec(value).map_err(NsonError::Encode)
}

/// Encodes to a `serde_json::Value`.
pub fn encode_value<T: Serialize + ?Sized>(value: &T) -> Result<JsonValue, NsonError> {
    serde_json::to_value(value).map_err(NsonError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serializer;
    use serde_json::json;

    struct Broken;

    impl Serialize for Broken {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("cannot encode"))
        }
    }

    #[test]
    fn test_encode_string() {
        let text = encode_string(&json!({"status": "ok"})).unwrap();
        assert_eq!(text, r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_encode_vec_and_value() {
        let bytes = encode_vec(&vec![1, 2, 3]).unwrap();
        assert_eq!(bytes, b"[1,2,3]");
        assert_eq!(encode_value(&"x").unwrap(), json!("x"));
    }

    #[test]
    fn test_encode_failure_wrapped() {
        let err = encode_string(&Broken).unwrap_err();
        assert!(matches!(err, NsonError::Encode(_)));
        assert!(err.to_string().contains("cannot encode"));
    }
}
