use crate::utils::error::Result;
use serde::Serialize;

/// Encodes CLI output as JSON, pretty-printed for multi-line listings.
pub fn encode_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{DeviceRecord, FormatterResult};
    use crate::utils::error::PanelError;
    use std::collections::HashMap;

    #[test]
    fn test_encode_formatter_result() {
        assert_eq!(
            encode_json(&FormatterResult::Sum(5.5), false).unwrap(),
            r#"{"kind":"sum","value":5.5}"#
        );
        assert_eq!(
            encode_json(&FormatterResult::AwaitingInput, false).unwrap(),
            r#"{"kind":"awaiting_input"}"#
        );
    }

    #[test]
    fn test_encode_records_pretty() {
        let records = vec![DeviceRecord {
            serial: "ABC123".to_string(),
            state: "device".to_string(),
        }];
        let encoded = encode_json(records.as_slice(), true).unwrap();
        assert!(encoded.contains('\n'));
        assert!(encoded.contains(r#""serial": "ABC123""#));
    }

    #[test]
    fn test_unencodable_value_is_serialization_error() {
        let mut by_pair = HashMap::new();
        by_pair.insert((1, 2), "non-string key");

        let err = encode_json(&by_pair, false).unwrap_err();
        assert!(matches!(err, PanelError::SerializationError(_)));
        assert_eq!(err.severity(), crate::utils::error::ErrorSeverity::Critical);
    }
}
