//! Reply decoding for the backend contract.

use crate::{ClientError, ClientResult};
use gs_data::Dataset;
use serde::Deserialize;
use serde_json::Value;

/// Outcome of a network-load request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoadReply {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoadReply {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    /// Text for the load acknowledgment. The backend omits the message on
    /// success.
    pub fn acknowledgment(&self) -> &str {
        match &self.message {
            Some(message) => message,
            None if self.is_success() => "Network loaded.",
            None => "Failed to load the network.",
        }
    }
}

/// Attribute listing for one component. The backend reports static and
/// varying attribute names side by side.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AttributesReply {
    #[serde(default, rename = "static")]
    pub static_attrs: Vec<String>,
    #[serde(default)]
    pub varying: Vec<String>,
}

/// A data fetch either yields a dataset or an explicit error envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum DataReply {
    Dataset(Dataset),
    Error { message: String },
}

/// Detect the backend's `{"status": "error", "message": ...}` envelope.
/// A real dataset can carry a column named `status`, but its value is a
/// sequence, not a string, so it never matches.
fn error_envelope(value: &Value) -> Option<String> {
    let status = value.get("status")?.as_str()?;
    if status == "success" {
        return None;
    }
    Some(
        value
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("backend reported an error")
            .to_string(),
    )
}

/// Decode `/get_components`. The list must be an array of names; anything
/// else (including an error envelope) leaves the caller's state untouched.
pub fn decode_components(value: &Value) -> ClientResult<Vec<String>> {
    if let Some(message) = error_envelope(value) {
        return Err(ClientError::Backend { message });
    }
    let Some(list) = value.get("components").and_then(Value::as_array) else {
        return Err(ClientError::MalformedReply {
            what: "components is missing or not an array".to_string(),
        });
    };
    list.iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ClientError::MalformedReply {
                    what: "non-string component name".to_string(),
                }
            })
        })
        .collect()
}

/// Decode `/get_attributes/<component>`.
pub fn decode_attributes(value: Value) -> ClientResult<AttributesReply> {
    if let Some(message) = error_envelope(&value) {
        return Err(ClientError::Backend { message });
    }
    serde_json::from_value(value).map_err(|e| ClientError::MalformedReply {
        what: e.to_string(),
    })
}

/// Decode a static or varying data reply.
pub fn decode_data(value: Value) -> ClientResult<DataReply> {
    if let Some(message) = error_envelope(&value) {
        return Ok(DataReply::Error { message });
    }
    let dataset = serde_json::from_value(value).map_err(|e| ClientError::MalformedReply {
        what: e.to_string(),
    })?;
    Ok(DataReply::Dataset(dataset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn load_reply_defaults_its_acknowledgment() {
        let reply: LoadReply = serde_json::from_value(json!({"status": "success"})).unwrap();
        assert!(reply.is_success());
        assert_eq!(reply.acknowledgment(), "Network loaded.");

        let reply: LoadReply =
            serde_json::from_value(json!({"status": "error", "message": "Failed to load the network."}))
                .unwrap();
        assert!(!reply.is_success());
        assert_eq!(reply.acknowledgment(), "Failed to load the network.");
    }

    #[test]
    fn components_decode_from_array() {
        let value = json!({"components": ["Bus", "Generator", "Line"]});
        assert_eq!(
            decode_components(&value).unwrap(),
            ["Bus", "Generator", "Line"]
        );
    }

    #[test]
    fn non_array_components_are_malformed() {
        let value = json!({"components": "Bus"});
        assert!(matches!(
            decode_components(&value),
            Err(ClientError::MalformedReply { .. })
        ));

        let value = json!({"status": "error", "message": "No network loaded."});
        match decode_components(&value) {
            Err(ClientError::Backend { message }) => assert_eq!(message, "No network loaded."),
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[test]
    fn attributes_keep_both_kinds() {
        let value = json!({"static": ["p_nom", "bus"], "varying": ["p_set", "p_max_pu"]});
        let reply = decode_attributes(value).unwrap();
        assert_eq!(reply.static_attrs, ["p_nom", "bus"]);
        assert_eq!(reply.varying, ["p_set", "p_max_pu"]);
    }

    #[test]
    fn data_reply_discriminates_envelope_from_dataset() {
        let envelope = json!({"status": "error", "message": "Attribute 'p_set' not found in varying data."});
        match decode_data(envelope).unwrap() {
            DataReply::Error { message } => {
                assert_eq!(message, "Attribute 'p_set' not found in varying data.")
            }
            other => panic!("expected error reply, got {other:?}"),
        }

        let dataset = json!({"snapshots": ["t0"], "Gen1": [1.0]});
        match decode_data(dataset).unwrap() {
            DataReply::Dataset(dataset) => {
                assert_eq!(dataset.row_count(), 1);
                assert!(dataset.snapshots().is_some());
            }
            other => panic!("expected dataset, got {other:?}"),
        }
    }

    #[test]
    fn status_column_is_not_an_envelope() {
        let value = json!({"status": ["ok", "ok"], "v": [1.0, 2.0]});
        match decode_data(value).unwrap() {
            DataReply::Dataset(dataset) => assert_eq!(dataset.len(), 2),
            other => panic!("expected dataset, got {other:?}"),
        }
    }
}
