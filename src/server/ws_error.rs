//! Centralized helpers for WebSocket error frames.
//!
//! Use these helpers so every error frame has the same shape:
//! `{"action":"Error","data":{"code":..,"message":..,"context":..}}`.
use serde_json::{Value, json};

/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_COMMAND").
/// - `message`: Human-readable error message.
/// - `context`: Optional structured context (e.g. session id).
pub fn ws_error_message(code: &str, message: &str, context: Option<Value>) -> String {
    json!({
        "action": "Error",
        "data": {
            "code": code,
            "message": message,
            "context": context.unwrap_or(Value::Null),
        }
    })
    .to_string()
}

/// Error frame for a client frame that could not be parsed.
pub fn ws_invalid_command_message(context: Option<Value>) -> String {
    ws_error_message("INVALID_COMMAND", "Unrecognized command.", context)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_frame_has_code_message_and_context() {
        let frame = ws_error_message("BANNED", "slow down", Some(json!({"session": "abc"})));
        let value: Value = serde_json::from_str(&frame).expect("valid json");
        assert_eq!(value["action"], "Error");
        assert_eq!(value["data"]["code"], "BANNED");
        assert_eq!(value["data"]["context"]["session"], "abc");

        let frame: Value = serde_json::from_str(&ws_invalid_command_message(None)).expect("valid json");
        assert_eq!(frame["data"]["context"], Value::Null);
    }
}
