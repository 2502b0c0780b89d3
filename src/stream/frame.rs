//! Control-frame classification for reply streams.

use serde_json::Value;

/// A recognized control frame embedded in a reply stream.
///
/// Classification precedence mirrors the wire protocol: a session
/// announcement carries both identifiers, a lifecycle marker carries
/// `status`, and a text fragment carries `delta`. A valid JSON object
/// matching none of these is discarded without being surfaced as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Session announcement: backend-assigned identifiers for this turn
    Session {
        /// Opaque conversation identifier
        session_id: String,
        /// Opaque message identifier
        message_id: String,
    },
    /// Lifecycle marker (e.g. `"ask"`, `"draft"`); the last one wins
    Status(String),
    /// Incremental fragment of assistant-generated text
    Delta(String),
    /// Valid JSON with no recognized field; consumed and dropped
    Unrecognized,
}

/// Classify a candidate frame.
///
/// Returns `None` when `text` is not a valid JSON object, in which case the
/// caller falls back to treating the surrounding buffer as literal text.
pub fn classify_frame(text: &str) -> Option<Frame> {
    let value: Value = serde_json::from_str(text).ok()?;
    let object = value.as_object()?;

    if let (Some(session_id), Some(message_id)) = (
        object.get("session_id").and_then(Value::as_str),
        object.get("message_id").and_then(Value::as_str),
    ) {
        return Some(Frame::Session {
            session_id: session_id.to_string(),
            message_id: message_id.to_string(),
        });
    }

    if let Some(status) = object.get("status").and_then(Value::as_str) {
        return Some(Frame::Status(status.to_string()));
    }

    if let Some(delta) = object.get("delta").and_then(Value::as_str) {
        return Some(Frame::Delta(delta.to_string()));
    }

    Some(Frame::Unrecognized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_session_frame() {
        let frame = classify_frame(r#"{"session_id":"s1","message_id":"m1"}"#).unwrap();
        assert_eq!(
            frame,
            Frame::Session {
                session_id: "s1".to_string(),
                message_id: "m1".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_status_frame() {
        assert_eq!(
            classify_frame(r#"{"status":"draft"}"#),
            Some(Frame::Status("draft".to_string()))
        );
    }

    #[test]
    fn test_classify_delta_frame() {
        assert_eq!(
            classify_frame(r#"{"delta":"Hello "}"#),
            Some(Frame::Delta("Hello ".to_string()))
        );
    }

    #[test]
    fn test_session_takes_precedence_over_other_fields() {
        let frame =
            classify_frame(r#"{"session_id":"s1","message_id":"m1","status":"ask"}"#).unwrap();
        assert!(matches!(frame, Frame::Session { .. }));
    }

    #[test]
    fn test_session_id_alone_is_not_a_session_frame() {
        // Both identifiers are required; a lone session_id falls through.
        assert_eq!(
            classify_frame(r#"{"session_id":"s1"}"#),
            Some(Frame::Unrecognized)
        );
    }

    #[test]
    fn test_unrecognized_object() {
        assert_eq!(
            classify_frame(r#"{"progress":42}"#),
            Some(Frame::Unrecognized)
        );
    }

    #[test]
    fn test_non_string_delta_is_unrecognized() {
        assert_eq!(classify_frame(r#"{"delta":7}"#), Some(Frame::Unrecognized));
    }

    #[test]
    fn test_invalid_json_is_none() {
        assert_eq!(classify_frame(r#"{"delta": nope}"#), None);
        assert_eq!(classify_frame("not json"), None);
    }

    #[test]
    fn test_non_object_json_is_none() {
        assert_eq!(classify_frame(r#"["delta"]"#), None);
    }
}
