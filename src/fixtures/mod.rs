//! Test fixtures and helper data.
//!
//! Canned wire chunks and payloads used across test suites.

use serde_json::json;

/// Sample API key for testing
pub const TEST_API_KEY: &str = "ds-test-key-123456";

/// Sample document id
pub const TEST_DOCUMENT_ID: &str = "doc_42";

/// Sample section node id
pub const TEST_NODE_ID: &str = "node_7";

/// A session announcement frame as it appears on the wire
pub fn session_frame(session_id: &str, message_id: &str) -> String {
    json!({ "session_id": session_id, "message_id": message_id }).to_string()
}

/// A status frame as it appears on the wire
pub fn status_frame(status: &str) -> String {
    json!({ "status": status }).to_string()
}

/// A delta frame as it appears on the wire
pub fn delta_frame(text: &str) -> String {
    json!({ "delta": text }).to_string()
}

/// A typical reply stream: announcement, then deltas, then a status
pub fn sample_reply_chunks() -> Vec<String> {
    vec![
        session_frame("sess_abc", "msg_123"),
        delta_frame("Here is a "),
        delta_frame("suggestion."),
        status_frame("draft"),
    ]
}

/// Sample document payload
pub fn sample_document() -> serde_json::Value {
    json!({
        "id": TEST_DOCUMENT_ID,
        "title": "Field Guide",
        "sections": [
            {
                "node_id": TEST_NODE_ID,
                "heading": "Introduction",
                "content": "<p>Opening remarks.</p>",
                "position": 0
            }
        ],
        "updated_at": "2024-05-01T12:00:00Z"
    })
}

/// Sample improvement draft payload
pub fn sample_draft(status: &str) -> serde_json::Value {
    json!({
        "id": "draft_9",
        "document_id": TEST_DOCUMENT_ID,
        "node_id": TEST_NODE_ID,
        "content": "<p>Improved opening remarks.</p>",
        "status": status,
        "created_at": "2024-05-01T12:30:00Z"
    })
}

/// Sample attachment payload
pub fn sample_attachment() -> serde_json::Value {
    json!({
        "key": "uploads/2024/notes.pdf",
        "name": "notes.pdf",
        "size": 20480,
        "file_url": "https://cdn.draftsmith.dev/uploads/2024/notes.pdf"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_are_valid_json() {
        for text in [
            session_frame("s", "m"),
            status_frame("ask"),
            delta_frame("hello"),
        ] {
            assert!(serde_json::from_str::<serde_json::Value>(&text).is_ok());
        }
    }

    #[test]
    fn test_sample_reply_chunks_shape() {
        let chunks = sample_reply_chunks();
        assert_eq!(chunks.len(), 4);
        assert!(chunks[0].contains("session_id"));
        assert!(chunks[3].contains("status"));
    }
}
