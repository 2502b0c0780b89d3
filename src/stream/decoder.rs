//! Incremental reply decoder.
//!
//! [`ReplyDecoder`] turns raw response bytes into a sequence of
//! [`ReplyEvent`]s. It owns three pieces of state for the lifetime of one
//! stream: the decode buffer (the not-yet-classified suffix of everything
//! decoded so far), the session identifiers and status from control frames,
//! and the accumulated full message. No byte is dispatched twice, and none
//! is dropped: bytes leave the buffer either as a consumed frame or as a
//! text delta.

use super::frame::{classify_frame, Frame};
use super::scanner::{scan_object, Scan};
use serde::{Deserialize, Serialize};

/// An event decoded from a reply stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyEvent {
    /// Session announcement discovered in the stream
    Session {
        /// Backend-assigned session identifier
        session_id: String,
        /// Backend-assigned message identifier
        message_id: String,
    },
    /// Lifecycle status marker
    Status(String),
    /// A fragment of assistant-generated text, in arrival order
    Delta(String),
}

/// Final result of a completed reply stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyOutcome {
    /// Session identifier, if any session frame arrived
    pub session_id: Option<String>,
    /// Message identifier, if any session frame arrived
    pub message_id: Option<String>,
    /// Concatenation of every dispatched text fragment, in order
    pub full_message: String,
    /// Last status frame seen, or the configured initial status
    pub status: String,
}

/// Incremental UTF-8 decoder that holds back an incomplete trailing
/// multi-byte sequence between feeds. Invalid sequences decode to U+FFFD.
#[derive(Debug, Default)]
struct Utf8Accumulator {
    pending: Vec<u8>,
}

impl Utf8Accumulator {
    fn decode(&mut self, input: &[u8]) -> String {
        self.pending.extend_from_slice(input);

        let mut out = String::new();
        let mut start = 0;
        loop {
            match std::str::from_utf8(&self.pending[start..]) {
                Ok(valid) => {
                    out.push_str(valid);
                    start = self.pending.len();
                    break;
                }
                Err(err) => {
                    let valid_len = err.valid_up_to();
                    out.push_str(
                        std::str::from_utf8(&self.pending[start..start + valid_len])
                            .unwrap_or_default(),
                    );
                    start += valid_len;
                    match err.error_len() {
                        Some(invalid_len) => {
                            out.push('\u{FFFD}');
                            start += invalid_len;
                        }
                        // Incomplete trailing sequence; keep it for the next feed.
                        None => break,
                    }
                }
            }
        }

        self.pending.drain(..start);
        out
    }

    fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            String::new()
        } else {
            self.pending.clear();
            "\u{FFFD}".to_string()
        }
    }
}

/// Stateful decoder for one reply stream.
pub struct ReplyDecoder {
    buffer: String,
    utf8: Utf8Accumulator,
    session_id: Option<String>,
    message_id: Option<String>,
    status: Option<String>,
    initial_status: String,
    full_message: String,
}

impl ReplyDecoder {
    /// Create a decoder. `initial_status` is reported at completion when no
    /// status frame ever arrives.
    pub fn new(initial_status: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            utf8: Utf8Accumulator::default(),
            session_id: None,
            message_id: None,
            status: None,
            initial_status: initial_status.into(),
            full_message: String::new(),
        }
    }

    /// Feed one physical read's worth of bytes and drain decoded events.
    pub fn feed_bytes(&mut self, bytes: &[u8]) -> Vec<ReplyEvent> {
        let text = self.utf8.decode(bytes);
        self.feed(&text)
    }

    /// Feed already-decoded text and drain events.
    ///
    /// All complete leading frames are consumed in one pass; any non-frame
    /// remainder is flushed as a text delta. The only text held back is a
    /// leading object that has not closed yet.
    pub fn feed(&mut self, text: &str) -> Vec<ReplyEvent> {
        self.buffer.push_str(text);

        let mut events = Vec::new();
        loop {
            if self.buffer.is_empty() {
                break;
            }

            match scan_object(&self.buffer) {
                Scan::Complete { len } => match classify_frame(&self.buffer[..len]) {
                    Some(frame) => {
                        self.buffer.drain(..len);
                        if let Some(event) = self.apply_frame(frame) {
                            events.push(event);
                        }
                    }
                    // Balanced braces but not valid JSON: the whole buffer
                    // is literal text on this pass.
                    None => {
                        events.push(self.flush_text());
                        break;
                    }
                },
                Scan::Incomplete => break,
                Scan::NotObject => {
                    events.push(self.flush_text());
                    break;
                }
            }
        }

        events
    }

    /// Finish the stream: flush anything still buffered (an incomplete
    /// frame or partial UTF-8 sequence becomes literal text) and produce
    /// the final outcome.
    pub fn finish(mut self) -> (Vec<ReplyEvent>, ReplyOutcome) {
        let tail = self.utf8.finish();
        self.buffer.push_str(&tail);

        let mut events = Vec::new();
        if !self.buffer.is_empty() {
            events.push(self.flush_text());
        }

        let outcome = ReplyOutcome {
            session_id: self.session_id,
            message_id: self.message_id,
            full_message: self.full_message,
            status: self.status.unwrap_or(self.initial_status),
        };

        (events, outcome)
    }

    fn apply_frame(&mut self, frame: Frame) -> Option<ReplyEvent> {
        match frame {
            Frame::Session {
                session_id,
                message_id,
            } => {
                // A later announcement refreshes the identifiers.
                self.session_id = Some(session_id.clone());
                self.message_id = Some(message_id.clone());
                Some(ReplyEvent::Session {
                    session_id,
                    message_id,
                })
            }
            Frame::Status(status) => {
                self.status = Some(status.clone());
                Some(ReplyEvent::Status(status))
            }
            Frame::Delta(delta) => {
                self.full_message.push_str(&delta);
                Some(ReplyEvent::Delta(delta))
            }
            Frame::Unrecognized => None,
        }
    }

    fn flush_text(&mut self) -> ReplyEvent {
        let text = std::mem::take(&mut self.buffer);
        self.full_message.push_str(&text);
        ReplyEvent::Delta(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn deltas(events: &[ReplyEvent]) -> String {
        events
            .iter()
            .filter_map(|e| match e {
                ReplyEvent::Delta(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_delta_frames_concatenate_in_order() {
        let mut decoder = ReplyDecoder::new("ask");
        let events = decoder.feed(r#"{"delta":"Hello "}{"delta":"world"}{"delta":"!"}"#);
        assert_eq!(deltas(&events), "Hello world!");

        let (tail, outcome) = decoder.finish();
        assert!(tail.is_empty());
        assert_eq!(outcome.full_message, "Hello world!");
    }

    #[test]
    fn test_session_frame_followed_by_literal_text() {
        let mut decoder = ReplyDecoder::new("ask");
        let events = decoder.feed(r#"{"session_id":"s1","message_id":"m1"}hello"#);

        assert_eq!(
            events[0],
            ReplyEvent::Session {
                session_id: "s1".to_string(),
                message_id: "m1".to_string(),
            }
        );
        assert_eq!(deltas(&events), "hello");

        let (_, outcome) = decoder.finish();
        assert_eq!(outcome.session_id.as_deref(), Some("s1"));
        assert_eq!(outcome.message_id.as_deref(), Some("m1"));
        assert_eq!(outcome.full_message, "hello");
    }

    #[test]
    fn test_last_status_frame_wins() {
        let mut decoder = ReplyDecoder::new("ask");
        decoder.feed(r#"{"status":"ask"}"#);
        decoder.feed("text");
        decoder.feed(r#"{"status":"draft"}"#);

        let (_, outcome) = decoder.finish();
        assert_eq!(outcome.status, "draft");
        assert_eq!(outcome.full_message, "text");
    }

    #[test]
    fn test_frame_embedded_mid_text_is_literal() {
        // Frames are only recognized at the start of the buffer; one that
        // arrives embedded after literal text is flushed as text with it.
        let mut decoder = ReplyDecoder::new("ask");
        let events = decoder.feed(r#"text{"status":"draft"}"#);
        assert_eq!(deltas(&events), r#"text{"status":"draft"}"#);

        let (_, outcome) = decoder.finish();
        assert_eq!(outcome.status, "ask");
    }

    #[test]
    fn test_status_defaults_to_initial_value() {
        let decoder = ReplyDecoder::new("ask");
        let (_, outcome) = decoder.finish();
        assert_eq!(outcome.status, "ask");
        assert_eq!(outcome.session_id, None);
    }

    #[test]
    fn test_pure_literal_text_stream() {
        let mut decoder = ReplyDecoder::new("ask");
        let first = decoder.feed("just plain ");
        let second = decoder.feed("prose");

        assert_eq!(deltas(&first), "just plain ");
        assert_eq!(deltas(&second), "prose");

        let (_, outcome) = decoder.finish();
        assert_eq!(outcome.full_message, "just plain prose");
    }

    #[test]
    fn test_frame_split_across_chunks() {
        let mut decoder = ReplyDecoder::new("ask");
        let first = decoder.feed(r#"{"session_id":"abc","mess"#);
        assert!(first.is_empty());

        let second = decoder.feed(r#"age_id":"123"}Hello "#);
        assert_eq!(
            second[0],
            ReplyEvent::Session {
                session_id: "abc".to_string(),
                message_id: "123".to_string(),
            }
        );
        assert_eq!(deltas(&second), "Hello ");

        let third = decoder.feed("world!");
        assert_eq!(deltas(&third), "world!");

        let (_, outcome) = decoder.finish();
        assert_eq!(outcome.full_message, "Hello world!");
        assert_eq!(outcome.session_id.as_deref(), Some("abc"));
        assert_eq!(outcome.message_id.as_deref(), Some("123"));
    }

    #[test]
    fn test_unrecognized_frame_is_discarded_silently() {
        let mut decoder = ReplyDecoder::new("ask");
        let events = decoder.feed(r#"{"progress":42}{"delta":"kept"}"#);
        assert_eq!(events.len(), 1);
        assert_eq!(deltas(&events), "kept");

        let (_, outcome) = decoder.finish();
        assert_eq!(outcome.full_message, "kept");
    }

    #[test]
    fn test_balanced_but_invalid_json_falls_back_to_text() {
        let mut decoder = ReplyDecoder::new("ask");
        let events = decoder.feed(r#"{oops}and the rest"#);
        assert_eq!(deltas(&events), r#"{oops}and the rest"#);
    }

    #[test]
    fn test_delta_with_brace_inside_string_value() {
        let mut decoder = ReplyDecoder::new("ask");
        let events = decoder.feed(r#"{"delta":"fn main() {}"}{"delta":" done"}"#);
        assert_eq!(deltas(&events), "fn main() {} done");
    }

    #[test]
    fn test_incomplete_frame_flushed_as_text_at_finish() {
        let mut decoder = ReplyDecoder::new("ask");
        let events = decoder.feed(r#"{"delta":"never clo"#);
        assert!(events.is_empty());

        let (tail, outcome) = decoder.finish();
        assert_eq!(deltas(&tail), r#"{"delta":"never clo"#);
        assert_eq!(outcome.full_message, r#"{"delta":"never clo"#);
    }

    #[test]
    fn test_utf8_split_across_chunks() {
        let mut decoder = ReplyDecoder::new("ask");
        let bytes = "héllo".as_bytes();
        // Split inside the two-byte 'é' sequence.
        let first = decoder.feed_bytes(&bytes[..2]);
        let second = decoder.feed_bytes(&bytes[2..]);

        let combined = deltas(&first) + &deltas(&second);
        assert_eq!(combined, "héllo");
    }

    #[test]
    fn test_invalid_utf8_becomes_replacement_char() {
        let mut decoder = ReplyDecoder::new("ask");
        let events = decoder.feed_bytes(&[b'a', 0xFF, b'b']);
        assert_eq!(deltas(&events), "a\u{FFFD}b");
    }

    #[test]
    fn test_truncated_utf8_at_finish() {
        let mut decoder = ReplyDecoder::new("ask");
        let events = decoder.feed_bytes(&[0xC3]);
        assert!(events.is_empty());

        let (tail, outcome) = decoder.finish();
        assert_eq!(deltas(&tail), "\u{FFFD}");
        assert_eq!(outcome.full_message, "\u{FFFD}");
    }

    #[test]
    fn test_replay_is_deterministic() {
        let chunks: &[&[u8]] = &[
            br#"{"session_id":"s9","message_id":"m9"}"#,
            br#"{"status":"draft"}{"delta":"One"}"#,
            b" two",
            br#"{"delta":" three"}"#,
        ];

        let run = || {
            let mut decoder = ReplyDecoder::new("ask");
            for chunk in chunks {
                decoder.feed_bytes(chunk);
            }
            decoder.finish().1
        };

        assert_eq!(run(), run());
        let outcome = run();
        assert_eq!(outcome.full_message, "One two three");
        assert_eq!(outcome.status, "draft");
        assert_eq!(outcome.session_id.as_deref(), Some("s9"));
    }
}
