//! Request validation for the writing-help endpoints.

use super::types::{HelpTurnRequest, StartHelpRequest};
use crate::errors::{DraftsmithError, ValidationDetail};

/// Validate a start-session request
pub fn validate_start_help_request(request: &StartHelpRequest) -> Result<(), DraftsmithError> {
    let mut details = Vec::new();

    if request.document_id.is_empty() {
        details.push(ValidationDetail::new("document_id", "must not be empty"));
    }
    if request.node_id.is_empty() {
        details.push(ValidationDetail::new("node_id", "must not be empty"));
    }
    if request.help_text.trim().is_empty() {
        details.push(ValidationDetail::new("help_text", "must not be blank"));
    }

    reject_if_any(details)
}

/// Validate a follow-up turn request
pub fn validate_help_turn_request(request: &HelpTurnRequest) -> Result<(), DraftsmithError> {
    let mut details = Vec::new();

    if request.session_id.is_empty() {
        details.push(ValidationDetail::new("session_id", "must not be empty"));
    }
    if request.message.trim().is_empty() {
        details.push(ValidationDetail::new("message", "must not be blank"));
    }
    if let Some(message_id) = &request.message_id {
        if message_id.is_empty() {
            details.push(ValidationDetail::new(
                "message_id",
                "must not be empty when provided",
            ));
        }
    }

    reject_if_any(details)
}

fn reject_if_any(details: Vec<ValidationDetail>) -> Result<(), DraftsmithError> {
    if details.is_empty() {
        Ok(())
    } else {
        Err(DraftsmithError::Validation {
            message: "Invalid help request".to_string(),
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_start_request() {
        let request = StartHelpRequest::new("doc_1", "node_1", "Tighten this paragraph");
        assert!(validate_start_help_request(&request).is_ok());
    }

    #[test]
    fn test_blank_help_text_rejected() {
        let request = StartHelpRequest::new("doc_1", "node_1", "   ");
        let error = validate_start_help_request(&request).unwrap_err();
        match error {
            DraftsmithError::Validation { details, .. } => {
                assert_eq!(details.len(), 1);
                assert_eq!(details[0].field, "help_text");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_multiple_failures_collected() {
        let request = StartHelpRequest::new("", "", "");
        let error = validate_start_help_request(&request).unwrap_err();
        match error {
            DraftsmithError::Validation { details, .. } => assert_eq!(details.len(), 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_turn_requires_session_id() {
        let request = HelpTurnRequest::new("", "More detail please");
        assert!(validate_help_turn_request(&request).is_err());
    }

    #[test]
    fn test_empty_optional_message_id_rejected() {
        let request = HelpTurnRequest::new("sess_1", "More").with_message_id("");
        assert!(validate_help_turn_request(&request).is_err());
    }
}
