//! # Webhook response interpretation
//!
//! The spreadsheet webhook does not have a documented reply format. Depending on
//! how it was deployed it answers with a JSON acknowledgement, plain text, or an
//! HTML page after a redirect. [`interpret_submission`] turns whatever came back
//! into a [`SubmitOutcome`] or a [`SubmissionError`], in this order:
//!
//! 1. status >= 400 → [`SubmissionError::Status`]
//! 2. body looks like a JSON object → trust its `success` flag
//!    (`false` → [`SubmissionError::Rejected`], `true` → [`SubmitOutcome::Confirmed`],
//!    missing or not a boolean → [`SubmissionError::Unrecognized`]); other keys never
//!    override the flag. A body that starts like JSON but
//!    does not decode is [`SubmissionError::MalformedResponse`]
//! 3. anything else with a 2xx/3xx status → [`SubmitOutcome::Unverified`]
//! 4. otherwise → [`SubmissionError::Unrecognized`]
//!
//! [`parse_duplicate_reply`] is the decoding half of the duplicate check.

use registration::{DuplicateCheckResult, SubmissionError, SubmitOutcome};
use serde::Deserialize;

const DEFAULT_REJECTION: &str = "The server could not save your registration";

/// Acknowledgement body sent by the webhook on POST. Every key is read
/// loosely: a reply only counts as a verdict when `success` is a boolean.
#[derive(Debug, Deserialize)]
struct Acknowledgement {
    #[serde(default)]
    success: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
    /// `true` when an existing row was replaced.
    #[serde(default)]
    updated: Option<serde_json::Value>,
    #[serde(default)]
    debug: Option<serde_json::Value>,
}

impl Acknowledgement {
    fn success(&self) -> Option<bool> {
        self.success.as_ref().and_then(serde_json::Value::as_bool)
    }

    fn updated(&self) -> bool {
        self.updated
            .as_ref()
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
    }

    fn error_message(&self) -> Option<String> {
        match self.error.as_ref()? {
            serde_json::Value::String(message) if !message.trim().is_empty() => {
                Some(message.clone())
            }
            serde_json::Value::Object(map) => map
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
            _ => None,
        }
    }
}

/// Classify a submission response.
pub fn interpret_submission(status: u16, body: &str) -> Result<SubmitOutcome, SubmissionError> {
    if status >= 400 {
        return Err(SubmissionError::Status {
            status,
            body: body.to_string(),
        });
    }

    if body.trim_start().starts_with('{') {
        let ack: Acknowledgement = serde_json::from_str(body)
            .map_err(|e| SubmissionError::MalformedResponse(e.to_string()))?;
        if let Some(details) = &ack.debug {
            tracing::debug!(updated = ack.updated(), debug = %details, "webhook debug info");
        }
        return match ack.success() {
            Some(true) => Ok(SubmitOutcome::Confirmed {
                updated: ack.updated(),
            }),
            Some(false) => Err(SubmissionError::Rejected(
                ack.error_message()
                    .unwrap_or_else(|| DEFAULT_REJECTION.to_string()),
            )),
            None => Err(SubmissionError::Unrecognized(body.to_string())),
        };
    }

    if (200..400).contains(&status) {
        tracing::warn!(status, "webhook reply is not JSON; assuming the submission was saved");
        return Ok(SubmitOutcome::Unverified);
    }

    Err(SubmissionError::Unrecognized(body.to_string()))
}

/// Why a duplicate check could not be answered. Never reaches the wizard:
/// the client logs it and fails open.
#[derive(Debug, thiserror::Error)]
pub enum DuplicateCheckError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid duplicate-check body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Decode a duplicate-check response. Only 2xx replies are accepted.
pub fn parse_duplicate_reply(
    status: u16,
    body: &str,
) -> Result<DuplicateCheckResult, DuplicateCheckError> {
    if !(200..300).contains(&status) {
        return Err(DuplicateCheckError::Status(status));
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use registration::Category;

    #[test]
    fn test_explicit_success() {
        assert_eq!(
            interpret_submission(200, r#"{"success":true}"#),
            Ok(SubmitOutcome::Confirmed { updated: false })
        );
        assert_eq!(
            interpret_submission(200, r#"{"success":true,"updated":true,"debug":{"foundRowIndex":4}}"#),
            Ok(SubmitOutcome::Confirmed { updated: true })
        );
    }

    #[test]
    fn test_explicit_failure_carries_message() {
        let err = interpret_submission(200, r#"{"success":false,"error":"x"}"#).unwrap_err();
        assert_eq!(err, SubmissionError::Rejected("x".to_string()));
        assert_eq!(err.to_string(), "x");

        let err = interpret_submission(200, r#"{"success":false}"#).unwrap_err();
        assert_eq!(err, SubmissionError::Rejected(DEFAULT_REJECTION.to_string()));
    }

    #[test]
    fn test_error_status_wins_over_body() {
        let err = interpret_submission(500, r#"{"success":true}"#).unwrap_err();
        assert_eq!(
            err,
            SubmissionError::Status {
                status: 500,
                body: r#"{"success":true}"#.to_string()
            }
        );
        assert!(matches!(
            interpret_submission(404, "Not Found"),
            Err(SubmissionError::Status { status: 404, .. })
        ));
    }

    #[test]
    fn test_loose_side_fields_do_not_override_flag() {
        assert_eq!(
            interpret_submission(200, r#"{"success":true,"updated":null}"#),
            Ok(SubmitOutcome::Confirmed { updated: false })
        );
        assert_eq!(
            interpret_submission(200, r#"{"success":true,"updated":"yes","error":null}"#),
            Ok(SubmitOutcome::Confirmed { updated: false })
        );
        assert_eq!(
            interpret_submission(200, r#"{"success":false,"error":{"message":"sheet locked"}}"#),
            Err(SubmissionError::Rejected("sheet locked".to_string()))
        );
        assert!(matches!(
            interpret_submission(200, r#"{"success":"maybe"}"#),
            Err(SubmissionError::Unrecognized(_))
        ));
        assert_eq!(
            interpret_submission(200, r#"{"success":false,"error":42}"#),
            Err(SubmissionError::Rejected(DEFAULT_REJECTION.to_string()))
        );
    }

    #[test]
    fn test_plain_text_success_is_unverified() {
        assert_eq!(interpret_submission(200, "OK"), Ok(SubmitOutcome::Unverified));
        assert_eq!(interpret_submission(200, ""), Ok(SubmitOutcome::Unverified));
        assert_eq!(
            interpret_submission(302, "<html>moved</html>"),
            Ok(SubmitOutcome::Unverified)
        );
    }

    #[test]
    fn test_json_without_flag_is_unrecognized() {
        assert!(matches!(
            interpret_submission(200, r#"{"result":"ok"}"#),
            Err(SubmissionError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_broken_json_is_malformed() {
        assert!(matches!(
            interpret_submission(200, r#"{"success":tru"#),
            Err(SubmissionError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_unknown_status_is_unrecognized() {
        assert!(matches!(
            interpret_submission(101, "switching"),
            Err(SubmissionError::Unrecognized(_))
        ));
    }

    #[test]
    fn test_duplicate_reply() {
        let found =
            parse_duplicate_reply(200, r#"{"exists":true,"type":"join","name":"Park"}"#).unwrap();
        assert_eq!(found, DuplicateCheckResult::found(Category::Join, "Park"));

        assert!(matches!(
            parse_duplicate_reply(500, r#"{"exists":true}"#),
            Err(DuplicateCheckError::Status(500))
        ));
        assert!(matches!(
            parse_duplicate_reply(200, "<html>"),
            Err(DuplicateCheckError::Decode(_))
        ));
    }
}
