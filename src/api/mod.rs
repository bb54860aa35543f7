// SPDX-License-Identifier: MPL-2.0
//! Backend error interpretation.
//!
//! [`classify`] turns a status code and the JSON error body of a Postify
//! backend response into the message and kind of the notification to show.
//! It is pure: the caller decides whether to notify.

pub mod client;

pub use client::{check_session, CheckFailure};

use crate::i18n::Label;
use crate::ui::notifications::Kind;
use serde::Deserialize;

/// Error body returned by the backend, e.g. `{"error": "...", "details": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
}

impl ErrorPayload {
    /// Parses a response body. Anything that is not a JSON object with the
    /// expected fields yields an empty payload.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    /// Shorthand for a payload with only `error` set.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            details: None,
        }
    }

    fn texts(&self) -> impl Iterator<Item = String> + '_ {
        [self.error.as_deref(), self.details.as_deref()]
            .into_iter()
            .flatten()
            .map(str::to_lowercase)
    }
}

/// A non-success backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub status: u16,
    pub payload: ErrorPayload,
}

/// What to show for a backend failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub label: Label,
    pub kind: Kind,
}

impl Classification {
    fn error(label: Label) -> Self {
        Self {
            label,
            kind: Kind::Error,
        }
    }
}

/// Maps a backend failure to a notification.
///
/// Precedence: lost session, then 429, 503 and 500, then the payload's own
/// `error` or `details` text, then `default`.
#[must_use]
pub fn classify(status: u16, payload: &ErrorPayload, default: Label) -> Classification {
    if let Some(label) = session_message(status, payload) {
        tracing::warn!(status, "session expired or unauthorized access");
        return Classification {
            label,
            kind: Kind::SessionExpired,
        };
    }

    tracing::debug!(status, ?payload, "classifying backend error");
    let label = match status {
        429 => Label::key("notification-rate-limited"),
        503 => Label::key("notification-service-unavailable"),
        500 => Label::key("notification-server-error"),
        _ => {
            let present = |text: &&str| !text.trim().is_empty();
            payload
                .error
                .as_deref()
                .filter(present)
                .or_else(|| payload.details.as_deref().filter(present))
                .map_or(default, Label::text)
        }
    };
    Classification::error(label)
}

/// Returns the session-expired message when the response signals a lost
/// session, most specific first.
fn session_message(status: u16, payload: &ErrorPayload) -> Option<Label> {
    let mentions = |needle: &str| payload.texts().any(|text| text.contains(needle));

    if mentions("token") {
        Some(Label::key("notification-session-token-expired"))
    } else if mentions("refresh") {
        Some(Label::key("notification-session-refresh-failed"))
    } else if status == 401 || mentions("credential") || mentions("session") {
        Some(Label::key("notification-session-expired"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default() -> Label {
        Label::text("X")
    }

    #[test]
    fn rate_limit_is_an_error() {
        let result = classify(429, &ErrorPayload::default(), default());
        assert_eq!(
            result,
            Classification::error(Label::key("notification-rate-limited"))
        );
    }

    #[test]
    fn token_problem_is_session_expired_with_token_message() {
        let result = classify(200, &ErrorPayload::error("token expired"), default());
        assert_eq!(result.kind, Kind::SessionExpired);
        assert_eq!(
            result.label,
            Label::key("notification-session-token-expired")
        );
    }

    #[test]
    fn service_unavailable() {
        let result = classify(503, &ErrorPayload::default(), default());
        assert_eq!(
            result.label,
            Label::key("notification-service-unavailable")
        );
        assert_eq!(result.kind, Kind::Error);
    }

    #[test]
    fn server_error() {
        let result = classify(500, &ErrorPayload::default(), default());
        assert_eq!(result.label, Label::key("notification-server-error"));
    }

    #[test]
    fn payload_error_text_is_shown_verbatim() {
        let result = classify(404, &ErrorPayload::error("not found"), default());
        assert_eq!(result, Classification::error(Label::text("not found")));
    }

    #[test]
    fn details_used_when_error_missing() {
        let payload = ErrorPayload {
            error: None,
            details: Some("quota exceeded".to_string()),
        };
        let result = classify(400, &payload, default());
        assert_eq!(result.label, Label::text("quota exceeded"));
    }

    #[test]
    fn blank_error_falls_through_to_details() {
        let payload = ErrorPayload {
            error: Some(String::new()),
            details: Some("quota exceeded".to_string()),
        };
        let result = classify(404, &payload, default());
        assert_eq!(result, Classification::error(Label::text("quota exceeded")));
    }

    #[test]
    fn empty_payload_falls_back_to_default() {
        let result = classify(404, &ErrorPayload::default(), default());
        assert_eq!(result, Classification::error(Label::text("X")));
    }

    #[test]
    fn session_signal_beats_status_codes() {
        let result = classify(503, &ErrorPayload::error("Refresh failed"), default());
        assert_eq!(result.kind, Kind::SessionExpired);
        assert_eq!(
            result.label,
            Label::key("notification-session-refresh-failed")
        );
    }

    #[test]
    fn unauthorized_status_is_generic_session_expiry() {
        let result = classify(401, &ErrorPayload::default(), default());
        assert_eq!(result.kind, Kind::SessionExpired);
        assert_eq!(result.label, Label::key("notification-session-expired"));
    }

    #[test]
    fn credential_mention_in_details_is_session_expiry() {
        let payload = ErrorPayload {
            error: None,
            details: Some("Invalid credentials".to_string()),
        };
        assert_eq!(classify(400, &payload, default()).kind, Kind::SessionExpired);
    }

    #[test]
    fn from_body_tolerates_garbage() {
        assert_eq!(ErrorPayload::from_body(b"<html>"), ErrorPayload::default());
        assert_eq!(
            ErrorPayload::from_body(br#"{"error":"nope","extra":1}"#),
            ErrorPayload::error("nope")
        );
    }
}
