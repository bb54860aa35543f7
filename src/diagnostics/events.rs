// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Submitted the contact form.
    SubmitContactForm {
        /// Whether every field was filled in.
        valid: bool,
    },

    /// Opened a modal dialog.
    OpenModal {
        /// Which builder produced the content (`info`, `guide`).
        modal: String,
    },

    /// Closed the modal dialog.
    CloseModal,

    /// Clicked the close control of a notification.
    DismissNotification,

    /// Accepted the reconnect offer of a session-expired notification.
    Reconnect,

    /// Asked the backend whether the session is still valid.
    CheckConnection,

    /// Saved the activity report to disk.
    ExportDiagnostics,
}

/// A warning surfaced to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WarningEvent {
    /// Translation key or literal text of the notification.
    pub message: String,
}

impl WarningEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// An error surfaced to the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorEvent {
    /// Translation key or literal text of the notification.
    pub message: String,
    /// Whether the error was a lost backend session.
    #[serde(default)]
    pub session_expired: bool,
}

impl ErrorEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_expired: false,
        }
    }

    #[must_use]
    pub fn session_expired(mut self) -> Self {
        self.session_expired = true;
        self
    }
}

/// A single diagnostic event with its capture time.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// User-initiated action.
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    /// Warning notification shown to the user.
    Warning { event: WarningEvent },

    /// Error notification shown to the user.
    Error { event: ErrorEvent },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_action_serializes_with_tag() {
        let json = serde_json::to_string(&UserAction::OpenModal {
            modal: "guide".to_string(),
        })
        .expect("serialize");
        assert_eq!(json, r#"{"action":"open_modal","modal":"guide"}"#);
    }

    #[test]
    fn error_event_builder_marks_session() {
        let event = ErrorEvent::new("notification-session-expired").session_expired();
        assert!(event.session_expired);
    }

    #[test]
    fn event_kind_round_trips_through_json() {
        let kind = DiagnosticEventKind::Warning {
            event: WarningEvent::new("notification-config-load-error"),
        };
        let json = serde_json::to_string(&kind).expect("serialize");
        let back: DiagnosticEventKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, kind);
    }
}
