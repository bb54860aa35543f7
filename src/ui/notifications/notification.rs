// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum
//! used throughout the notification system.

use super::timer::TimerToken;
use crate::i18n::Label;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Kind determines default display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    /// Operation completed successfully (green).
    Success,
    /// Something worth noticing that did not fail (amber).
    Warning,
    /// Neutral information (teal).
    Info,
    /// The backend session is gone; offers to reconnect (orange, shown longer).
    SessionExpired,
    /// Failure the user should know about (red).
    #[default]
    Error,
}

impl Kind {
    /// Returns the background color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Info => palette::INFO_500,
            Kind::SessionExpired => palette::SESSION_500,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Returns the accent (left border) color for this kind.
    #[must_use]
    pub fn accent(self) -> Color {
        match self {
            Kind::Success => palette::SUCCESS_700,
            Kind::Warning => palette::WARNING_700,
            Kind::Info => palette::INFO_700,
            Kind::SessionExpired => palette::SESSION_700,
            Kind::Error => palette::ERROR_700,
        }
    }

    /// Returns the glyph shown before the message.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Success => "✔",
            Kind::Warning => "⚠",
            Kind::Info => "ℹ",
            Kind::SessionExpired => "⟳",
            Kind::Error => "✖",
        }
    }

    /// Returns the CSS-style name of the kind, as used in logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Success => "success",
            Kind::Warning => "warning",
            Kind::Info => "info",
            Kind::SessionExpired => "session-expired",
            Kind::Error => "error",
        }
    }
}

/// Where a notification is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created, waiting for the slide-in.
    Entering,
    /// Fully visible.
    Shown,
    /// Sliding out; removed once the exit animation completes.
    Dismissing,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    message: Label,
    /// Custom auto-dismiss duration (overrides the kind default).
    custom_duration: Option<Duration>,
    phase: Phase,
    /// Pending auto-dismiss timer, cleared once fired or cancelled.
    pub(super) auto_dismiss: Option<TimerToken>,
    /// Pending reconnect offer timer (session-expired only).
    pub(super) reconnect_timer: Option<TimerToken>,
    reconnect_offered: bool,
}

impl Notification {
    /// Creates a new notification with the given kind and message.
    pub fn new(kind: Kind, message: Label) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message,
            custom_duration: None,
            phase: Phase::Entering,
            auto_dismiss: None,
            reconnect_timer: None,
            reconnect_offered: false,
        }
    }

    /// Creates a success notification.
    pub fn success(message: Label) -> Self {
        Self::new(Kind::Success, message)
    }

    /// Creates a warning notification.
    pub fn warning(message: Label) -> Self {
        Self::new(Kind::Warning, message)
    }

    /// Creates an info notification.
    pub fn info(message: Label) -> Self {
        Self::new(Kind::Info, message)
    }

    /// Creates a session-expired notification.
    pub fn session_expired(message: Label) -> Self {
        Self::new(Kind::SessionExpired, message)
    }

    /// Creates an error notification.
    pub fn error(message: Label) -> Self {
        Self::new(Kind::Error, message)
    }

    /// Sets a custom auto-dismiss duration, overriding the kind default.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_duration = Some(duration);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &Label {
        &self.message
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_dismissing(&self) -> bool {
        self.phase == Phase::Dismissing
    }

    /// Returns whether the reconnect action is currently offered.
    #[must_use]
    pub fn reconnect_offered(&self) -> bool {
        self.reconnect_offered
    }

    /// Returns the custom duration, if one was set.
    #[must_use]
    pub fn custom_duration(&self) -> Option<Duration> {
        self.custom_duration
    }

    pub(super) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(super) fn offer_reconnect(&mut self) {
        self.reconnect_offered = true;
    }
}
