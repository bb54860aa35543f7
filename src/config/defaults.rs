// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Auto-dismiss delays, animation timings, stacking
//! - **Session**: Reconnect affordance timing and entry point
//! - **Diagnostics**: Event buffer bounds

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Auto-dismiss delay for success, info, warning and error notifications (ms).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 3_000;

/// Auto-dismiss delay for session-expired notifications (ms).
pub const DEFAULT_SESSION_EXPIRED_DURATION_MS: u64 = 8_000;

/// Shortest auto-dismiss delay accepted from the config file (ms).
pub const MIN_NOTIFICATION_DURATION_MS: u64 = 500;

/// Longest auto-dismiss delay accepted from the config file (ms).
pub const MAX_NOTIFICATION_DURATION_MS: u64 = 60_000;

/// Delay between creation and the slide-in of a notification (ms).
pub const ENTER_ANIMATION_MS: u64 = 100;

/// Duration of the slide-out animation; the entry is removed afterwards (ms).
pub const EXIT_ANIMATION_MS: u64 = 300;

/// Vertical distance between two stacked notifications (px).
pub const DEFAULT_STACK_PITCH: f32 = 80.0;

/// Smallest pitch that still keeps toasts from overlapping (px).
pub const MIN_STACK_PITCH: f32 = 40.0;

/// Largest pitch accepted from the config file (px).
pub const MAX_STACK_PITCH: f32 = 200.0;

/// Distance between the window top and the first notification (px).
pub const STACK_TOP_MARGIN: f32 = 20.0;

/// Refresh period of the timer tick while notifications are live (ms).
pub const TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Session Defaults
// ==========================================================================

/// Delay before a session-expired notification offers to reconnect (ms).
pub const DEFAULT_RECONNECT_PROMPT_DELAY_MS: u64 = 2_000;

/// Path of the reconnect entry point, relative to the API base URL.
pub const DEFAULT_RECONNECT_PATH: &str = "/auth/tiktok";

/// Address quoted in the contact form thank-you message.
pub const DEFAULT_CONTACT_EMAIL: &str = "hello@postify.app";

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_NOTIFICATION_DURATION_MS > EXIT_ANIMATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS >= MIN_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_NOTIFICATION_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_SESSION_EXPIRED_DURATION_MS > DEFAULT_NOTIFICATION_DURATION_MS);
    assert!(DEFAULT_SESSION_EXPIRED_DURATION_MS <= MAX_NOTIFICATION_DURATION_MS);

    // The reconnect offer must appear while the notification is still up
    assert!(DEFAULT_RECONNECT_PROMPT_DELAY_MS < DEFAULT_SESSION_EXPIRED_DURATION_MS);

    assert!(ENTER_ANIMATION_MS < MIN_NOTIFICATION_DURATION_MS);
    assert!(TICK_INTERVAL_MS < ENTER_ANIMATION_MS);

    assert!(MIN_STACK_PITCH > 0.0);
    assert!(DEFAULT_STACK_PITCH >= MIN_STACK_PITCH);
    assert!(DEFAULT_STACK_PITCH <= MAX_STACK_PITCH);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_defaults_are_valid() {
        assert_eq!(DEFAULT_NOTIFICATION_DURATION_MS, 3_000);
        assert_eq!(DEFAULT_SESSION_EXPIRED_DURATION_MS, 8_000);
        assert!(DEFAULT_SESSION_EXPIRED_DURATION_MS > DEFAULT_NOTIFICATION_DURATION_MS);
    }

    #[test]
    fn stack_defaults_are_valid() {
        assert_eq!(DEFAULT_STACK_PITCH, 80.0);
        assert_eq!(STACK_TOP_MARGIN, 20.0);
        assert!(DEFAULT_STACK_PITCH >= MIN_STACK_PITCH);
    }

    #[test]
    fn reconnect_path_is_absolute() {
        assert!(DEFAULT_RECONNECT_PATH.starts_with('/'));
    }
}
