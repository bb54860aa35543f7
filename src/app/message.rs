// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::CheckFailure;
use crate::ui::landing;
use crate::ui::modal;
use crate::ui::notifications;
use crate::ui::reconnect;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Landing(landing::Message),
    Modal(modal::Message),
    Notification(notifications::NotificationMessage),
    Reconnect(reconnect::Message),
    /// Periodic tick driving notification timers.
    Tick(Instant),
    /// Result of the backend session check.
    SessionChecked(Result<(), CheckFailure>),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}
