// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the live notifications in creation order, schedules
//! their timed transitions and derives each toast's vertical offset from its
//! position in the sequence. Time only advances through [`Manager::tick`],
//! so every transition is driven by the `Instant` the caller passes in.

use super::notification::{Kind, Notification, NotificationId, Phase};
use super::timer::{Fired, Scheduler, TimerAction, TimerToken};
use crate::config::NotificationsConfig;
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, WarningEvent};
use crate::i18n::Label;
use std::time::{Duration, Instant};

/// Durations and spacing that drive the notification lifecycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    /// Auto-dismiss delay for every kind except session-expired.
    pub default_duration: Duration,
    /// Auto-dismiss delay for session-expired notifications.
    pub session_expired_duration: Duration,
    /// Delay between creation and the slide-in.
    pub enter_animation: Duration,
    /// Length of the slide-out; the entry is removed when it completes.
    pub exit_animation: Duration,
    /// Delay before a session-expired notification offers to reconnect.
    pub reconnect_prompt_delay: Duration,
    /// Vertical distance between two stacked notifications.
    pub pitch: f32,
}

impl Default for Timings {
    fn default() -> Self {
        NotificationsConfig::default().timings()
    }
}

impl Timings {
    /// Returns the auto-dismiss delay used when a notification sets none.
    #[must_use]
    pub fn duration_for(&self, kind: Kind) -> Duration {
        match kind {
            Kind::SessionExpired => self.session_expired_duration,
            Kind::Success | Kind::Warning | Kind::Info | Kind::Error => self.default_duration,
        }
    }
}

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close control of a notification was pressed.
    Dismiss(NotificationId),
    /// Reconnect button of a session-expired notification was pressed.
    Reconnect(NotificationId),
    /// Clock tick driving timers.
    Tick(Instant),
}

/// Events the parent must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user accepted the reconnect offer.
    Reconnect,
}

/// Live notification stack.
#[derive(Debug, Default)]
pub struct Manager {
    /// Displayed notifications, oldest first.
    live: Vec<Notification>,
    scheduler: Scheduler,
    timings: Timings,
    /// Optional diagnostics handle for logging warnings/errors.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timings(timings: Timings) -> Self {
        Self {
            timings,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle for logging warnings and errors.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    #[must_use]
    pub fn timings(&self) -> &Timings {
        &self.timings
    }

    /// Shows `message` as a new notification of the given kind.
    ///
    /// `duration` overrides the per-kind auto-dismiss delay.
    pub fn notify(
        &mut self,
        message: Label,
        kind: Kind,
        duration: Option<Duration>,
        now: Instant,
    ) -> NotificationId {
        let mut notification = Notification::new(kind, message);
        if let Some(duration) = duration {
            notification = notification.auto_dismiss(duration);
        }
        self.push(notification, now)
    }

    /// Appends a notification to the bottom of the stack and schedules its
    /// slide-in, auto-dismiss and (session-expired only) reconnect offer.
    pub fn push(&mut self, mut notification: Notification, now: Instant) -> NotificationId {
        let id = notification.id();
        let kind = notification.kind();
        let duration = notification
            .custom_duration()
            .unwrap_or_else(|| self.timings.duration_for(kind));

        self.log_to_diagnostics(&notification);

        self.schedule_after(now, self.timings.enter_animation, TimerAction::Reveal(id));
        // A delay past the clock's range leaves the entry until dismissed by hand
        notification.auto_dismiss =
            self.schedule_after(now, duration, TimerAction::AutoDismiss(id));
        if kind == Kind::SessionExpired {
            notification.reconnect_timer = self.schedule_after(
                now,
                self.timings.reconnect_prompt_delay,
                TimerAction::OfferReconnect(id),
            );
        }

        tracing::debug!(
            kind = kind.as_str(),
            position = self.live.len(),
            duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            "notification shown"
        );
        self.live.push(notification);
        id
    }

    fn schedule_after(
        &mut self,
        now: Instant,
        delay: Duration,
        action: TimerAction,
    ) -> Option<TimerToken> {
        now.checked_add(delay)
            .map(|deadline| self.scheduler.schedule(deadline, action))
    }

    /// Starts the exit animation of a notification.
    ///
    /// Cancels its pending timers. Returns `false` when the notification is
    /// absent or already dismissing, in which case nothing changes.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(notification) = self.live.iter_mut().find(|n| n.id() == id) else {
            return false;
        };
        if notification.is_dismissing() {
            return false;
        }

        for token in [
            notification.auto_dismiss.take(),
            notification.reconnect_timer.take(),
        ]
        .into_iter()
        .flatten()
        {
            self.scheduler.cancel(token);
        }
        notification.set_phase(Phase::Dismissing);
        tracing::debug!(kind = notification.kind().as_str(), "notification dismissing");

        if self
            .schedule_after(now, self.timings.exit_animation, TimerAction::Remove(id))
            .is_none()
        {
            self.live.retain(|n| n.id() != id);
        }
        true
    }

    /// Fires every timer due at `now`.
    ///
    /// Each action runs at its own deadline, so follow-up timers it schedules
    /// (removal after an auto-dismiss) also fire here when already due.
    pub fn tick(&mut self, now: Instant) {
        loop {
            let due = self.scheduler.take_due(now);
            if due.is_empty() {
                break;
            }
            for fired in due {
                self.fire(fired);
            }
        }
    }

    fn fire(&mut self, fired: Fired) {
        match fired.action {
            TimerAction::Reveal(id) => {
                if let Some(n) = self.get_mut(id) {
                    if n.phase() == Phase::Entering {
                        n.set_phase(Phase::Shown);
                    }
                }
            }
            TimerAction::AutoDismiss(id) => {
                if let Some(n) = self.get_mut(id) {
                    n.auto_dismiss = None;
                }
                self.dismiss(id, fired.deadline);
            }
            TimerAction::OfferReconnect(id) => {
                if let Some(n) = self.get_mut(id) {
                    n.reconnect_timer = None;
                    if !n.is_dismissing() {
                        n.offer_reconnect();
                    }
                }
            }
            TimerAction::Remove(id) => {
                if let Some(pos) = self.live.iter().position(|n| n.id() == id) {
                    self.live.remove(pos);
                }
            }
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id, now);
                Event::None
            }
            Message::Reconnect(id) => {
                let offered = self.get(id).is_some_and(Notification::reconnect_offered);
                if offered && self.dismiss(id, now) {
                    Event::Reconnect
                } else {
                    Event::None
                }
            }
            Message::Tick(at) => {
                self.tick(at);
                Event::None
            }
        }
    }

    /// Returns the vertical offset of a notification from the top of the stack.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Stack positions are tiny
    pub fn offset_of(&self, id: NotificationId) -> Option<f32> {
        self.live
            .iter()
            .position(|n| n.id() == id)
            .map(|index| index as f32 * self.timings.pitch)
    }

    /// Returns every offset, in stack order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offsets(&self) -> Vec<f32> {
        (0..self.live.len())
            .map(|index| index as f32 * self.timings.pitch)
            .collect()
    }

    /// Returns the displayed notifications, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter()
    }

    /// Returns the number of displayed notifications, including dismissing ones.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.live.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.live.iter().find(|n| n.id() == id)
    }

    fn get_mut(&mut self, id: NotificationId) -> Option<&mut Notification> {
        self.live.iter_mut().find(|n| n.id() == id)
    }

    /// Returns the pending timer actions in firing order.
    pub fn scheduled(&self) -> impl Iterator<Item = &TimerAction> {
        self.scheduler.pending()
    }

    /// Returns when the next timer fires, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Removes every notification at once, without exit animations.
    pub fn clear(&mut self) {
        self.live.clear();
        self.scheduler.clear();
    }

    fn log_to_diagnostics(&self, notification: &Notification) {
        let Some(handle) = &self.diagnostics else {
            return;
        };
        let message = match notification.message() {
            Label::Key { key, .. } => key.clone(),
            Label::Text(text) => text.clone(),
        };
        match notification.kind() {
            Kind::Warning => handle.log_warning(WarningEvent::new(message)),
            Kind::Error => handle.log_error(ErrorEvent::new(message)),
            Kind::SessionExpired => handle.log_error(ErrorEvent::new(message).session_expired()),
            Kind::Success | Kind::Info => {}
        }
    }
}
