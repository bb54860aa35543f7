// SPDX-License-Identifier: MPL-2.0
//! Deferred actions with cancellation tokens.
//!
//! Every timed step of a notification (slide-in, auto-dismiss, reconnect
//! offer, removal after the exit animation) is an entry in the [`Scheduler`].
//! Scheduling returns a [`TimerToken`]; the owner keeps the token and uses it
//! to cancel the action before it fires. The scheduler never looks at the
//! clock itself: callers pass the current `Instant` to [`Scheduler::take_due`],
//! which keeps the whole lifecycle deterministic under test.

use super::notification::NotificationId;
use std::time::Instant;

/// Handle to a scheduled action, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// What to do when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerAction {
    /// Slide a freshly created notification into view.
    Reveal(NotificationId),
    /// Start dismissing a notification whose display time ran out.
    AutoDismiss(NotificationId),
    /// Offer the reconnect action on a session-expired notification.
    OfferReconnect(NotificationId),
    /// Remove a notification whose exit animation finished.
    Remove(NotificationId),
}

/// An action whose deadline was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub token: TimerToken,
    /// When the action was due, which may be earlier than the tick that fired it.
    pub deadline: Instant,
    pub action: TimerAction,
}

#[derive(Debug, Clone)]
struct Scheduled {
    token: TimerToken,
    deadline: Instant,
    action: TimerAction,
}

/// Ordered set of pending actions.
#[derive(Debug, Default)]
pub struct Scheduler {
    /// Sorted by deadline; ties keep scheduling order.
    pending: Vec<Scheduled>,
    next_token: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `action` to fire once `deadline` is reached.
    pub fn schedule(&mut self, deadline: Instant, action: TimerAction) -> TimerToken {
        let token = TimerToken(self.next_token);
        self.next_token += 1;

        // Insert after every entry due at or before this deadline
        let index = self.pending.partition_point(|s| s.deadline <= deadline);
        self.pending.insert(
            index,
            Scheduled {
                token,
                deadline,
                action,
            },
        );
        token
    }

    /// Cancels a pending action.
    ///
    /// Returns `false` if the action already fired or was cancelled before.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        if let Some(pos) = self.pending.iter().position(|s| s.token == token) {
            self.pending.remove(pos);
            true
        } else {
            false
        }
    }

    /// Removes and returns every action due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<Fired> {
        let due = self.pending.partition_point(|s| s.deadline <= now);
        self.pending
            .drain(..due)
            .map(|s| Fired {
                token: s.token,
                deadline: s.deadline,
                action: s.action,
            })
            .collect()
    }

    /// Returns the earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.first().map(|s| s.deadline)
    }

    /// Returns whether `token` is still pending.
    #[must_use]
    pub fn is_pending(&self, token: TimerToken) -> bool {
        self.pending.iter().any(|s| s.token == token)
    }

    /// Returns the pending actions in firing order.
    pub fn pending(&self) -> impl Iterator<Item = &TimerAction> {
        self.pending.iter().map(|s| &s.action)
    }

    /// Returns the number of pending actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drops every pending action.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn id() -> NotificationId {
        NotificationId::new()
    }

    #[test]
    fn take_due_returns_actions_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        let start = Instant::now();
        let (a, b, c) = (id(), id(), id());

        scheduler.schedule(start + Duration::from_millis(300), TimerAction::Remove(a));
        scheduler.schedule(start + Duration::from_millis(100), TimerAction::Reveal(b));
        scheduler.schedule(start + Duration::from_millis(200), TimerAction::AutoDismiss(c));

        let fired: Vec<TimerAction> = scheduler
            .take_due(start + Duration::from_millis(250))
            .into_iter()
            .map(|fired| fired.action)
            .collect();

        assert_eq!(
            fired,
            vec![TimerAction::Reveal(b), TimerAction::AutoDismiss(c)]
        );
        assert_eq!(scheduler.len(), 1);
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let mut scheduler = Scheduler::new();
        let deadline = Instant::now();
        let (a, b) = (id(), id());

        scheduler.schedule(deadline, TimerAction::AutoDismiss(a));
        scheduler.schedule(deadline, TimerAction::AutoDismiss(b));

        let fired: Vec<TimerAction> = scheduler
            .take_due(deadline)
            .into_iter()
            .map(|fired| fired.action)
            .collect();
        assert_eq!(
            fired,
            vec![TimerAction::AutoDismiss(a), TimerAction::AutoDismiss(b)]
        );
    }

    #[test]
    fn cancelled_action_never_fires() {
        let mut scheduler = Scheduler::new();
        let start = Instant::now();
        let token = scheduler.schedule(start, TimerAction::AutoDismiss(id()));

        assert!(scheduler.cancel(token));
        assert!(scheduler.take_due(start + Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn cancel_is_false_once_fired_or_cancelled() {
        let mut scheduler = Scheduler::new();
        let start = Instant::now();
        let fired = scheduler.schedule(start, TimerAction::Reveal(id()));
        let cancelled = scheduler.schedule(start + Duration::from_secs(5), TimerAction::Reveal(id()));

        let _ = scheduler.take_due(start);
        assert!(!scheduler.cancel(fired));

        assert!(scheduler.cancel(cancelled));
        assert!(!scheduler.cancel(cancelled));
    }

    #[test]
    fn next_deadline_tracks_earliest_entry() {
        let mut scheduler = Scheduler::new();
        assert!(scheduler.next_deadline().is_none());

        let start = Instant::now();
        scheduler.schedule(start + Duration::from_secs(2), TimerAction::Reveal(id()));
        let early = scheduler.schedule(start + Duration::from_secs(1), TimerAction::Reveal(id()));
        assert_eq!(scheduler.next_deadline(), Some(start + Duration::from_secs(1)));

        scheduler.cancel(early);
        assert_eq!(scheduler.next_deadline(), Some(start + Duration::from_secs(2)));
    }

    #[test]
    fn tokens_are_unique() {
        let mut scheduler = Scheduler::new();
        let now = Instant::now();
        let a = scheduler.schedule(now, TimerAction::Reveal(id()));
        let b = scheduler.schedule(now, TimerAction::Reveal(id()));
        assert_ne!(a, b);
        assert!(scheduler.is_pending(a));
        assert!(scheduler.is_pending(b));
    }
}
