// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Every page interaction (form submission, backend responses, session
//! checks) reports to the user through this module. Notifications stack in
//! the top-right corner in creation order and leave on their own after a
//! per-kind delay, or earlier through their close control.
//!
//! # Components
//!
//! - [`notification`] - `Notification` struct and its `Kind`
//! - [`manager`] - `Manager` owning the live stack and its timers
//! - [`timer`] - `Scheduler` of cancellable deferred actions
//! - [`toast`] - Toast widget rendering the stack
//!
//! # Usage
//!
//! ```
//! use postify::i18n::Label;
//! use postify::ui::notifications::{Kind, Manager};
//! use std::time::{Duration, Instant};
//!
//! let mut manager = Manager::new();
//! let now = Instant::now();
//! let id = manager.notify(Label::text("Saved"), Kind::Success, None, now);
//! assert_eq!(manager.offset_of(id), Some(0.0));
//!
//! // Timers fire when the app ticks
//! manager.tick(now + Duration::from_secs(60));
//! assert!(!manager.has_notifications());
//! ```

mod manager;
mod notification;
mod timer;
mod toast;

pub use manager::{Event as NotificationEvent, Manager, Message as NotificationMessage, Timings};
pub use notification::{Kind, Notification, NotificationId, Phase};
pub use timer::{Scheduler, TimerAction, TimerToken};
pub use toast::Toast;
