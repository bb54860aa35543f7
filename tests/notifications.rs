// SPDX-License-Identifier: MPL-2.0
//! End-to-end notification lifecycle through the public API.

use postify::config::NotificationsConfig;
use postify::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
use postify::i18n::Label;
use postify::ui::notifications::{
    Kind, Manager, NotificationEvent, NotificationMessage, Phase,
};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn toasts_stack_slide_in_and_close_up_as_they_leave() {
    let mut manager = Manager::new();
    let start = Instant::now();

    let first = manager.notify(Label::text("first"), Kind::Info, None, start);
    let second = manager.notify(Label::text("second"), Kind::Success, Some(ms(5_000)), start);
    let third = manager.notify(Label::text("third"), Kind::Warning, None, start);

    assert_eq!(manager.offsets(), vec![0.0, 80.0, 160.0]);
    assert_eq!(manager.get(first).map(|n| n.phase()), Some(Phase::Entering));

    manager.tick(start + ms(100));
    assert!(manager.visible().all(|n| n.phase() == Phase::Shown));

    // Info and warning expire at 3 s and leave 300 ms later
    manager.tick(start + ms(3_000));
    assert_eq!(manager.get(first).map(|n| n.phase()), Some(Phase::Dismissing));
    assert_eq!(manager.offset_of(second), Some(80.0));

    manager.tick(start + ms(3_300));
    assert!(manager.get(first).is_none());
    assert!(manager.get(third).is_none());
    assert_eq!(manager.offset_of(second), Some(0.0));

    manager.tick(start + ms(5_300));
    assert!(!manager.has_notifications());
    assert_eq!(manager.next_deadline(), None);
}

#[test]
fn manual_dismiss_is_idempotent() {
    let mut manager = Manager::new();
    let start = Instant::now();
    let id = manager.notify(Label::text("bye"), Kind::Error, None, start);

    let event = manager.handle_message(NotificationMessage::Dismiss(id), start + ms(50));
    assert_eq!(event, NotificationEvent::None);
    assert!(!manager.dismiss(id, start + ms(60)));

    // The original auto-dismiss no longer fires
    manager.tick(start + ms(350));
    assert!(!manager.has_notifications());
    assert_eq!(manager.scheduled().count(), 0);
}

#[test]
fn session_expired_offers_reconnect_then_expires() {
    let mut manager = Manager::new();
    let start = Instant::now();
    let id = manager.notify(
        Label::key("notification-session-expired"),
        Kind::SessionExpired,
        None,
        start,
    );

    manager.tick(start + ms(1_999));
    assert!(!manager.get(id).is_some_and(|n| n.reconnect_offered()));

    manager.tick(start + ms(2_000));
    assert!(manager.get(id).is_some_and(|n| n.reconnect_offered()));

    manager.tick(start + ms(7_999));
    assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Shown));

    manager.tick(start + ms(8_300));
    assert!(manager.get(id).is_none());
}

#[test]
fn accepting_reconnect_dismisses_and_reports() {
    let mut manager = Manager::new();
    let start = Instant::now();
    let id = manager.notify(Label::text("expired"), Kind::SessionExpired, None, start);
    manager.tick(start + ms(2_000));

    let event = manager.handle_message(NotificationMessage::Reconnect(id), start + ms(2_100));
    assert_eq!(event, NotificationEvent::Reconnect);
    assert_eq!(manager.get(id).map(|n| n.phase()), Some(Phase::Dismissing));

    // A second click on the leaving toast does nothing
    let event = manager.handle_message(NotificationMessage::Reconnect(id), start + ms(2_150));
    assert_eq!(event, NotificationEvent::None);
}

#[test]
fn configured_timings_drive_the_lifecycle() {
    let config = NotificationsConfig {
        default_duration_ms: Some(1_000),
        stack_pitch: Some(60.0),
        ..NotificationsConfig::default()
    };
    let mut manager = Manager::with_timings(config.timings());
    let start = Instant::now();

    let a = manager.notify(Label::text("a"), Kind::Success, None, start);
    let b = manager.notify(Label::text("b"), Kind::Success, None, start);
    assert_eq!(manager.offset_of(b), Some(60.0));

    manager.tick(start + ms(1_300));
    assert!(manager.get(a).is_none());
    assert!(manager.get(b).is_none());
}

#[test]
fn warnings_and_errors_reach_diagnostics() {
    let mut collector = DiagnosticsCollector::new(16);
    let mut manager = Manager::new();
    manager.set_diagnostics(collector.handle());
    let now = Instant::now();

    manager.notify(Label::text("ok"), Kind::Success, None, now);
    manager.notify(Label::key("notification-rate-limited"), Kind::Warning, None, now);
    manager.notify(Label::key("notification-session-expired"), Kind::SessionExpired, None, now);
    collector.process_pending();

    let kinds: Vec<_> = collector.iter().map(|event| event.kind.clone()).collect();
    assert_eq!(kinds.len(), 2);
    assert!(matches!(kinds[0], DiagnosticEventKind::Warning { .. }));
    assert!(matches!(
        &kinds[1],
        DiagnosticEventKind::Error { event } if event.session_expired
    ));
}
