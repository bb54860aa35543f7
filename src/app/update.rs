// SPDX-License-Identifier: MPL-2.0
//! Message handlers for `App::update`.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of the
//! application state it may touch and returns the follow-up task.

use super::{Message, Screen};
use crate::api::{self, CheckFailure};
use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsCollector, DiagnosticsHandle, UserAction};
use crate::i18n::{fluent::I18n, Label};
use crate::ui::contact_form;
use crate::ui::landing;
use crate::ui::modal::{self, Modal};
use crate::ui::notifications::{self, Kind, NotificationEvent};
use crate::ui::reconnect;
use iced::Task;
use std::path::PathBuf;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a PathBuf>,
    pub screen: &'a mut Screen,
    pub notifications: &'a mut notifications::Manager,
    pub modal: &'a mut Modal,
    pub contact: &'a mut contact_form::State,
    pub checking_session: &'a mut bool,
    pub diagnostics: DiagnosticsHandle,
    /// Events collected so far, read when exporting the activity report.
    pub collector: &'a DiagnosticsCollector,
    /// Where reports are written; `None` means the Documents folder.
    pub export_dir: Option<&'a PathBuf>,
}

impl UpdateContext<'_> {
    fn notify(&mut self, message: Label, kind: Kind) {
        self.notifications.notify(message, kind, None, Instant::now());
    }
}

pub fn handle_landing_message(
    ctx: &mut UpdateContext<'_>,
    message: landing::Message,
) -> Task<Message> {
    match landing::update(message) {
        landing::Event::OpenInfo => {
            open_modal(ctx, modal::content::info());
            Task::none()
        }
        landing::Event::OpenGuide => {
            open_modal(ctx, modal::content::guide());
            Task::none()
        }
        landing::Event::CheckConnection => handle_check_connection(ctx),
        landing::Event::ExportDiagnostics => {
            export_diagnostics(ctx);
            Task::none()
        }
        landing::Event::LanguageSelected(locale) => {
            ctx.i18n.set_locale(locale);
            ctx.config.general.language = Some(ctx.i18n.current_locale().to_string());
            persist_config(ctx);
            Task::none()
        }
        landing::Event::ContactForm(message) => {
            handle_contact_form_message(ctx, message);
            Task::none()
        }
    }
}

fn open_modal(ctx: &mut UpdateContext<'_>, content: modal::ModalContent) {
    ctx.diagnostics.log_action(UserAction::OpenModal {
        modal: content.name.to_string(),
    });
    ctx.modal.show(content);
}

fn export_diagnostics(ctx: &mut UpdateContext<'_>) {
    ctx.diagnostics.log_action(UserAction::ExportDiagnostics);
    match ctx.collector.export_to_dir(ctx.export_dir.map(PathBuf::as_path)) {
        Ok(path) => ctx.notify(
            Label::key("notification-diagnostics-exported")
                .with_arg("path", path.display().to_string()),
            Kind::Success,
        ),
        Err(err) => {
            tracing::warn!(error = %err, "failed to export activity report");
            ctx.notify(
                Label::key("notification-diagnostics-export-error"),
                Kind::Warning,
            );
        }
    }
}

fn persist_config(ctx: &mut UpdateContext<'_>) {
    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.cloned()) {
        tracing::warn!(error = %err, "failed to save settings");
        ctx.notify(Label::key("notification-config-save-error"), Kind::Warning);
    }
}

fn handle_contact_form_message(ctx: &mut UpdateContext<'_>, message: contact_form::Message) {
    match ctx.contact.update(message) {
        contact_form::Event::None => {}
        contact_form::Event::Submitted => {
            ctx.diagnostics
                .log_action(UserAction::SubmitContactForm { valid: true });
            let email = ctx.config.contact.email().to_string();
            ctx.notify(
                Label::key("notification-contact-success").with_arg("email", email),
                Kind::Success,
            );
        }
        contact_form::Event::Invalid => {
            ctx.diagnostics
                .log_action(UserAction::SubmitContactForm { valid: false });
            ctx.notify(Label::key("notification-contact-invalid"), Kind::Error);
        }
    }
}

fn handle_check_connection(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if *ctx.checking_session {
        return Task::none();
    }
    let Some(base_url) = ctx.config.api.base_url().map(str::to_string) else {
        return Task::none();
    };

    ctx.diagnostics.log_action(UserAction::CheckConnection);
    *ctx.checking_session = true;
    Task::perform(api::check_session(base_url), Message::SessionChecked)
}

pub fn handle_session_checked(
    ctx: &mut UpdateContext<'_>,
    result: Result<(), CheckFailure>,
) -> Task<Message> {
    *ctx.checking_session = false;

    match result {
        Ok(()) => ctx.notify(Label::key("notification-connection-verified"), Kind::Info),
        Err(CheckFailure::Response(failure)) => {
            let classification = api::classify(
                failure.status,
                &failure.payload,
                Label::key("notification-connection-failed"),
            );
            ctx.notify(classification.label, classification.kind);
        }
        Err(CheckFailure::Request(err)) => {
            tracing::warn!(error = %err, "session check failed");
            ctx.notify(Label::key(err.i18n_key()), Kind::Error);
        }
    }
    Task::none()
}

pub fn handle_modal_message(ctx: &mut UpdateContext<'_>, message: modal::Message) -> Task<Message> {
    if ctx.modal.update(message) {
        ctx.diagnostics.log_action(UserAction::CloseModal);
    }
    Task::none()
}

pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: notifications::NotificationMessage,
) -> Task<Message> {
    if matches!(message, notifications::NotificationMessage::Dismiss(_)) {
        ctx.diagnostics.log_action(UserAction::DismissNotification);
    }

    match ctx.notifications.handle_message(message, Instant::now()) {
        NotificationEvent::None => {}
        NotificationEvent::Reconnect => {
            ctx.diagnostics.log_action(UserAction::Reconnect);
            ctx.modal.close(modal::CloseSource::CloseControl);
            *ctx.screen = Screen::Reconnect;
        }
    }
    Task::none()
}

pub fn handle_reconnect_message(
    ctx: &mut UpdateContext<'_>,
    message: &reconnect::Message,
) -> Task<Message> {
    match reconnect::update(message) {
        reconnect::Event::Back => {
            *ctx.screen = Screen::Landing;
            Task::none()
        }
        reconnect::Event::CopyLink => {
            ctx.notify(Label::key("notification-link-copied"), Kind::Info);
            iced::clipboard::write(ctx.config.api.reconnect_url())
        }
    }
}
