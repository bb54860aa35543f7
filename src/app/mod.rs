// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the landing page, the
//! modal dialog and the notification stack.
//!
//! The `App` struct wires the components together and translates their
//! events into side effects like config persistence, session checks or
//! clipboard writes.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::i18n::{fluent::I18n, Label};
use crate::ui::contact_form;
use crate::ui::modal::Modal;
use crate::ui::notifications::{self, Kind};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// Directory used for saving settings; `None` means the resolved default.
    config_dir: Option<PathBuf>,
    screen: Screen,
    notifications: notifications::Manager,
    modal: Modal,
    contact: contact_form::State,
    /// Theme resolved once at startup, so system detection does not run per frame.
    theme: Theme,
    /// A session check request is in flight.
    checking_session: bool,
    reconnect_url: String,
    diagnostics: DiagnosticsCollector,
    /// Directory for activity reports; `None` means the Documents folder.
    export_dir: Option<PathBuf>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("notifications", &self.notifications.visible_count())
            .field("modal_visible", &self.modal.is_visible())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot closure; the flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the persisted configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::from_config(config, flags, None);

        if let Some(key) = config_warning {
            app.notifications
                .notify(Label::key(key), Kind::Warning, None, Instant::now());
        }

        tracing::info!(
            locale = %app.i18n.current_locale(),
            backend = app.config.api.base_url().unwrap_or("none"),
            "application started"
        );
        (app, Task::none())
    }

    /// Builds the application state from an already loaded configuration.
    ///
    /// `config_dir` overrides where settings are written back.
    fn from_config(config: Config, flags: Flags, config_dir: Option<PathBuf>) -> Self {
        let i18n = I18n::new(flags.lang, &config);
        let diagnostics = DiagnosticsCollector::default();

        let mut notifications =
            notifications::Manager::with_timings(config.notifications.timings());
        notifications.set_diagnostics(diagnostics.handle());

        let theme = config.general.theme_mode.theme();
        let reconnect_url = config.api.reconnect_url();

        Self {
            i18n,
            config,
            config_dir,
            screen: Screen::default(),
            notifications,
            modal: Modal::new(),
            contact: contact_form::State::default(),
            theme,
            checking_session: false,
            reconnect_url,
            diagnostics,
            export_dir: None,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.screen {
            Screen::Landing => app_name,
            Screen::Reconnect => {
                let page = self.i18n.tr("reconnect-title");
                format!("{page} - {app_name}")
            }
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            config_dir: self.config_dir.as_ref(),
            screen: &mut self.screen,
            notifications: &mut self.notifications,
            modal: &mut self.modal,
            contact: &mut self.contact,
            checking_session: &mut self.checking_session,
            diagnostics: self.diagnostics.handle(),
            collector: &self.diagnostics,
            export_dir: self.export_dir.as_ref(),
        };

        let task = match message {
            Message::Landing(message) => update::handle_landing_message(&mut ctx, message),
            Message::Modal(message) => update::handle_modal_message(&mut ctx, message),
            Message::Notification(message) => {
                update::handle_notification_message(&mut ctx, message)
            }
            Message::Reconnect(message) => update::handle_reconnect_message(&mut ctx, &message),
            Message::Tick(now) => {
                ctx.notifications.tick(now);
                Task::none()
            }
            Message::SessionChecked(result) => update::handle_session_checked(&mut ctx, result),
        };

        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            contact: &self.contact,
            modal: &self.modal,
            notifications: &self.notifications,
            can_check_session: self.config.api.base_url().is_some(),
            checking_session: self.checking_session,
            reconnect_url: &self.reconnect_url,
        })
    }
}
