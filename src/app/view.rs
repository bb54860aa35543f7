// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The current screen is the bottom layer; the modal (when shown) and the
//! toast stack are layered above it, toasts topmost.

use super::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::contact_form;
use crate::ui::landing::{self, ViewContext as LandingViewContext};
use crate::ui::modal::{self, Modal};
use crate::ui::notifications::{self, Toast};
use crate::ui::reconnect::{self, ViewContext as ReconnectViewContext};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub contact: &'a contact_form::State,
    pub modal: &'a Modal,
    pub notifications: &'a notifications::Manager,
    pub can_check_session: bool,
    pub checking_session: bool,
    pub reconnect_url: &'a str,
}

/// Renders the current screen with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Landing => landing::view(LandingViewContext {
            i18n: ctx.i18n,
            contact: ctx.contact,
            can_check_session: ctx.can_check_session,
            checking_session: ctx.checking_session,
        })
        .map(Message::Landing),
        Screen::Reconnect => reconnect::view(ReconnectViewContext {
            i18n: ctx.i18n,
            url: ctx.reconnect_url,
        })
        .map(Message::Reconnect),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current_view);

    if let Some(modal_layer) = modal::view(ctx.modal, ctx.i18n) {
        layers = layers.push(modal_layer.map(Message::Modal));
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    layers.into()
}
