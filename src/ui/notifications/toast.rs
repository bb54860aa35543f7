// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are colored cards pinned to the top-right corner. Each one sits at
//! the offset the manager derives from its stack position, so removing a
//! toast moves every later one up by one pitch.

use super::manager::{Manager, Message};
use super::notification::{Notification, Phase};
use crate::config::STACK_TOP_MARGIN;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette::WHITE, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Padding};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let kind = notification.kind();
        let id = notification.id();

        let glyph = Text::new(kind.glyph()).size(typography::BODY_LG);
        let message = Text::new(notification.message().resolve(i18n)).size(typography::BODY);

        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(Container::new(message).width(Length::Fill));

        if notification.reconnect_offered() && !notification.is_dismissing() {
            content = content.push(
                button(Text::new(i18n.tr("notification-reconnect-action")).size(typography::CAPTION))
                    .on_press(Message::Reconnect(id))
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::toast_action),
            );
        }

        // Close control stays active while dismissing; a second dismiss is a no-op
        let close = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(id))
            .padding([0.0, spacing::XXS])
            .style(styles::button::close_control(WHITE));
        content = content.push(close);

        let settled = notification.phase() == Phase::Shown;
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::overlay::toast(kind, settled))
            .into()
    }

    /// Renders every live notification at its stack offset.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let layers: Vec<Element<'a, Message>> = manager
            .visible()
            .zip(manager.offsets())
            .map(|(notification, offset)| {
                Container::new(Self::view(notification, i18n))
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Right)
                    .padding(Padding {
                        top: STACK_TOP_MARGIN + offset,
                        right: sizing::TOAST_MARGIN,
                        bottom: 0.0,
                        left: 0.0,
                    })
                    .into()
            })
            .collect();

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Label;
    use crate::ui::notifications::Kind;
    use std::time::Instant;

    #[test]
    fn overlay_builds_for_mixed_kinds() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        let now = Instant::now();
        manager.notify(Label::text("saved"), Kind::Success, None, now);
        let id = manager.notify(
            Label::key("notification-session-expired"),
            Kind::SessionExpired,
            None,
            now,
        );
        manager.tick(now + manager.timings().reconnect_prompt_delay);
        assert!(manager.get(id).is_some_and(Notification::reconnect_offered));

        let _ = Toast::view_overlay(&manager, &i18n);
    }

    #[test]
    fn empty_overlay_builds() {
        let i18n = I18n::default();
        let _ = Toast::view_overlay(&Manager::new(), &i18n);
    }
}
