// SPDX-License-Identifier: MPL-2.0
//! Reconnect screen, reached from the action of a session-expired
//! notification. Shows where to sign in again.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Contextual data needed to render the reconnect screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub url: &'a str,
}

#[derive(Debug, Clone)]
pub enum Message {
    CopyLink,
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    CopyLink,
    Back,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::CopyLink => Event::CopyLink,
        Message::Back => Event::Back,
    }
}

/// Render the reconnect screen.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(ctx.i18n.tr("reconnect-copy-link")))
                .on_press(Message::CopyLink)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(format!("← {}", ctx.i18n.tr("reconnect-back"))))
                .on_press(Message::Back)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::secondary),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("reconnect-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("reconnect-instructions")).size(typography::BODY_LG))
        .push(
            Container::new(Text::new(ctx.url).size(typography::BODY))
                .padding(spacing::SM)
                .style(styles::container::card),
        )
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(styles::container::page)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_maps_messages() {
        assert_eq!(update(&Message::Back), Event::Back);
        assert_eq!(update(&Message::CopyLink), Event::CopyLink);
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let _ = view(ViewContext {
            i18n: &i18n,
            url: "https://api.example.org/auth/tiktok",
        });
    }
}
