// SPDX-License-Identifier: MPL-2.0
//! Contact form of the landing page.
//!
//! The form only validates that every field is filled in; on success the
//! parent thanks the user and the form is reset.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Container, Text, TextInput};
use iced::{alignment::Horizontal, Element, Length};

/// Field values as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// All fields were filled in; the form has been cleared.
    Submitted,
    /// At least one field is blank; the input is kept.
    Invalid,
}

impl State {
    /// Returns true when no field is blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(value) => self.name = value,
            Message::EmailChanged(value) => self.email = value,
            Message::MessageChanged(value) => self.message = value,
            Message::Submit => {
                if self.is_complete() {
                    *self = Self::default();
                    return Event::Submitted;
                }
                return Event::Invalid;
            }
        }
        Event::None
    }
}

/// Render the contact form.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("contact-title")).size(typography::TITLE_MD))
        .push(
            field(&ctx.i18n.tr("contact-name-placeholder"), &ctx.state.name)
                .on_input(Message::NameChanged)
                .on_submit(Message::Submit),
        )
        .push(
            field(&ctx.i18n.tr("contact-email-placeholder"), &ctx.state.email)
                .on_input(Message::EmailChanged)
                .on_submit(Message::Submit),
        )
        .push(
            field(&ctx.i18n.tr("contact-message-placeholder"), &ctx.state.message)
                .on_input(Message::MessageChanged)
                .on_submit(Message::Submit),
        )
        .push(
            button(Text::new(ctx.i18n.tr("contact-submit")))
                .on_press(Message::Submit)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        );

    Container::new(form)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn field<'a>(placeholder: &str, value: &str) -> TextInput<'a, Message> {
    text_input(placeholder, value)
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::INPUT_WIDTH))
}
