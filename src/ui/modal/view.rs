// SPDX-License-Identifier: MPL-2.0
//! Modal rendering.
//!
//! The dialog body is wrapped in an opaque mouse area reporting
//! `CloseSource::Content`, so clicks inside it never reach the backdrop.

use super::{Block, CloseSource, Message, Modal};
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, opaque, scrollable, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Renders the modal layer, or `None` when no modal is shown.
pub fn view<'a>(modal: &'a Modal, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    let content = modal.content()?;

    let close_x = button(Text::new("×").size(typography::TITLE_MD))
        .on_press(Message::Close(CloseSource::CloseControl))
        .padding([0.0, spacing::XS])
        .style(|theme: &iced::Theme, status| {
            let colors = crate::ui::theming::ColorScheme::for_theme(theme);
            styles::button::close_control(colors.text_secondary)(theme, status)
        });

    let header = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(content.title.resolve(i18n)).size(typography::TITLE_MD))
                .width(Length::Fill),
        )
        .push(close_x);

    let mut body = Column::new().spacing(spacing::SM).push(header);
    for block in &content.blocks {
        body = body.push(block_view(block, i18n));
    }

    let close_button = button(Text::new(i18n.tr("modal-close")))
        .on_press(Message::Close(CloseSource::CloseControl))
        .padding([spacing::XS, spacing::LG])
        .style(styles::button::primary);
    body = body.push(
        Container::new(close_button)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .padding([spacing::XS, 0.0]),
    );

    let panel = Container::new(scrollable(body))
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .max_height(sizing::MODAL_MAX_HEIGHT)
        .padding(spacing::LG)
        .style(styles::container::modal_panel);

    let dialog = opaque(mouse_area(panel).on_press(Message::Close(CloseSource::Content)));

    let backdrop = mouse_area(
        Container::new(dialog)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .padding(spacing::XL)
            .style(styles::overlay::backdrop),
    )
    .on_press(Message::Close(CloseSource::Backdrop));

    // An opaque layer swallows wheel events meant for the page below
    if modal.scroll_locked() {
        Some(opaque(backdrop))
    } else {
        Some(backdrop.into())
    }
}

fn block_view<'a>(block: &'a Block, i18n: &I18n) -> Element<'a, Message> {
    match block {
        Block::Heading(label) => Text::new(label.resolve(i18n))
            .size(typography::TITLE_SM)
            .into(),
        Block::Paragraph(label) => Text::new(label.resolve(i18n)).size(typography::BODY).into(),
        Block::Bullets(items) => Column::with_children(items.iter().map(|item| {
            Text::new(format!("•  {}", item.resolve(i18n)))
                .size(typography::BODY)
                .into()
        }))
        .spacing(spacing::XXS)
        .into(),
        Block::Steps(steps) => {
            Column::with_children(steps.iter().enumerate().map(|(index, (title, text))| {
                Text::new(format!(
                    "{}. {} {}",
                    index + 1,
                    title.resolve(i18n),
                    text.resolve(i18n)
                ))
                .size(typography::BODY)
                .into()
            }))
            .spacing(spacing::XXS)
            .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::modal::content;

    #[test]
    fn hidden_modal_renders_nothing() {
        let i18n = I18n::default();
        assert!(view(&Modal::new(), &i18n).is_none());
    }

    #[test]
    fn visible_modal_renders_layer() {
        let i18n = I18n::default();
        let mut modal = Modal::new();
        modal.show(content::guide());
        assert!(view(&modal, &i18n).is_some());
    }
}
