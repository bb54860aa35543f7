// SPDX-License-Identifier: MPL-2.0
//! Landing page: hero, feature cards, pricing teaser and contact form.
//!
//! The page itself holds no state. Its buttons open the modals, trigger the
//! session check or switch the display language through [`Event`]s handled
//! by the application.

use crate::i18n::fluent::I18n;
use crate::ui::contact_form;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};
use unic_langid::LanguageIdentifier;

const FEATURES: [&str; 3] = ["scheduling", "analytics", "collaboration"];
const PLANS: [&str; 3] = ["starter", "creator", "agency"];

/// Contextual data needed to render the landing page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub contact: &'a contact_form::State,
    /// Whether a backend is configured, enabling the session check button.
    pub can_check_session: bool,
    /// A session check is in flight.
    pub checking_session: bool,
}

/// Messages emitted by the landing page.
#[derive(Debug, Clone)]
pub enum Message {
    LearnMore,
    ReadGuide,
    CheckConnection,
    ExportDiagnostics,
    LanguageSelected(LanguageIdentifier),
    ContactForm(contact_form::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    OpenInfo,
    OpenGuide,
    CheckConnection,
    ExportDiagnostics,
    LanguageSelected(LanguageIdentifier),
    ContactForm(contact_form::Message),
}

/// Process a landing page message and return the corresponding event.
#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::LearnMore => Event::OpenInfo,
        Message::ReadGuide => Event::OpenGuide,
        Message::CheckConnection => Event::CheckConnection,
        Message::ExportDiagnostics => Event::ExportDiagnostics,
        Message::LanguageSelected(locale) => Event::LanguageSelected(locale),
        Message::ContactForm(message) => Event::ContactForm(message),
    }
}

/// Render the landing page.
#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .push(language_bar(&ctx))
        .push(hero(&ctx))
        .push(features(&ctx))
        .push(pricing(&ctx))
        .push(
            contact_form::view(contact_form::ViewContext {
                i18n: ctx.i18n,
                state: ctx.contact,
            })
            .map(Message::ContactForm),
        )
        .push(footer(&ctx));

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}

fn language_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::XS);
    for locale in &ctx.i18n.available_locales {
        let name = ctx.i18n.tr(&format!("language-name-{locale}"));
        let label = if name.starts_with("MISSING:") {
            locale.to_string()
        } else {
            name
        };
        let style = if ctx.i18n.current_locale() == locale {
            styles::button::primary
        } else {
            styles::button::secondary
        };
        row = row.push(
            button(Text::new(label).size(typography::CAPTION))
                .on_press(Message::LanguageSelected(locale.clone()))
                .padding([spacing::XXS, spacing::XS])
                .style(style),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .into()
}

fn hero<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new(ctx.i18n.tr("landing-learn-more")))
                .on_press(Message::LearnMore)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(ctx.i18n.tr("landing-read-guide")))
                .on_press(Message::ReadGuide)
                .padding([spacing::XS, spacing::LG])
                .style(styles::button::secondary),
        );

    if ctx.can_check_session {
        let label = if ctx.checking_session {
            "landing-checking-connection"
        } else {
            "landing-check-connection"
        };
        // Disabled while a check is running
        let check = button(Text::new(ctx.i18n.tr(label)))
            .on_press_maybe((!ctx.checking_session).then_some(Message::CheckConnection))
            .padding([spacing::XS, spacing::LG])
            .style(styles::button::secondary);
        actions = actions.push(check);
    }

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("landing-hero-title")).size(typography::TITLE_LG))
        .push(Text::new(ctx.i18n.tr("landing-hero-subtitle")).size(typography::BODY_LG))
        .push(actions)
        .into()
}

fn footer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Container::new(
        button(Text::new(ctx.i18n.tr("landing-export-diagnostics")).size(typography::CAPTION))
            .on_press(Message::ExportDiagnostics)
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::secondary),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Center)
    .into()
}

fn card<'a>(title: String, body: String) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(title).size(typography::TITLE_SM))
            .push(Text::new(body).size(typography::BODY)),
    )
    .width(Length::Fixed(sizing::FEATURE_CARD_WIDTH))
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

fn features<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = FEATURES.iter().map(|feature| {
        card(
            ctx.i18n.tr(&format!("landing-feature-{feature}-title")),
            ctx.i18n.tr(&format!("landing-feature-{feature}-text")),
        )
    });
    Row::with_children(cards).spacing(spacing::MD).into()
}

fn pricing<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let cards = PLANS.iter().map(|plan| {
        card(
            ctx.i18n.tr(&format!("landing-plan-{plan}-name")),
            ctx.i18n.tr(&format!("landing-plan-{plan}-price")),
        )
    });

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("landing-pricing-title")).size(typography::TITLE_MD))
        .push(Row::with_children(cards).spacing(spacing::MD))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn buttons_map_to_events() {
        assert!(matches!(update(Message::LearnMore), Event::OpenInfo));
        assert!(matches!(update(Message::ReadGuide), Event::OpenGuide));
        assert!(matches!(
            update(Message::CheckConnection),
            Event::CheckConnection
        ));
        assert!(matches!(
            update(Message::ExportDiagnostics),
            Event::ExportDiagnostics
        ));
    }

    #[test]
    fn page_keys_are_translated() {
        for locale in ["en-US", "fr"] {
            let i18n = I18n::new(Some(locale.to_string()), &Config::default());
            let mut keys = vec![
                "landing-hero-title".to_string(),
                "landing-hero-subtitle".to_string(),
                "landing-learn-more".to_string(),
                "landing-read-guide".to_string(),
                "landing-check-connection".to_string(),
                "landing-checking-connection".to_string(),
                "landing-pricing-title".to_string(),
                "landing-export-diagnostics".to_string(),
            ];
            for feature in FEATURES {
                keys.push(format!("landing-feature-{feature}-title"));
                keys.push(format!("landing-feature-{feature}-text"));
            }
            for plan in PLANS {
                keys.push(format!("landing-plan-{plan}-name"));
                keys.push(format!("landing-plan-{plan}-price"));
            }
            for key in keys {
                assert!(!i18n.tr(&key).starts_with("MISSING"), "{locale}: {key}");
            }
        }
    }

    #[test]
    fn view_renders_with_and_without_backend() {
        let i18n = I18n::default();
        let contact = contact_form::State::default();
        for can_check_session in [false, true] {
            let _ = view(ViewContext {
                i18n: &i18n,
                contact: &contact,
                can_check_session,
                checking_session: false,
            });
        }
    }
}
