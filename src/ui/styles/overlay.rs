// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the modal backdrop and toasts.

use crate::ui::design_tokens::{border, faded, opacity, palette::WHITE, radius, shadow};
use crate::ui::notifications::Kind;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Dimmed backdrop behind a modal.
pub fn backdrop(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            ColorScheme::for_theme(theme).overlay_background,
        )),
        ..Default::default()
    }
}

/// Toast card colored by kind; `settled` is false while sliding in or out.
pub fn toast(kind: Kind, settled: bool) -> impl Fn(&Theme) -> container::Style {
    let factor = if settled {
        opacity::OPAQUE
    } else {
        opacity::TRANSITION
    };

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(kind.color(), factor))),
        text_color: Some(faded(WHITE, factor)),
        border: Border {
            color: faded(kind.accent(), factor),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_uses_kind_colors() {
        let style = toast(Kind::SessionExpired, true)(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(Kind::SessionExpired.color()))
        );
        assert_eq!(style.border.color, Kind::SessionExpired.accent());
    }

    #[test]
    fn transitioning_toast_is_faded() {
        let style = toast(Kind::Error, false)(&Theme::Dark);
        assert_eq!(style.border.color.a, opacity::TRANSITION);
    }

    #[test]
    fn backdrop_is_translucent() {
        let Some(Background::Color(color)) = backdrop(&Theme::Light).background else {
            panic!("backdrop should have a color");
        };
        assert!(color.a > 0.0 && color.a < 1.0);
    }
}
