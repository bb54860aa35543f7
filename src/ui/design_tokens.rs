// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants of the Postify window.

## Organization

- **Palette**: Brand colors and one color pair per notification kind
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use postify::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

// Modal backdrop color
let backdrop = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::BLACK
};

// Use the spacing scale
let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    // Neutrals
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.94, 0.96);

    // Brand (TikTok-adjacent pink)
    pub const PRIMARY_400: Color = Color::from_rgb8(0xff, 0x4d, 0x79);
    pub const PRIMARY_500: Color = Color::from_rgb8(0xfe, 0x2c, 0x55);
    pub const PRIMARY_700: Color = Color::from_rgb8(0xc8, 0x1a, 0x3e);

    // Notification kinds: background (500) and border accent (700)
    pub const SUCCESS_500: Color = Color::from_rgb8(0x28, 0xa7, 0x45);
    pub const SUCCESS_700: Color = Color::from_rgb8(0x1e, 0x7e, 0x34);
    pub const WARNING_500: Color = Color::from_rgb8(0xff, 0xc1, 0x07);
    pub const WARNING_700: Color = Color::from_rgb8(0xe0, 0xa8, 0x00);
    pub const INFO_500: Color = Color::from_rgb8(0x17, 0xa2, 0xb8);
    pub const INFO_700: Color = Color::from_rgb8(0x11, 0x7a, 0x8b);
    pub const SESSION_500: Color = Color::from_rgb8(0xfd, 0x7e, 0x14);
    pub const SESSION_700: Color = Color::from_rgb8(0xe5, 0x51, 0x00);
    pub const ERROR_500: Color = Color::from_rgb8(0xdc, 0x35, 0x45);
    pub const ERROR_700: Color = Color::from_rgb8(0xc8, 0x23, 0x33);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Toasts that are sliding in or out.
    pub const TRANSITION: f32 = 0.55;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const INPUT_WIDTH: f32 = 420.0;

    pub const TOAST_WIDTH: f32 = 340.0;
    /// Right margin between the toast stack and the window edge.
    pub const TOAST_MARGIN: f32 = 20.0;

    pub const MODAL_WIDTH: f32 = 560.0;
    pub const MODAL_MAX_HEIGHT: f32 = 520.0;

    pub const FEATURE_CARD_WIDTH: f32 = 220.0;
}

// ============================================================================
// Typography
// ============================================================================

pub mod typography {
    /// Hero heading.
    pub const TITLE_LG: f32 = 34.0;

    /// Modal and section headings.
    pub const TITLE_MD: f32 = 22.0;

    pub const TITLE_SM: f32 = 17.0;

    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Borders
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;

    /// Accent stripe of toasts.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector { x: 0.0, y: 0.0 },
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TRANSITION > 0.0 && opacity::TRANSITION < 1.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Toasts must fit in the default window
    assert!(sizing::TOAST_WIDTH + sizing::TOAST_MARGIN < 1024.0);
};

/// Returns `color` with its alpha multiplied by `factor`.
#[must_use]
pub fn faded(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor,
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn accent_is_darker_than_background() {
        let luminance = |c: Color| c.r + c.g + c.b;
        for (base, accent) in [
            (palette::SUCCESS_500, palette::SUCCESS_700),
            (palette::WARNING_500, palette::WARNING_700),
            (palette::INFO_500, palette::INFO_700),
            (palette::SESSION_500, palette::SESSION_700),
            (palette::ERROR_500, palette::ERROR_700),
        ] {
            assert!(luminance(accent) < luminance(base));
        }
    }

    #[test]
    fn faded_scales_alpha_only() {
        let color = faded(palette::INFO_500, 0.5);
        assert_eq!(color.a, 0.5);
        assert_eq!(color.r, palette::INFO_500.r);
    }
}
