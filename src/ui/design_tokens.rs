// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design constants shared by every section of the page.

## Organization

- **Palette**: Base, brand and notification colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use fleet_pro::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let overlay_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153);
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686);
    pub const GRAY_200: Color = Color::from_rgb(0.898, 0.906, 0.922);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980); // #60a5fa
    pub const PRIMARY_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3b82f6
    pub const PRIMARY_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // #2563eb
    pub const PRIMARY_700: Color = Color::from_rgb(0.114, 0.306, 0.847); // #1d4ed8

    // Accent (amber, used for call-to-action highlights)
    pub const ACCENT_500: Color = Color::from_rgb(0.961, 0.620, 0.043); // #f59e0b

    // Notification backgrounds
    pub const TOAST_SUCCESS: Color = Color::from_rgb(0.063, 0.725, 0.506); // #10b981
    pub const TOAST_ERROR: Color = Color::from_rgb(0.937, 0.267, 0.267); // #ef4444
    pub const TOAST_INFO: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3b82f6

    // Form validation
    pub const ERROR_500: Color = TOAST_ERROR;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.1;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Navbar background once the page is scrolled.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
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
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Navbar heights (expanded at the top of the page, compact once scrolled)
    pub const NAVBAR_HEIGHT: f32 = 72.0;
    pub const NAVBAR_HEIGHT_SCROLLED: f32 = 60.0;

    // Component widths
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const TOAST_WIDTH: f32 = 360.0;
    pub const CARD_WIDTH: f32 = 320.0;
    pub const FORM_MAX_WIDTH: f32 = 560.0;

    /// Diameter of the floating scroll-to-top button.
    pub const SCROLL_TOP_BUTTON: f32 = 48.0;

    /// Chart bar geometry.
    pub const CHART_HEIGHT: f32 = 220.0;
    pub const CHART_BAR_WIDTH: f32 = 40.0;

    // Fixed section heights of the page layout
    pub const HERO_HEIGHT: f32 = 640.0;
    pub const FEATURES_HEIGHT: f32 = 820.0;
    pub const STATS_HEIGHT: f32 = 760.0;
    pub const SERVICES_HEIGHT: f32 = 460.0;
    pub const FAQ_HEIGHT: f32 = 620.0;
    pub const CONTACT_HEIGHT: f32 = 720.0;
    pub const FOOTER_HEIGHT: f32 = 96.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the page's text hierarchy.

    /// Hero heading.
    pub const DISPLAY: f32 = 44.0;

    /// Counter figures.
    pub const FIGURE: f32 = 40.0;

    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Brand name, card titles.
    pub const TITLE_MD: f32 = 20.0;

    /// FAQ questions, tab labels.
    pub const TITLE_SM: f32 = 18.0;

    /// Hero subtitle, toast messages, form inputs.
    pub const BODY_LG: f32 = 16.0;

    /// Most page text.
    pub const BODY: f32 = 14.0;

    /// Field hints, chart labels.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - Inputs, cards
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - Invalid inputs, active tab underline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 40.0,
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
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::NAVBAR_HEIGHT > sizing::NAVBAR_HEIGHT_SCROLLED);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
