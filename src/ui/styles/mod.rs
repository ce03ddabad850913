// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for all UI components.

pub mod button;
pub mod container;
pub mod text_input;

use iced::widget::{svg, text};
use iced::{Color, Theme};

/// Tints an SVG icon with the theme's text color.
pub fn tinted_svg(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    }
}

/// Tints an SVG icon with a fixed color.
pub fn svg_color(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}

/// Text in a fixed color.
pub fn text_color(color: Color) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style { color: Some(color) }
}

/// Secondary text, dimmed against the theme background.
pub fn muted_text(theme: &Theme) -> text::Style {
    let palette = theme.extended_palette();
    text::Style {
        color: Some(palette.background.base.text.scale_alpha(0.7)),
    }
}
