// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{gradient, Background, Border, Color, Degrees, Shadow, Theme};

/// Navbar surface.
///
/// Transparent at the top of the page; once the page is scrolled the bar
/// becomes a near-opaque surface with a shadow.
pub fn navbar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;
        let (alpha, bar_shadow) = if scrolled {
            (
                opacity::SURFACE,
                Shadow {
                    color: Color {
                        a: opacity::OVERLAY_SUBTLE,
                        ..palette::BLACK
                    },
                    ..shadow::MD
                },
            )
        } else {
            (opacity::OVERLAY_STRONG, shadow::NONE)
        };

        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..base })),
            shadow: bar_shadow,
            ..Default::default()
        }
    }
}

/// Dropdown of the compact navbar.
pub fn menu(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Hero banner: diagonal brand gradient.
pub fn hero(_theme: &Theme) -> container::Style {
    let gradient = gradient::Linear::new(Degrees(135.0))
        .add_stop(0.0, palette::PRIMARY_700)
        .add_stop(1.0, palette::PRIMARY_400);

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Plain page section on the theme background.
pub fn section(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.base.color.into()),
        ..Default::default()
    }
}

/// Alternate section background, to separate neighbouring sections.
pub fn section_alt(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        ..Default::default()
    }
}

/// Card surface with an opacity, used by revealed feature cards.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = palette.background.base.color;
        let edge = palette.background.strong.color;

        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..base })),
            border: Border {
                color: Color { a: alpha, ..edge },
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            shadow: Shadow {
                color: Color {
                    a: opacity::OVERLAY_SUBTLE * alpha,
                    ..palette::BLACK
                },
                ..shadow::MD
            },
            ..Default::default()
        }
    }
}

/// Body of an open FAQ item or tab panel.
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// One bar of the deliveries chart.
pub fn chart_bar(_theme: &Theme) -> container::Style {
    let gradient = gradient::Linear::new(Degrees(180.0))
        .add_stop(0.0, palette::PRIMARY_400)
        .add_stop(1.0, palette::PRIMARY_600);

    container::Style {
        background: Some(Background::Gradient(gradient.into())),
        border: Border {
            radius: iced::border::Radius::default()
                .top_left(radius::SM)
                .top_right(radius::SM),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Footer strip.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_400),
        ..Default::default()
    }
}
