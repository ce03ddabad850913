// SPDX-License-Identifier: MPL-2.0
//! Text input styles for the contact form.

use crate::ui::design_tokens::{border, palette, radius};
use iced::widget::text_input;
use iced::Theme;

/// Form field; flagged fields get a thick error border.
pub fn field(invalid: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let mut style = text_input::default(theme, status);
        style.border.radius = radius::MD.into();
        if invalid {
            style.border.color = palette::ERROR_500;
            style.border.width = border::WIDTH_MD;
        } else if matches!(status, text_input::Status::Focused { .. }) {
            style.border.color = palette::PRIMARY_500;
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_has_error_border() {
        let style = field(true)(&Theme::Light, text_input::Status::Active);
        assert_eq!(style.border.color, palette::ERROR_500);
        assert_eq!(style.border.width, border::WIDTH_MD);
    }

    #[test]
    fn valid_field_keeps_theme_border() {
        let active = field(false)(&Theme::Light, text_input::Status::Active);
        assert_ne!(active.border.color, palette::ERROR_500);
        assert_eq!(active.border.radius, radius::MD.into());
    }
}
