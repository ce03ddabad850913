// SPDX-License-Identifier: MPL-2.0
//! Page footer.

use super::frame;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::page::Section;
use crate::ui::styles;
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

/// Render the footer. It has no interactions, so it fits any message type.
pub fn view<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    let copyright = Text::new(i18n.tr("footer-copyright")).size(typography::BODY);

    let centered = Container::new(copyright)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    frame(Section::Footer, centered, styles::container::footer)
}
