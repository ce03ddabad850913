// SPDX-License-Identifier: MPL-2.0
//! Hero banner with the page headline and two call-to-action links.

use super::frame;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::page::Section;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Anchor of the primary call to action.
pub const PRIMARY_TARGET: &str = "#contact";

/// Anchor of the secondary call to action.
pub const SECONDARY_TARGET: &str = "#features";

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the hero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    NavigateTo(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(&'static str),
}

/// Process a hero message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::NavigateTo(href) => Event::Navigate(href),
    }
}

/// Render the hero banner.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("hero-title"))
        .size(typography::DISPLAY)
        .center();
    let subtitle = Text::new(ctx.i18n.tr("hero-subtitle"))
        .size(typography::BODY_LG)
        .center();

    let primary = button(Text::new(ctx.i18n.tr("hero-cta-primary")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::NavigateTo(PRIMARY_TARGET));
    let secondary =
        button(Text::new(ctx.i18n.tr("hero-cta-secondary")).size(typography::BODY_LG))
            .padding([spacing::SM, spacing::LG])
            .style(styles::button::outline)
            .on_press(Message::NavigateTo(SECONDARY_TARGET));

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(primary)
        .push(secondary);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(actions);

    let centered = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    frame(Section::Hero, centered, styles::container::hero)
}
