// SPDX-License-Identifier: MPL-2.0
//! Page sections.
//!
//! Each section is a small component in the usual shape: a `State` (when it
//! has one), a `Message`, an `update` returning an `Event` for the parent,
//! and a `view` taking a `ViewContext`. Sections render at the fixed height
//! given by [`page::Section::height`](crate::ui::page::Section::height), so
//! the page geometry used for visibility checks matches what is drawn.

pub mod contact;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod services;
pub mod stats;

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::page::{Section, SECTION_HEADER_HEIGHT};
use crate::ui::styles;
use iced::widget::{container, Column, Container, Text};
use iced::{alignment, Element, Length, Theme};

/// Heading block shared by every content section.
fn header<'a, Message: 'a>(title: String, subtitle: Option<String>) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(title).size(typography::TITLE_LG));

    if let Some(subtitle) = subtitle {
        column = column.push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .style(styles::muted_text),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fixed(SECTION_HEADER_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Wraps section content at the section's fixed height, centered and capped
/// at the content width.
fn frame<'a, Message: 'a>(
    section: Section,
    content: impl Into<Element<'a, Message>>,
    style: impl Fn(&Theme) -> container::Style + 'a,
) -> Element<'a, Message> {
    let inner = Container::new(content)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .width(Length::Fill)
        .padding([0.0, spacing::LG]);

    Container::new(inner)
        .width(Length::Fill)
        .height(Length::Fixed(section.height()))
        .align_x(alignment::Horizontal::Center)
        .clip(true)
        .style(style)
        .into()
}
