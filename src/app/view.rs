// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of sections. The navbar, the
//! scroll-to-top button and the toast are stacked over it.

use super::Message;
use crate::config::SCROLL_TO_TOP_THRESHOLD;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::icons;
use crate::ui::navbar;
use crate::ui::notifications::{self, view_toast};
use crate::ui::page;
use crate::ui::sections::{contact, faq, features, footer, hero, services, stats};
use crate::ui::styles;
use iced::widget::scrollable::Viewport;
use iced::widget::{button, Column, Container, Id, Scrollable, Stack};
use iced::{alignment, Element, Length, Padding};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub now: Instant,
    pub scroll_offset: f32,
    pub compact: bool,
    pub navbar: &'a navbar::State,
    pub features: &'a features::State,
    pub stats: &'a stats::State,
    pub services: &'a services::State,
    pub faq: &'a faq::State,
    pub contact: &'a contact::State,
    pub notifications: &'a notifications::Manager,
}

/// Renders the page with its overlays.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(view_page(&ctx))
        .push(
            navbar::view(navbar::ViewContext {
                i18n: ctx.i18n,
                state: ctx.navbar,
                compact: ctx.compact,
            })
            .map(Message::Navbar),
        );

    if ctx.scroll_offset > SCROLL_TO_TOP_THRESHOLD {
        stack = stack.push(view_scroll_to_top());
    }

    if let Some(toast) = ctx.notifications.current() {
        stack = stack.push(
            Container::new(view_toast::<Message>(toast, ctx.i18n, ctx.now))
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(Padding::new(spacing::XL))
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom),
        );
    }

    stack.into()
}

/// The sections, top to bottom, in one scrollable.
fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let sections = Column::new()
        .width(Length::Fill)
        .push(hero::view(hero::ViewContext { i18n: ctx.i18n }).map(Message::Hero))
        .push(features::view::<Message>(features::ViewContext {
            i18n: ctx.i18n,
            state: ctx.features,
            now: ctx.now,
        }))
        .push(stats::view::<Message>(stats::ViewContext {
            i18n: ctx.i18n,
            state: ctx.stats,
            now: ctx.now,
        }))
        .push(
            services::view(services::ViewContext {
                i18n: ctx.i18n,
                state: ctx.services,
            })
            .map(Message::Services),
        )
        .push(
            faq::view(faq::ViewContext {
                i18n: ctx.i18n,
                state: ctx.faq,
            })
            .map(Message::Faq),
        )
        .push(
            contact::view(contact::ViewContext {
                i18n: ctx.i18n,
                state: ctx.contact,
            })
            .map(Message::Contact),
        )
        .push(footer::view::<Message>(ctx.i18n));

    Scrollable::new(sections)
        .id(Id::new(page::SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled {
            offset: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        })
        .into()
}

/// Round button in the bottom-left corner that scrolls back to the top.
fn view_scroll_to_top<'a>() -> Element<'a, Message> {
    let icon = icons::sized(icons::arrow_up(), sizing::ICON_MD)
        .style(styles::svg_color(iced::Color::WHITE));

    let scroll_button = button(
        Container::new(icon)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill),
    )
    .width(Length::Fixed(sizing::SCROLL_TOP_BUTTON))
    .height(Length::Fixed(sizing::SCROLL_TOP_BUTTON))
    .padding(0)
    .style(styles::button::floating)
    .on_press(Message::ScrollToTop);

    Container::new(scroll_button)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding::new(spacing::XL))
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Bottom)
        .into()
}
