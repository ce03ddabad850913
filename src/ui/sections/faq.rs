// SPDX-License-Identifier: MPL-2.0
//! FAQ accordion.
//!
//! At most one item is open. Clicking a question closes every item, then
//! opens the clicked one unless it was the open one.

use super::{frame, header};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::page::Section;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Questions, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaqItem {
    Setup,
    Devices,
    Pricing,
    Data,
    Support,
}

impl FaqItem {
    pub const ALL: [FaqItem; 5] = [
        FaqItem::Setup,
        FaqItem::Devices,
        FaqItem::Pricing,
        FaqItem::Data,
        FaqItem::Support,
    ];

    fn question_key(self) -> &'static str {
        match self {
            FaqItem::Setup => "faq-question-setup",
            FaqItem::Devices => "faq-question-devices",
            FaqItem::Pricing => "faq-question-pricing",
            FaqItem::Data => "faq-question-data",
            FaqItem::Support => "faq-question-support",
        }
    }

    fn answer_key(self) -> &'static str {
        match self {
            FaqItem::Setup => "faq-answer-setup",
            FaqItem::Devices => "faq-answer-devices",
            FaqItem::Pricing => "faq-answer-pricing",
            FaqItem::Data => "faq-answer-data",
            FaqItem::Support => "faq-answer-support",
        }
    }
}

/// State for the accordion (tracks the open item).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    open: Option<FaqItem>,
}

impl State {
    /// Create a new accordion with every item closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an item is open.
    #[must_use]
    pub fn is_open(&self, item: FaqItem) -> bool {
        self.open == Some(item)
    }

    #[must_use]
    pub fn open_item(&self) -> Option<FaqItem> {
        self.open
    }

    /// Toggle an item, closing whichever other item was open.
    pub fn toggle(&mut self, item: FaqItem) {
        let was_open = self.is_open(item);
        self.open = None;
        if !was_open {
            self.open = Some(item);
        }
    }
}

/// Contextual data needed to render the accordion.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the accordion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle(FaqItem),
}

/// Process an accordion message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Toggle(item) => state.toggle(item),
    }
}

/// Render the FAQ section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let items = FaqItem::ALL.into_iter().fold(
        Column::new().spacing(spacing::XS),
        |column, item| column.push(build_item(&ctx, item)),
    );

    let content = Column::new()
        .push(header(ctx.i18n.tr("faq-title"), None))
        .push(items);

    frame(Section::Faq, content, styles::container::section_alt)
}

/// Build one question with its answer when open.
fn build_item<'a>(ctx: &ViewContext<'a>, item: FaqItem) -> Element<'a, Message> {
    let is_open = ctx.state.is_open(item);
    let indicator = if is_open {
        icons::chevron_up()
    } else {
        icons::chevron_down()
    };

    let header_content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr(item.question_key())).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(icons::sized(indicator, sizing::ICON_SM).style(styles::tinted_svg));

    let question = button(header_content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::button::disclosure)
        .on_press(Message::Toggle(item));

    let mut column = Column::new().spacing(spacing::XXS).push(question);

    if is_open {
        column = column.push(
            Container::new(Text::new(ctx.i18n.tr(item.answer_key())).size(typography::BODY))
                .padding(spacing::MD)
                .width(Length::Fill)
                .style(styles::container::panel),
        );
    }

    column.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_items_start_closed() {
        let state = State::new();
        assert!(FaqItem::ALL.iter().all(|item| !state.is_open(*item)));
    }

    #[test]
    fn opening_an_item_closes_the_others() {
        let mut state = State::new();
        update(&mut state, Message::Toggle(FaqItem::Setup));
        assert!(state.is_open(FaqItem::Setup));

        update(&mut state, Message::Toggle(FaqItem::Pricing));
        assert!(state.is_open(FaqItem::Pricing));
        assert!(!state.is_open(FaqItem::Setup));
        assert_eq!(state.open_item(), Some(FaqItem::Pricing));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        let mut state = State::new();
        state.toggle(FaqItem::Data);
        state.toggle(FaqItem::Data);
        assert_eq!(state.open_item(), None);
    }

    #[test]
    fn faq_view_renders_open_and_closed() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _closed = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
        drop(_closed);
        state.toggle(FaqItem::Support);
        let _open = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
