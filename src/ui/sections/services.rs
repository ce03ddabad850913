// SPDX-License-Identifier: MPL-2.0
//! Services section: tab buttons over a set of panels.
//!
//! Selecting a tab always activates its button. The panel with the same id
//! is shown when one exists; otherwise no panel is shown at all.

use super::{frame, header};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::page::Section;
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Tab ids. Buttons and panels are matched by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Road,
    Sea,
    Air,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Road, TabId::Sea, TabId::Air];

    fn label_key(self) -> &'static str {
        match self {
            TabId::Road => "tab-road",
            TabId::Sea => "tab-sea",
            TabId::Air => "tab-air",
        }
    }

    fn body_key(self) -> &'static str {
        match self {
            TabId::Road => "tab-road-body",
            TabId::Sea => "tab-sea-body",
            TabId::Air => "tab-air-body",
        }
    }

    fn icon(self) -> iced::widget::Svg<'static> {
        match self {
            TabId::Road => icons::truck(),
            TabId::Sea => icons::route(),
            TabId::Air => icons::globe(),
        }
    }
}

/// Tab selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    active_tab: TabId,
    active_panel: Option<TabId>,
    panels: Vec<TabId>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// All three panels exist and the first tab is active.
    pub fn new() -> Self {
        Self::with_panels(TabId::ALL.to_vec())
    }

    /// Builds tabs over an explicit set of panels.
    pub fn with_panels(panels: Vec<TabId>) -> Self {
        let first = TabId::ALL[0];
        Self {
            active_tab: first,
            active_panel: panels.contains(&first).then_some(first),
            panels,
        }
    }

    #[must_use]
    pub fn active_tab(&self) -> TabId {
        self.active_tab
    }

    #[must_use]
    pub fn active_panel(&self) -> Option<TabId> {
        self.active_panel
    }

    /// Activates `tab` and its panel, if there is one.
    pub fn select(&mut self, tab: TabId) {
        self.active_tab = tab;
        self.active_panel = self.panels.contains(&tab).then_some(tab);
        if self.active_panel.is_none() {
            tracing::debug!(?tab, "tab has no panel");
        }
    }
}

/// Contextual data needed to render the section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectTab(TabId),
}

/// Process a services message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::SelectTab(tab) => state.select(tab),
    }
}

/// Render the services section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let buttons = TabId::ALL.into_iter().fold(
        Row::new().spacing(spacing::SM),
        |row, tab| {
            let is_active = ctx.state.active_tab() == tab;
            let label = Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(icons::sized(tab.icon(), sizing::ICON_SM).style(styles::svg_color(
                    if is_active {
                        palette::WHITE
                    } else {
                        palette::PRIMARY_500
                    },
                )))
                .push(Text::new(ctx.i18n.tr(tab.label_key())).size(typography::TITLE_SM));
            row.push(
                button(label)
                    .padding([spacing::XS, spacing::LG])
                    .style(if is_active {
                        styles::button::selected
                    } else {
                        styles::button::unselected
                    })
                    .on_press(Message::SelectTab(tab)),
            )
        },
    );

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(header(ctx.i18n.tr("services-title"), None))
        .push(buttons);

    if let Some(panel) = ctx.state.active_panel() {
        content = content.push(
            Container::new(Text::new(ctx.i18n.tr(panel.body_key())).size(typography::BODY_LG))
                .width(Length::Fill)
                .padding(spacing::XL)
                .style(styles::container::panel),
        );
    }

    frame(Section::Services, content, styles::container::section)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tab_is_active_initially() {
        let state = State::new();
        assert_eq!(state.active_tab(), TabId::Road);
        assert_eq!(state.active_panel(), Some(TabId::Road));
    }

    #[test]
    fn selecting_a_tab_switches_button_and_panel() {
        let mut state = State::new();
        update(&mut state, Message::SelectTab(TabId::Air));
        assert_eq!(state.active_tab(), TabId::Air);
        assert_eq!(state.active_panel(), Some(TabId::Air));
    }

    #[test]
    fn tab_without_panel_leaves_no_panel_active() {
        let mut state = State::with_panels(vec![TabId::Road, TabId::Sea]);
        state.select(TabId::Air);
        assert_eq!(state.active_tab(), TabId::Air);
        assert_eq!(state.active_panel(), None);

        state.select(TabId::Sea);
        assert_eq!(state.active_panel(), Some(TabId::Sea));
    }

    #[test]
    fn services_view_renders() {
        let i18n = I18n::default();
        let state = State::with_panels(Vec::new());
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
