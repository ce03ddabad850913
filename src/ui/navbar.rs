// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned over the top of the page.
//!
//! The bar holds the brand, the section links, the language switch and the
//! theme toggle. It shrinks and gains a solid surface once the page is
//! scrolled past [`NAVBAR_SCROLLED_THRESHOLD`]. Below [`MOBILE_BREAKPOINT`]
//! the links move into a dropdown opened by a menu button; the dropdown
//! closes when a link is picked or when the user clicks outside of it.

use crate::config::{MOBILE_BREAKPOINT, NAVBAR_SCROLLED_THRESHOLD};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::page::Section;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length, Point,
};

/// Height of one entry of the dropdown menu.
pub const MENU_ITEM_HEIGHT: f32 = 40.0;

/// Navbar state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    menu_open: bool,
    scrolled: bool,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Updates the scrolled flag from the page offset.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scrolled = offset > NAVBAR_SCROLLED_THRESHOLD;
    }

    /// Current height of the bar, without the dropdown.
    #[must_use]
    pub fn height(&self) -> f32 {
        if self.scrolled {
            sizing::NAVBAR_HEIGHT_SCROLLED
        } else {
            sizing::NAVBAR_HEIGHT
        }
    }

    /// Whether a window position falls on the bar or its open dropdown.
    ///
    /// The dropdown spans the window width under the bar, so only the
    /// vertical position matters.
    #[must_use]
    pub fn contains(&self, cursor: Point) -> bool {
        let bottom = if self.menu_open {
            self.height() + menu_height()
        } else {
            self.height()
        };
        cursor.y < bottom
    }
}

/// Whether a window this wide uses the compact layout.
#[must_use]
pub fn is_compact(window_width: f32) -> bool {
    window_width < MOBILE_BREAKPOINT
}

/// Height of the open dropdown.
#[must_use]
pub fn menu_height() -> f32 {
    Section::NAVIGABLE.len() as f32 * MENU_ITEM_HEIGHT + 2.0 * spacing::XS
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// Whether the window is narrower than the mobile breakpoint.
    pub compact: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    NavigateTo(&'static str),
    ToggleLanguage,
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(&'static str),
    LanguageToggled,
    ThemeToggled,
}

/// Process a navbar message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleMenu => {
            state.menu_open = !state.menu_open;
            Event::None
        }
        Message::CloseMenu => {
            state.menu_open = false;
            Event::None
        }
        Message::NavigateTo(href) => {
            state.menu_open = false;
            Event::Navigate(href)
        }
        Message::ToggleLanguage => Event::LanguageToggled,
        Message::ToggleTheme => Event::ThemeToggled,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.compact && ctx.state.is_menu_open() {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

/// Build the bar: brand, links (or the menu button) and the toggles.
fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icons::sized(icons::truck(), sizing::ICON_MD).style(styles::svg_color(palette::PRIMARY_500)))
        .push(
            Text::new(ctx.i18n.tr("navbar-brand"))
                .size(typography::TITLE_MD)
                .style(styles::text_color(palette::PRIMARY_500)),
        );

    let mut row = Row::new()
        .spacing(spacing::MD)
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill));

    if !ctx.compact {
        for section in Section::NAVIGABLE {
            if let Some(anchor) = section.anchor() {
                row = row.push(
                    button(Text::new(ctx.i18n.tr(section.nav_label_key())).size(typography::BODY))
                        .padding(spacing::XXS)
                        .style(styles::button::nav_link)
                        .on_press(Message::NavigateTo(anchor)),
                );
            }
        }
    }

    let language_button = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(icons::sized(icons::globe(), sizing::ICON_SM).style(styles::tinted_svg))
            .push(Text::new(ctx.i18n.tr("navbar-language-toggle")).size(typography::BODY)),
    )
    .padding(spacing::XXS)
    .style(styles::button::nav_link)
    .on_press(Message::ToggleLanguage);

    let theme_button = button(Text::new(ctx.i18n.tr("navbar-theme-toggle")).size(typography::BODY))
        .padding(spacing::XXS)
        .style(styles::button::nav_link)
        .on_press(Message::ToggleTheme);

    row = row.push(language_button).push(theme_button);

    if ctx.compact {
        let menu_icon = if ctx.state.is_menu_open() {
            icons::xmark()
        } else {
            icons::bars()
        };
        row = row.push(
            button(icons::sized(menu_icon, sizing::ICON_MD).style(styles::tinted_svg))
                .padding(spacing::XS)
                .style(styles::button::nav_link)
                .on_press(Message::ToggleMenu),
        );
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.state.height()))
        .align_x(Horizontal::Left)
        .align_y(Vertical::Center)
        .style(styles::container::navbar(ctx.state.is_scrolled()))
        .into()
}

/// Build the dropdown with one entry per section.
fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let items = Section::NAVIGABLE
        .into_iter()
        .filter_map(|section| section.anchor().map(|anchor| (section, anchor)))
        .fold(Column::new(), |column, (section, anchor)| {
            column.push(
                button(Text::new(ctx.i18n.tr(section.nav_label_key())).size(typography::BODY_LG))
                    .on_press(Message::NavigateTo(anchor))
                    .padding([spacing::XS, spacing::MD])
                    .width(Length::Fill)
                    .height(Length::Fixed(MENU_ITEM_HEIGHT))
                    .style(styles::button::menu_item),
            )
        });

    Container::new(items)
        .padding(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fixed(menu_height()))
        .style(styles::container::menu)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn navbar_view_renders_wide_and_compact() {
        let i18n = I18n::default();
        let mut state = State::new();
        let _wide = view(ViewContext {
            i18n: &i18n,
            state: &state,
            compact: false,
        });

        drop(_wide);
        update(&mut state, Message::ToggleMenu);
        let _compact = view(ViewContext {
            i18n: &i18n,
            state: &state,
            compact: true,
        });
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut state = State::new();
        let event = update(&mut state, Message::ToggleMenu);
        assert!(state.is_menu_open());
        assert_eq!(event, Event::None);

        let event = update(&mut state, Message::ToggleMenu);
        assert!(!state.is_menu_open());
        assert_eq!(event, Event::None);
    }

    #[test]
    fn picking_a_link_closes_menu_and_navigates() {
        let mut state = State::new();
        update(&mut state, Message::ToggleMenu);

        let event = update(&mut state, Message::NavigateTo("#faq"));
        assert!(!state.is_menu_open());
        assert_eq!(event, Event::Navigate("#faq"));
    }

    #[test]
    fn toggles_emit_events_without_touching_menu() {
        let mut state = State::new();
        update(&mut state, Message::ToggleMenu);
        assert_eq!(update(&mut state, Message::ToggleLanguage), Event::LanguageToggled);
        assert_eq!(update(&mut state, Message::ToggleTheme), Event::ThemeToggled);
        assert!(state.is_menu_open());
    }

    #[test]
    fn scrolled_past_threshold_shrinks_bar() {
        let mut state = State::new();
        state.set_scroll_offset(50.0);
        assert!(!state.is_scrolled());
        assert_eq!(state.height(), sizing::NAVBAR_HEIGHT);

        state.set_scroll_offset(51.0);
        assert!(state.is_scrolled());
        assert_eq!(state.height(), sizing::NAVBAR_HEIGHT_SCROLLED);

        state.set_scroll_offset(0.0);
        assert!(!state.is_scrolled());
    }

    #[test]
    fn compact_below_breakpoint() {
        assert!(is_compact(MOBILE_BREAKPOINT - 1.0));
        assert!(!is_compact(MOBILE_BREAKPOINT));
    }

    #[test]
    fn contains_covers_open_dropdown() {
        let mut state = State::new();
        let below_bar = Point::new(10.0, sizing::NAVBAR_HEIGHT + 10.0);
        assert!(state.contains(Point::new(10.0, 5.0)));
        assert!(!state.contains(below_bar));

        update(&mut state, Message::ToggleMenu);
        assert!(state.contains(below_bar));
        assert!(!state.contains(Point::new(
            10.0,
            sizing::NAVBAR_HEIGHT + menu_height() + 1.0
        )));
    }
}
