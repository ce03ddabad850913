// SPDX-License-Identifier: MPL-2.0
//! Feature cards with scroll-reveal transitions.
//!
//! Cards stay hidden until at least a tenth of them has scrolled above a line
//! 100px from the bottom of the viewport. Each card then plays its reveal
//! once: a fade, a slide from the right, or a scale-up.

use super::{frame, header};
use crate::config::{REVEAL_BOTTOM_MARGIN, REVEAL_THRESHOLD, REVEAL_TRANSITION_MS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::page::{self, Section, FEATURE_CARD_HEIGHT, FEATURE_COLUMNS};
use crate::ui::state::{Observer, RootMargin};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment, Color, Element, Length, Padding};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Slide distance of [`Reveal::SlideInRight`].
const SLIDE_DISTANCE: f32 = 50.0;

/// Inset of [`Reveal::ScaleIn`] at the start of the transition.
const SCALE_INSET: f32 = 24.0;

/// How a card appears once revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    FadeIn,
    SlideInRight,
    ScaleIn,
}

/// The feature cards, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    Tracking,
    Routes,
    Fuel,
    Maintenance,
    Drivers,
    Reports,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::Tracking,
        Feature::Routes,
        Feature::Fuel,
        Feature::Maintenance,
        Feature::Drivers,
        Feature::Reports,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn reveal(self) -> Reveal {
        match self.index() % 3 {
            0 => Reveal::FadeIn,
            1 => Reveal::SlideInRight,
            _ => Reveal::ScaleIn,
        }
    }

    fn title_key(self) -> &'static str {
        match self {
            Feature::Tracking => "feature-tracking-title",
            Feature::Routes => "feature-routes-title",
            Feature::Fuel => "feature-fuel-title",
            Feature::Maintenance => "feature-maintenance-title",
            Feature::Drivers => "feature-drivers-title",
            Feature::Reports => "feature-reports-title",
        }
    }

    fn description_key(self) -> &'static str {
        match self {
            Feature::Tracking => "feature-tracking-desc",
            Feature::Routes => "feature-routes-desc",
            Feature::Fuel => "feature-fuel-desc",
            Feature::Maintenance => "feature-maintenance-desc",
            Feature::Drivers => "feature-drivers-desc",
            Feature::Reports => "feature-reports-desc",
        }
    }

    fn icon(self) -> iced::widget::Svg<'static> {
        match self {
            Feature::Tracking => icons::map_pin(),
            Feature::Routes => icons::route(),
            Feature::Fuel => icons::fuel(),
            Feature::Maintenance => icons::wrench(),
            Feature::Drivers => icons::users(),
            Feature::Reports => icons::chart_bar(),
        }
    }
}

fn transition() -> Duration {
    Duration::from_millis(REVEAL_TRANSITION_MS)
}

/// Reveal state of the feature cards.
#[derive(Debug, Clone)]
pub struct State {
    observer: Observer<Feature>,
    revealed: BTreeMap<Feature, Instant>,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub fn new() -> Self {
        let mut observer = Observer::new(REVEAL_THRESHOLD).with_margin(RootMargin {
            top: 0.0,
            bottom: REVEAL_BOTTOM_MARGIN,
        });
        for feature in Feature::ALL {
            observer.observe_once(feature, page::feature_card_span(feature.index()));
        }

        Self {
            observer,
            revealed: BTreeMap::new(),
        }
    }

    /// Reveals the cards that just scrolled into view.
    pub fn update_visibility(&mut self, offset: f32, viewport_height: f32, now: Instant) {
        for feature in self.observer.update(offset, viewport_height) {
            tracing::trace!(?feature, "feature card revealed");
            self.revealed.entry(feature).or_insert(now);
        }
    }

    #[must_use]
    pub fn is_revealed(&self, feature: Feature) -> bool {
        self.revealed.contains_key(&feature)
    }

    /// Reveal progress of a card from 0.0 (hidden) to 1.0 (in place).
    #[must_use]
    pub fn progress(&self, feature: Feature, now: Instant) -> f32 {
        self.revealed.get(&feature).map_or(0.0, |since| {
            let elapsed = now.saturating_duration_since(*since);
            (elapsed.as_secs_f32() / transition().as_secs_f32()).min(1.0)
        })
    }

    /// Whether any reveal transition is still running at `now`.
    #[must_use]
    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.revealed
            .values()
            .any(|since| now.saturating_duration_since(*since) < transition())
    }
}

/// Contextual data needed to render the section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub now: Instant,
}

/// Render the features section.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::LG);
    for row_features in Feature::ALL.chunks(FEATURE_COLUMNS) {
        let row = row_features.iter().fold(
            Row::new().spacing(spacing::LG),
            |row, feature| row.push(build_card(&ctx, *feature)),
        );
        grid = grid.push(row);
    }

    let content = Column::new()
        .push(header(ctx.i18n.tr("features-title"), None))
        .push(grid);

    frame(Section::Features, content, styles::container::section)
}

fn build_card<'a, Message: 'a>(ctx: &ViewContext<'a>, feature: Feature) -> Element<'a, Message> {
    let progress = ctx.state.progress(feature, ctx.now);
    let eased = 1.0 - (1.0 - progress).powi(2);
    let text_color = move |color: Color| Color {
        a: color.a * eased,
        ..color
    };

    let icon = icons::sized(feature.icon(), sizing::ICON_XL)
        .style(styles::svg_color(text_color(palette::PRIMARY_500)));
    let title = Text::new(ctx.i18n.tr(feature.title_key()))
        .size(typography::TITLE_MD)
        .style(move |theme: &iced::Theme| iced::widget::text::Style {
            color: Some(text_color(theme.extended_palette().background.base.text)),
        });
    let description = Text::new(ctx.i18n.tr(feature.description_key()))
        .size(typography::BODY)
        .style(move |theme: &iced::Theme| iced::widget::text::Style {
            color: Some(text_color(
                theme.extended_palette().background.base.text.scale_alpha(0.7),
            )),
        });

    let body = Column::new()
        .spacing(spacing::SM)
        .push(icon)
        .push(title)
        .push(description);

    let card = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card(eased));

    let rest = 1.0 - eased;
    let placement = match feature.reveal() {
        Reveal::FadeIn => Padding::ZERO,
        Reveal::SlideInRight => Padding::ZERO.left(rest * SLIDE_DISTANCE),
        Reveal::ScaleIn => Padding::new(rest * SCALE_INSET),
    };

    let slot: Element<'a, Message> = if ctx.state.is_revealed(feature) {
        Container::new(card)
            .padding(placement)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        Space::new().width(Length::Fill).height(Length::Fill).into()
    };

    Container::new(slot)
        .width(Length::Fill)
        .height(Length::Fixed(FEATURE_CARD_HEIGHT))
        .clip(true)
        .align_x(alignment::Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f32 = 800.0;

    #[test]
    fn reveal_kinds_cycle_across_cards() {
        assert_eq!(Feature::Tracking.reveal(), Reveal::FadeIn);
        assert_eq!(Feature::Routes.reveal(), Reveal::SlideInRight);
        assert_eq!(Feature::Fuel.reveal(), Reveal::ScaleIn);
        assert_eq!(Feature::Maintenance.reveal(), Reveal::FadeIn);
    }

    #[test]
    fn cards_are_hidden_at_the_top_of_the_page() {
        let mut state = State::new();
        let now = Instant::now();
        // The first row starts at 760px; the margin hides the band below 700px.
        state.update_visibility(0.0, VIEWPORT, now);
        assert!(Feature::ALL.iter().all(|f| !state.is_revealed(*f)));
        assert_eq!(state.progress(Feature::Tracking, now), 0.0);
    }

    #[test]
    fn first_row_reveals_before_second() {
        let mut state = State::new();
        let now = Instant::now();
        let first_row = page::feature_card_span(0);
        state.update_visibility(first_row.top - 400.0, VIEWPORT, now);

        assert!(state.is_revealed(Feature::Tracking));
        assert!(state.is_revealed(Feature::Fuel));
        assert!(!state.is_revealed(Feature::Maintenance));
        assert!(state.is_transitioning(now));
    }

    #[test]
    fn reveal_is_fire_once() {
        let mut state = State::new();
        let start = Instant::now();
        let offset = page::feature_card_span(0).top - 400.0;
        state.update_visibility(offset, VIEWPORT, start);

        let later = start + transition();
        state.update_visibility(0.0, VIEWPORT, later);
        state.update_visibility(offset, VIEWPORT, later);

        assert_eq!(state.progress(Feature::Tracking, later), 1.0);
        assert!(!state.is_transitioning(later));
    }

    #[test]
    fn features_view_renders_hidden_and_revealed() {
        let i18n = I18n::default();
        let mut state = State::new();
        let now = Instant::now();
        let _hidden: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            state: &state,
            now,
        });

        drop(_hidden);
        state.update_visibility(page::feature_card_span(5).top, VIEWPORT, now);
        let _revealed: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            state: &state,
            now: now + transition() / 2,
        });
    }
}
