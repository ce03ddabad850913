// SPDX-License-Identifier: MPL-2.0
//! Numbers section: animated counters and the deliveries chart.
//!
//! Counters count up from zero the first time their row is at least half
//! visible. The chart bars stay collapsed until the chart is half visible,
//! then grow to their height. Both fire once per page session.

use super::{frame, header};
use crate::config::{CHART_GROW_MS, CHART_VISIBILITY_THRESHOLD, COUNTER_VISIBILITY_THRESHOLD};
use crate::counter::{AnimationHandle, Animator};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::page::{self, Section, CHART_BLOCK_HEIGHT, COUNTER_ROW_HEIGHT};
use crate::ui::state::Observer;
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};
use std::time::{Duration, Instant};

/// The four figures of the section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatId {
    Vehicles,
    Uptime,
    Deliveries,
    Support,
}

impl StatId {
    pub const ALL: [StatId; 4] = [
        StatId::Vehicles,
        StatId::Uptime,
        StatId::Deliveries,
        StatId::Support,
    ];

    fn value_key(self) -> &'static str {
        match self {
            StatId::Vehicles => "stat-vehicles-value",
            StatId::Uptime => "stat-uptime-value",
            StatId::Deliveries => "stat-deliveries-value",
            StatId::Support => "stat-support-value",
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            StatId::Vehicles => "stat-vehicles-label",
            StatId::Uptime => "stat-uptime-label",
            StatId::Deliveries => "stat-deliveries-label",
            StatId::Support => "stat-support-label",
        }
    }

    fn icon(self) -> iced::widget::Svg<'static> {
        match self {
            StatId::Vehicles => icons::truck(),
            StatId::Uptime => icons::chart_bar(),
            StatId::Deliveries => icons::map_pin(),
            StatId::Support => icons::users(),
        }
    }
}

/// Relative bar heights of the chart, one per month.
pub const CHART_BARS: [f32; 6] = [0.45, 0.6, 0.55, 0.72, 0.85, 0.95];

fn chart_grow() -> Duration {
    Duration::from_millis(CHART_GROW_MS)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// State of the numbers section.
#[derive(Debug, Clone)]
pub struct State {
    animator: Animator<StatId>,
    running: Vec<AnimationHandle<StatId>>,
    counters: Observer<StatId>,
    chart: Observer<()>,
    chart_started: Option<Instant>,
}

impl State {
    /// Creates the section with every counter showing its translated text
    /// and nothing triggered yet.
    pub fn new(i18n: &I18n) -> Self {
        let mut animator = Animator::new();
        let mut counters = Observer::new(COUNTER_VISIBILITY_THRESHOLD);
        for id in StatId::ALL {
            animator.insert(id, i18n.tr(id.value_key()));
            counters.observe_once(id, page::counter_span());
        }

        let mut chart = Observer::new(CHART_VISIBILITY_THRESHOLD);
        chart.observe_once((), page::chart_span());

        Self {
            animator,
            running: Vec::new(),
            counters,
            chart,
            chart_started: None,
        }
    }

    /// Replaces the counter texts after a language switch.
    ///
    /// Running animations are cancelled and every counter shows its final
    /// text; counters that have not fired yet still animate later.
    pub fn retranslate(&mut self, i18n: &I18n) {
        for handle in self.running.drain(..) {
            self.animator.cancel(handle);
        }
        for id in StatId::ALL {
            self.animator.insert(id, i18n.tr(id.value_key()));
        }
    }

    /// Starts counters and the chart that just became visible.
    pub fn update_visibility(&mut self, offset: f32, viewport_height: f32, now: Instant) {
        for id in self.counters.update(offset, viewport_height) {
            if let Some(handle) = self.animator.start(id) {
                tracing::debug!(counter = ?id, "counter animation started");
                self.running.push(handle);
            }
        }

        if !self.chart.update(offset, viewport_height).is_empty() && self.chart_started.is_none() {
            tracing::debug!("chart animation started");
            self.chart_started = Some(now);
        }
    }

    /// Advances every running counter by one step.
    pub fn tick(&mut self) {
        self.animator.tick();
        let animator = &self.animator;
        self.running
            .retain(|handle| animator.is_running(handle.element()));
    }

    #[must_use]
    pub fn is_counting(&self) -> bool {
        self.animator.is_animating()
    }

    #[must_use]
    pub fn counter_text(&self, id: StatId) -> &str {
        self.animator.text(id).unwrap_or_default()
    }

    /// Growth of the chart bars from 0.0 (paused) to 1.0 (full height).
    #[must_use]
    pub fn chart_progress(&self, now: Instant) -> f32 {
        match self.chart_started {
            None => 0.0,
            Some(started) => {
                let elapsed = now.saturating_duration_since(started);
                ease_out((elapsed.as_secs_f32() / chart_grow().as_secs_f32()).min(1.0))
            }
        }
    }

    /// Whether the bars are still growing at `now`.
    #[must_use]
    pub fn is_chart_growing(&self, now: Instant) -> bool {
        self.chart_started
            .is_some_and(|started| now.saturating_duration_since(started) < chart_grow())
    }
}

/// Contextual data needed to render the section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub now: Instant,
}

/// Render the numbers section.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let counters = StatId::ALL.into_iter().fold(
        Row::new().spacing(spacing::LG).height(Length::Fixed(COUNTER_ROW_HEIGHT)),
        |row, id| row.push(build_counter(&ctx, id)),
    );

    let content = Column::new()
        .push(header(ctx.i18n.tr("stats-title"), None))
        .push(counters)
        .push(Space::new().height(Length::Fixed(spacing::XXL)))
        .push(build_chart(&ctx));

    frame(Section::Stats, content, styles::container::section_alt)
}

fn build_counter<'a, Message: 'a>(ctx: &ViewContext<'a>, id: StatId) -> Element<'a, Message> {
    let icon = icons::sized(id.icon(), sizing::ICON_LG).style(styles::svg_color(palette::PRIMARY_500));
    let figure = Text::new(ctx.state.counter_text(id))
        .size(typography::FIGURE)
        .style(styles::text_color(palette::PRIMARY_500));
    let label = Text::new(ctx.i18n.tr(id.label_key()))
        .size(typography::BODY)
        .style(styles::muted_text);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(icon)
            .push(figure)
            .push(label),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}

fn build_chart<'a, Message: 'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let progress = ctx.state.chart_progress(ctx.now);

    let bars = CHART_BARS.iter().enumerate().fold(
        Row::new()
            .spacing(spacing::LG)
            .align_y(alignment::Vertical::Bottom)
            .height(Length::Fixed(sizing::CHART_HEIGHT)),
        |row, (index, share)| {
            let month = Text::new(ctx.i18n.tr(&format!("chart-month-{}", index + 1)))
                .size(typography::CAPTION)
                .style(styles::muted_text);
            let bar = Container::new(Space::new())
                .width(Length::Fixed(sizing::CHART_BAR_WIDTH))
                .height(Length::Fixed(
                    (sizing::CHART_HEIGHT - spacing::LG) * share * progress,
                ))
                .style(styles::container::chart_bar);
            row.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .align_x(alignment::Horizontal::Center)
                    .push(bar)
                    .push(month),
            )
        },
    );

    let title = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("chart-title")).size(typography::TITLE_SM))
        .push(
            Text::new(ctx.i18n.tr("chart-subtitle"))
                .size(typography::CAPTION)
                .style(styles::muted_text),
        );

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(title)
            .push(bars),
    )
    .width(Length::Fill)
    .height(Length::Fixed(CHART_BLOCK_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f32 = 800.0;

    fn state() -> State {
        State::new(&I18n::default())
    }

    fn offset_showing_counters() -> f32 {
        page::counter_span().top - 100.0
    }

    #[test]
    fn counters_start_with_their_final_text() {
        let state = state();
        assert_eq!(state.counter_text(StatId::Deliveries), "+50K");
        assert_eq!(state.counter_text(StatId::Support), "24/7");
        assert!(!state.is_counting());
    }

    #[test]
    fn counters_animate_once_visible() {
        let mut state = state();
        state.update_visibility(0.0, VIEWPORT, Instant::now());
        assert!(!state.is_counting());

        state.update_visibility(offset_showing_counters(), VIEWPORT, Instant::now());
        assert!(state.is_counting());

        state.tick();
        assert_eq!(state.counter_text(StatId::Deliveries), "+1K");
        // Not a number: never animated.
        assert_eq!(state.counter_text(StatId::Support), "24/7");
    }

    #[test]
    fn counters_finish_on_exact_text_and_do_not_replay() {
        let mut state = state();
        let now = Instant::now();
        state.update_visibility(offset_showing_counters(), VIEWPORT, now);
        for _ in 0..60 {
            state.tick();
        }
        assert!(!state.is_counting());
        assert_eq!(state.counter_text(StatId::Vehicles), "+500");
        assert_eq!(state.counter_text(StatId::Uptime), "99.9%");

        state.update_visibility(0.0, VIEWPORT, now);
        state.update_visibility(offset_showing_counters(), VIEWPORT, now);
        assert!(!state.is_counting());
    }

    #[test]
    fn retranslate_cancels_running_counters() {
        let mut state = state();
        state.update_visibility(offset_showing_counters(), VIEWPORT, Instant::now());
        state.tick();
        assert!(state.is_counting());

        state.retranslate(&I18n::default());
        assert!(!state.is_counting());
        assert_eq!(state.counter_text(StatId::Deliveries), "+50K");
    }

    #[test]
    fn chart_is_paused_until_visible() {
        let mut state = state();
        let start = Instant::now();
        state.update_visibility(0.0, VIEWPORT, start);
        assert_eq!(state.chart_progress(start + Duration::from_secs(5)), 0.0);
        assert!(!state.is_chart_growing(start));

        let offset = page::chart_span().top - 200.0;
        state.update_visibility(offset, VIEWPORT, start);
        assert!(state.is_chart_growing(start));
        let halfway = state.chart_progress(start + chart_grow() / 2);
        assert!(halfway > 0.5 && halfway < 1.0);
        assert_eq!(state.chart_progress(start + chart_grow()), 1.0);
        assert!(!state.is_chart_growing(start + chart_grow()));
    }

    #[test]
    fn stats_view_renders() {
        let i18n = I18n::default();
        let state = State::new(&i18n);
        let _element: Element<'_, ()> = view(ViewContext {
            i18n: &i18n,
            state: &state,
            now: Instant::now(),
        });
    }
}
