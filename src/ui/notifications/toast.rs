// SPDX-License-Identifier: MPL-2.0
//! The on-screen toast: lifecycle phase, transition progress and rendering.
//!
//! A toast slides in from the right while fading in, stays put, then slides
//! back out while fading out. Progress is computed from timestamps so the
//! view only needs the current instant.

use super::notification::{Notification, Severity};
use crate::config::{TOAST_SLIDE_DISTANCE, TOAST_TRANSITION_MS};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use crate::ui::icons;
use iced::widget::{container, svg, text, Container, Row, Space, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Unique identifier for a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a toast is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Entering or dwelling.
    Visible,
    /// Sliding out since the given instant.
    Exiting { since: Instant },
}

/// A displayed notification.
#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    notification: Notification,
    created_at: Instant,
    phase: Phase,
}

fn transition() -> Duration {
    Duration::from_millis(TOAST_TRANSITION_MS)
}

fn progress_since(start: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / transition().as_secs_f32()).min(1.0)
}

impl Toast {
    pub fn new(notification: Notification, created_at: Instant) -> Self {
        Self {
            id: ToastId::new(),
            notification,
            created_at,
            phase: Phase::Visible,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.notification.severity()
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(super) fn begin_exit(&mut self, now: Instant) {
        if self.phase == Phase::Visible {
            self.phase = Phase::Exiting { since: now };
        }
    }

    /// Entrance progress from 0.0 (just inserted) to 1.0 (in place).
    #[must_use]
    pub fn entrance_progress(&self, now: Instant) -> f32 {
        progress_since(self.created_at, now)
    }

    /// Exit progress from 0.0 (still in place) to 1.0 (gone).
    #[must_use]
    pub fn exit_progress(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Visible => 0.0,
            Phase::Exiting { since } => progress_since(since, now),
        }
    }

    /// Horizontal offset (pixels to the right of the resting position) and
    /// opacity of the toast at `now`.
    #[must_use]
    pub fn offset_and_alpha(&self, now: Instant) -> (f32, f32) {
        let shown = self.entrance_progress(now) * (1.0 - self.exit_progress(now));
        ((1.0 - shown) * TOAST_SLIDE_DISTANCE, shown)
    }

    /// Whether a slide transition is still running at `now`.
    #[must_use]
    pub fn is_transitioning(&self, now: Instant) -> bool {
        let exiting = match self.phase {
            Phase::Visible => false,
            Phase::Exiting { .. } => self.exit_progress(now) < 1.0,
        };
        self.entrance_progress(now) < 1.0 || exiting
    }
}

/// Renders a toast at its current transition state.
///
/// The card sits at the left of a slot as wide as the card plus the slide
/// distance and is pushed right inside it, so the slot's right edge is where
/// a fully exited card ends.
pub fn view<'a, Message: 'a>(toast: &'a Toast, i18n: &'a I18n, now: Instant) -> Element<'a, Message> {
    let notification = toast.notification();
    let (offset, alpha) = toast.offset_and_alpha(now);

    let message_text = if notification.message_args().is_empty() {
        i18n.tr(notification.message_key())
    } else {
        let args: Vec<(&str, &str)> = notification
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(notification.message_key(), &args)
    };

    let foreground = Color {
        a: alpha,
        ..palette::WHITE
    };
    let icon = icons::sized(toast.severity().icon(), sizing::ICON_MD).style(
        move |_theme: &Theme, _status: svg::Status| svg::Style {
            color: Some(foreground),
        },
    );
    let message = Text::new(message_text)
        .size(typography::BODY_LG)
        .style(move |_theme: &Theme| text::Style {
            color: Some(foreground),
        });

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(message);

    let accent = toast.severity().color();
    let card = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(Padding::from([spacing::MD, spacing::LG]))
        .style(move |_theme: &Theme| toast_container_style(accent, alpha));

    let slot = Row::new()
        .push(Space::new().width(Length::Fixed(offset)))
        .push(card);

    Container::new(slot)
        .width(Length::Fixed(sizing::TOAST_WIDTH + TOAST_SLIDE_DISTANCE))
        .align_x(alignment::Horizontal::Left)
        .clip(true)
        .into()
}

/// Style function for the toast card.
fn toast_container_style(accent: Color, alpha: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color { a: alpha, ..accent })),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            color: Color {
                a: 0.2 * alpha,
                ..palette::BLACK
            },
            ..shadow::LG
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(now: Instant) -> Toast {
        Toast::new(Notification::success("notification-contact-sent"), now)
    }

    #[test]
    fn toast_ids_are_unique() {
        let now = Instant::now();
        assert_ne!(toast(now).id(), toast(now).id());
    }

    #[test]
    fn entrance_runs_for_transition_duration() {
        let start = Instant::now();
        let toast = toast(start);

        assert_eq!(toast.offset_and_alpha(start), (TOAST_SLIDE_DISTANCE, 0.0));
        let (offset, alpha) = toast.offset_and_alpha(start + transition() / 2);
        assert!((offset - TOAST_SLIDE_DISTANCE / 2.0).abs() < 0.01);
        assert!((alpha - 0.5).abs() < 0.01);
        assert!(toast.is_transitioning(start + transition() / 2));

        assert_eq!(toast.offset_and_alpha(start + transition()), (0.0, 1.0));
        assert!(!toast.is_transitioning(start + transition()));
    }

    #[test]
    fn exit_slides_back_out() {
        let start = Instant::now();
        let mut toast = toast(start);
        let exit_at = start + Duration::from_secs(4);
        toast.begin_exit(exit_at);

        assert!(matches!(toast.phase(), Phase::Exiting { since } if since == exit_at));
        assert_eq!(toast.offset_and_alpha(exit_at), (0.0, 1.0));
        assert!(toast.is_transitioning(exit_at));
        assert_eq!(
            toast.offset_and_alpha(exit_at + transition()),
            (TOAST_SLIDE_DISTANCE, 0.0)
        );
        assert!(!toast.is_transitioning(exit_at + transition()));
    }

    #[test]
    fn begin_exit_keeps_first_instant() {
        let start = Instant::now();
        let mut toast = toast(start);
        toast.begin_exit(start + Duration::from_secs(1));
        toast.begin_exit(start + Duration::from_secs(2));
        assert_eq!(
            toast.phase(),
            Phase::Exiting {
                since: start + Duration::from_secs(1)
            }
        );
    }

    #[test]
    fn toast_container_style_uses_severity_color() {
        let style = toast_container_style(palette::TOAST_ERROR, 1.0);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::TOAST_ERROR))
        );
    }

    #[test]
    fn view_renders_with_arguments() {
        let i18n = I18n::default();
        let toast = Toast::new(Notification::info("window-title").with_arg("x", "y"), Instant::now());
        let _element: Element<'_, ()> = view(&toast, &i18n, Instant::now());
    }
}
