// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized handlers `App::update` dispatches
//! to, plus the scroll bookkeeping shared by all of them.

use super::Message;
use crate::config::CONTACT_SUBMIT_DELAY_MS;
use crate::i18n::fluent::I18n;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications::{self, manager, Notification, NotificationMessage};
use crate::ui::page;
use crate::ui::sections::contact::{self, Event as ContactEvent};
use crate::ui::sections::hero::{self, Event as HeroEvent};
use crate::ui::sections::{faq, features, services, stats};
use crate::ui::state::ScrollAnimation;
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{Point, Size, Task};
use std::time::{Duration, Instant};

/// Scroll position and window geometry of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    /// Distance scrolled from the top of the page.
    pub offset: f32,
    /// Height of the visible part of the page.
    pub viewport_height: f32,
    pub window_size: Size,
    /// Last cursor position, tracked while the compact menu is open.
    pub cursor: Option<Point>,
    /// Smooth scroll in progress, if any.
    pub scroll_animation: Option<ScrollAnimation>,
}

impl PageState {
    pub fn new(window_size: Size) -> Self {
        Self {
            offset: 0.0,
            viewport_height: window_size.height,
            window_size,
            cursor: None,
            scroll_animation: None,
        }
    }

    /// Whether the window uses the compact navbar.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        navbar::is_compact(self.window_size.width)
    }
}

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub theme_mode: &'a mut ThemeMode,
    pub now: Instant,
    pub page: &'a mut PageState,
    pub navbar: &'a mut navbar::State,
    pub features: &'a mut features::State,
    pub stats: &'a mut stats::State,
    pub services: &'a mut services::State,
    pub faq: &'a mut faq::State,
    pub contact: &'a mut contact::State,
    pub notifications: &'a mut notifications::Manager,
}

/// Shows a notification and schedules the start of its exit.
pub fn show_notification(
    notifications: &mut notifications::Manager,
    notification: Notification,
    now: Instant,
) -> Task<Message> {
    let id = notifications.notify(notification, now);
    Task::perform(tokio::time::sleep(manager::dwell()), move |()| {
        Message::Notification(NotificationMessage::BeginExit(id))
    })
}

/// Applies a toast continuation; a started exit schedules the removal.
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: NotificationMessage,
) -> Task<Message> {
    let applied = ctx.notifications.handle_message(message, ctx.now);
    match message {
        NotificationMessage::BeginExit(id) if applied => {
            Task::perform(tokio::time::sleep(manager::exit_duration()), move |()| {
                Message::Notification(NotificationMessage::Remove(id))
            })
        }
        _ => Task::none(),
    }
}

/// Records a new scroll position and lets every scroll-driven component react.
fn apply_scroll(ctx: &mut UpdateContext<'_>, offset: f32, viewport_height: f32) {
    ctx.page.offset = offset;
    ctx.page.viewport_height = viewport_height;
    ctx.navbar.set_scroll_offset(offset);
    ctx.features
        .update_visibility(offset, viewport_height, ctx.now);
    ctx.stats.update_visibility(offset, viewport_height, ctx.now);
}

/// Handles a scroll report from the page scrollable.
pub fn handle_page_scrolled(
    ctx: &mut UpdateContext<'_>,
    offset: f32,
    viewport_height: f32,
) -> Task<Message> {
    if ctx
        .page
        .scroll_animation
        .is_some_and(|animation| animation.is_interrupted_by(offset))
    {
        tracing::debug!(offset, "smooth scroll interrupted by the user");
        ctx.page.scroll_animation = None;
    }
    apply_scroll(ctx, offset, viewport_height);
    Task::none()
}

/// Starts a smooth scroll towards `target`, clamped to the scrollable range.
pub fn scroll_to(ctx: &mut UpdateContext<'_>, target: f32) -> Task<Message> {
    let target = target.clamp(0.0, page::max_offset(ctx.page.viewport_height));
    tracing::debug!(from = ctx.page.offset, to = target, "smooth scroll");
    ctx.page.scroll_animation = Some(ScrollAnimation::new(ctx.page.offset, target, ctx.now));
    Task::none()
}

/// Scrolls to the section linked by `href`; `#` and unknown anchors do nothing.
pub fn navigate(ctx: &mut UpdateContext<'_>, href: &str) -> Task<Message> {
    match page::anchor_target(href, ctx.navbar.height()) {
        Some(target) => scroll_to(ctx, target),
        None => {
            tracing::debug!(href, "anchor ignored");
            Task::none()
        }
    }
}

/// Advances the smooth scroll, if one is running.
pub fn handle_frame(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(animation) = ctx.page.scroll_animation.as_mut() else {
        return Task::none();
    };

    let position = animation.step(ctx.now);
    if animation.is_done(ctx.now) {
        ctx.page.scroll_animation = None;
    }

    let viewport_height = ctx.page.viewport_height;
    apply_scroll(ctx, position, viewport_height);
    operation::snap_to(
        Id::new(page::SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: page::relative_offset(position, viewport_height),
        },
    )
}

/// Handles a window resize: layout mode and visible area.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    ctx.page.window_size = size;
    if !ctx.page.is_compact() && ctx.navbar.is_menu_open() {
        navbar::update(ctx.navbar, navbar::Message::CloseMenu);
    }
    let offset = ctx.page.offset.min(page::max_offset(size.height));
    apply_scroll(ctx, offset, size.height);
    Task::none()
}

/// Closes the compact menu when a press lands outside of it.
pub fn handle_pointer_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.navbar.is_menu_open() {
        return Task::none();
    }
    let outside = ctx
        .page
        .cursor
        .is_none_or(|cursor| !ctx.navbar.contains(cursor));
    if outside {
        navbar::update(ctx.navbar, navbar::Message::CloseMenu);
    }
    Task::none()
}

/// Handles navbar messages and their events.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(ctx.navbar, message) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(href) => navigate(ctx, href),
        NavbarEvent::LanguageToggled => {
            ctx.i18n.cycle_locale();
            ctx.stats.retranslate(ctx.i18n);
            tracing::info!(locale = %ctx.i18n.current_locale(), "language switched");
            Task::none()
        }
        NavbarEvent::ThemeToggled => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            tracing::debug!(mode = ?ctx.theme_mode, "theme switched");
            Task::none()
        }
    }
}

/// Handles hero messages.
pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    match hero::update(message) {
        HeroEvent::Navigate(href) => navigate(ctx, href),
    }
}

/// Handles contact form messages: toasts and the simulated send delay.
pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match contact::update(ctx.contact, message) {
        ContactEvent::None => Task::none(),
        ContactEvent::ValidationFailed => show_notification(
            ctx.notifications,
            Notification::error("notification-contact-required"),
            ctx.now,
        ),
        ContactEvent::SubmissionStarted(id) => Task::perform(
            tokio::time::sleep(Duration::from_millis(CONTACT_SUBMIT_DELAY_MS)),
            move |()| Message::Contact(contact::Message::SubmissionFinished(id)),
        ),
        ContactEvent::SubmissionCompleted => show_notification(
            ctx.notifications,
            Notification::success("notification-contact-sent"),
            ctx.now,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::sizing;
    use crate::ui::page::Section;
    use crate::ui::sections::contact::Field;

    struct Fixture {
        i18n: I18n,
        theme_mode: ThemeMode,
        page: PageState,
        navbar: navbar::State,
        features: features::State,
        stats: stats::State,
        services: services::State,
        faq: faq::State,
        contact: contact::State,
        notifications: notifications::Manager,
    }

    impl Fixture {
        fn new() -> Self {
            let i18n = I18n::default();
            let stats = stats::State::new(&i18n);
            Self {
                i18n,
                theme_mode: ThemeMode::Light,
                page: PageState::new(Size::new(1200.0, 800.0)),
                navbar: navbar::State::new(),
                features: features::State::new(),
                stats,
                services: services::State::new(),
                faq: faq::State::new(),
                contact: contact::State::new(),
                notifications: notifications::Manager::new(),
            }
        }

        fn ctx(&mut self, now: Instant) -> UpdateContext<'_> {
            UpdateContext {
                i18n: &mut self.i18n,
                theme_mode: &mut self.theme_mode,
                now,
                page: &mut self.page,
                navbar: &mut self.navbar,
                features: &mut self.features,
                stats: &mut self.stats,
                services: &mut self.services,
                faq: &mut self.faq,
                contact: &mut self.contact,
                notifications: &mut self.notifications,
            }
        }
    }

    #[test]
    fn scrolling_updates_navbar_and_counters() {
        let mut fixture = Fixture::new();
        let now = Instant::now();
        let offset = page::counter_span().top - 100.0;
        let _ = handle_page_scrolled(&mut fixture.ctx(now), offset, 800.0);

        assert!(fixture.navbar.is_scrolled());
        assert!(fixture.stats.is_counting());
        assert_eq!(fixture.page.offset, offset);
    }

    #[test]
    fn navigation_targets_section_below_navbar() {
        let mut fixture = Fixture::new();
        let now = Instant::now();
        let _ = handle_navbar_message(&mut fixture.ctx(now), navbar::Message::NavigateTo("#faq"));

        let animation = fixture.page.scroll_animation.expect("scroll started");
        assert_eq!(
            animation.target(),
            Section::Faq.top() - sizing::NAVBAR_HEIGHT - 20.0
        );
    }

    #[test]
    fn bare_hash_does_not_scroll() {
        let mut fixture = Fixture::new();
        let _ = navigate(&mut fixture.ctx(Instant::now()), "#");
        assert!(fixture.page.scroll_animation.is_none());
    }

    #[test]
    fn frames_drive_smooth_scroll_to_completion() {
        let mut fixture = Fixture::new();
        let start = Instant::now();
        let _ = scroll_to(&mut fixture.ctx(start), 1000.0);

        let _ = handle_frame(&mut fixture.ctx(start + Duration::from_millis(100)));
        assert!(fixture.page.offset > 0.0 && fixture.page.offset < 1000.0);

        let _ = handle_frame(&mut fixture.ctx(start + Duration::from_secs(1)));
        assert_eq!(fixture.page.offset, 1000.0);
        assert!(fixture.page.scroll_animation.is_none());
    }

    #[test]
    fn user_scroll_interrupts_smooth_scroll() {
        let mut fixture = Fixture::new();
        let start = Instant::now();
        let _ = scroll_to(&mut fixture.ctx(start), 2000.0);
        let _ = handle_page_scrolled(&mut fixture.ctx(start), 600.0, 800.0);
        assert!(fixture.page.scroll_animation.is_none());
    }

    #[test]
    fn scroll_target_is_clamped_to_page() {
        let mut fixture = Fixture::new();
        let _ = scroll_to(&mut fixture.ctx(Instant::now()), 1e6);
        let animation = fixture.page.scroll_animation.expect("scroll started");
        assert_eq!(animation.target(), page::max_offset(800.0));
    }

    #[test]
    fn press_outside_open_menu_closes_it() {
        let mut fixture = Fixture::new();
        let now = Instant::now();
        navbar::update(&mut fixture.navbar, navbar::Message::ToggleMenu);

        fixture.page.cursor = Some(Point::new(10.0, 10.0));
        let _ = handle_pointer_pressed(&mut fixture.ctx(now));
        assert!(fixture.navbar.is_menu_open());

        fixture.page.cursor = Some(Point::new(10.0, 700.0));
        let _ = handle_pointer_pressed(&mut fixture.ctx(now));
        assert!(!fixture.navbar.is_menu_open());
    }

    #[test]
    fn widening_the_window_closes_the_menu() {
        let mut fixture = Fixture::new();
        navbar::update(&mut fixture.navbar, navbar::Message::ToggleMenu);
        let _ = handle_window_resized(&mut fixture.ctx(Instant::now()), Size::new(1400.0, 900.0));
        assert!(!fixture.navbar.is_menu_open());
        assert_eq!(fixture.page.viewport_height, 900.0);
    }

    #[tokio::test]
    async fn invalid_contact_submit_shows_error_toast() {
        let mut fixture = Fixture::new();
        let _ = handle_contact_message(&mut fixture.ctx(Instant::now()), contact::Message::Submit);

        let toast = fixture.notifications.current().expect("toast shown");
        assert_eq!(toast.severity(), notifications::Severity::Error);
        assert_eq!(
            toast.notification().message_key(),
            "notification-contact-required"
        );
    }

    #[tokio::test]
    async fn completed_contact_submit_shows_success_toast() {
        let mut fixture = Fixture::new();
        let now = Instant::now();
        for (field, value) in [
            (Field::Name, "Sara"),
            (Field::Email, "sara@example.com"),
            (Field::Message, "Hello"),
        ] {
            let _ = handle_contact_message(
                &mut fixture.ctx(now),
                contact::Message::FieldChanged(field, value.to_string()),
            );
        }
        let contact::Event::SubmissionStarted(id) =
            contact::update(&mut fixture.contact, contact::Message::Submit)
        else {
            panic!("expected submission to start");
        };
        assert!(fixture.notifications.current().is_none());

        let _ = handle_contact_message(
            &mut fixture.ctx(now),
            contact::Message::SubmissionFinished(id),
        );
        let toast = fixture.notifications.current().expect("toast shown");
        assert_eq!(toast.severity(), notifications::Severity::Success);
        assert!(!fixture.contact.is_sending());
    }

    #[test]
    fn language_toggle_retranslates_counters() {
        let mut fixture = Fixture::new();
        let before = fixture.i18n.current_locale().clone();
        let _ = handle_navbar_message(&mut fixture.ctx(Instant::now()), navbar::Message::ToggleLanguage);
        assert_ne!(fixture.i18n.current_locale(), &before);
        assert_eq!(fixture.stats.counter_text(stats::StatId::Deliveries), "+50K");
    }

    #[test]
    fn theme_toggle_flips_mode() {
        let mut fixture = Fixture::new();
        let _ = handle_navbar_message(&mut fixture.ctx(Instant::now()), navbar::Message::ToggleTheme);
        assert_eq!(fixture.theme_mode, ThemeMode::Dark);
    }

    #[tokio::test]
    async fn stale_toast_continuations_are_ignored() {
        let mut fixture = Fixture::new();
        let now = Instant::now();
        let first = fixture
            .notifications
            .notify(Notification::info("window-title"), now);
        let _ = show_notification(
            &mut fixture.notifications,
            Notification::success("notification-contact-sent"),
            now,
        );

        let _ = handle_notification_message(
            &mut fixture.ctx(now),
            NotificationMessage::Remove(first),
        );
        assert!(fixture.notifications.has_notifications());
    }
}
