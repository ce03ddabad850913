// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together localization, the theme, the page
//! sections and the toast manager, and translates messages into side
//! effects such as smooth scrolls and delayed continuations.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::PageState;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::navbar;
use crate::ui::notifications::{self, Notification};
use crate::ui::sections::{contact, faq, features, services, stats};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    /// Time of the message being processed, used by every transition.
    now: Instant,
    page: PageState,
    navbar: navbar::State,
    features: features::State,
    stats: stats::State,
    services: services::State,
    faq: faq::State,
    contact: contact::State,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("theme_mode", &self.theme_mode)
            .field("scroll_offset", &self.page.offset)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let stats = stats::State::new(&i18n);
        Self {
            i18n,
            theme_mode: ThemeMode::default(),
            now: Instant::now(),
            page: PageState::new(default_window_size()),
            navbar: navbar::State::new(),
            features: features::State::new(),
            stats,
            services: services::State::new(),
            faq: faq::State::new(),
            contact: contact::State::new(),
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and surfaces settings problems as a toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, flags.i18n_dir, &config);
        let stats = stats::State::new(&i18n);

        let mut app = App {
            i18n,
            stats,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };

        tracing::info!(
            locale = %app.i18n.current_locale(),
            theme_mode = ?app.theme_mode,
            "starting"
        );

        let task = match config_warning {
            Some(key) => update::show_notification(
                &mut app.notifications,
                Notification::info(key),
                app.now,
            ),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    /// Whether anything on screen needs per-frame redraws.
    fn is_animating(&self) -> bool {
        self.page.scroll_animation.is_some()
            || self.notifications.is_transitioning(self.now)
            || self.features.is_transitioning(self.now)
            || self.stats.is_chart_growing(self.now)
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.navbar.is_menu_open()),
            subscription::create_counter_subscription(self.stats.is_counting()),
            subscription::create_frame_subscription(self.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.now = match &message {
            Message::Frame(instant) => *instant,
            _ => Instant::now(),
        };

        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            theme_mode: &mut self.theme_mode,
            now: self.now,
            page: &mut self.page,
            navbar: &mut self.navbar,
            features: &mut self.features,
            stats: &mut self.stats,
            services: &mut self.services,
            faq: &mut self.faq,
            contact: &mut self.contact,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::Services(services_message) => {
                services::update(ctx.services, services_message);
                Task::none()
            }
            Message::Faq(faq_message) => {
                faq::update(ctx.faq, faq_message);
                Task::none()
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, notification_message)
            }
            Message::PageScrolled {
                offset,
                viewport_height,
            } => update::handle_page_scrolled(&mut ctx, offset, viewport_height),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::CursorMoved(position) => {
                ctx.page.cursor = Some(position);
                Task::none()
            }
            Message::PointerPressed => update::handle_pointer_pressed(&mut ctx),
            Message::CounterTick => {
                ctx.stats.tick();
                Task::none()
            }
            Message::Frame(_) => update::handle_frame(&mut ctx),
            Message::ScrollToTop => update::scroll_to(&mut ctx, 0.0),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            now: self.now,
            scroll_offset: self.page.offset,
            compact: self.page.is_compact(),
            navbar: &self.navbar,
            features: &self.features,
            stats: &self.stats,
            services: &self.services,
            faq: &self.faq,
            contact: &self.contact,
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::sizing;
    use crate::ui::page::{self, Section};
    use crate::ui::sections::faq::FaqItem;
    use crate::ui::sections::services::TabId;
    use std::time::Duration;

    #[test]
    fn default_app_starts_at_the_top() {
        let app = App::default();
        assert_eq!(app.page.offset, 0.0);
        assert!(!app.navbar.is_menu_open());
        assert!(!app.is_animating());
        assert!(app.notifications.current().is_none());
    }

    #[test]
    fn title_is_localized() {
        let app = App::default();
        assert_eq!(app.title(), "Fleet Pro");
    }

    #[test]
    fn section_messages_reach_their_state() {
        let mut app = App::default();
        let _ = app.update(Message::Services(services::Message::SelectTab(TabId::Air)));
        let _ = app.update(Message::Faq(faq::Message::Toggle(FaqItem::Pricing)));

        assert_eq!(app.services.active_tab(), TabId::Air);
        assert!(app.faq.is_open(FaqItem::Pricing));
    }

    #[test]
    fn anchor_click_starts_frame_driven_scroll() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::NavigateTo("#contact")));
        assert!(app.is_animating());

        let later = app.now + Duration::from_secs(1);
        let _ = app.update(Message::Frame(later));
        let expected = (Section::Contact.top() - sizing::NAVBAR_HEIGHT - 20.0)
            .min(page::max_offset(app.page.viewport_height));
        assert!((app.page.offset - expected).abs() < 1.0);
        assert!(app.page.scroll_animation.is_none());
    }

    #[test]
    fn scroll_to_top_targets_zero() {
        let mut app = App::default();
        let _ = app.update(Message::PageScrolled {
            offset: 1200.0,
            viewport_height: 800.0,
        });
        let _ = app.update(Message::ScrollToTop);
        let animation = app.page.scroll_animation.expect("scroll started");
        assert_eq!(animation.target(), 0.0);
    }

    #[test]
    fn counter_ticks_advance_visible_counters() {
        let mut app = App::default();
        let _ = app.update(Message::PageScrolled {
            offset: page::counter_span().top - 200.0,
            viewport_height: 800.0,
        });
        assert!(app.stats.is_counting());

        let _ = app.update(Message::CounterTick);
        assert_ne!(app.stats.counter_text(stats::StatId::Vehicles), "+500");
    }

    #[tokio::test]
    async fn view_renders_with_overlays() {
        let mut app = App::default();
        let _ = app.update(Message::PageScrolled {
            offset: 900.0,
            viewport_height: 800.0,
        });
        let _ = app.update(Message::Contact(contact::Message::Submit));
        assert!(app.notifications.current().is_some());
        let _element = app.view();
    }
}
