// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections::{contact, faq, hero, services};
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Services(services::Message),
    Faq(faq::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved or was resized.
    PageScrolled {
        offset: f32,
        viewport_height: f32,
    },
    WindowResized(Size),
    /// Cursor position, tracked while the compact menu is open.
    CursorMoved(Point),
    /// A click that no widget handled, while the compact menu is open.
    PointerPressed,
    /// One step of the running counter animations.
    CounterTick,
    /// Redraw tick while a transition runs.
    Frame(Instant),
    ScrollToTop,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ar`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FLEET_PRO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
