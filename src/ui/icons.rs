// SPDX-License-Identifier: MPL-2.0
//! Centralized module for the page's SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`, so every call after the first is a cheap clone.
//! The sources are drawn as black strokes; callers tint them through the
//! `svg::Style` color.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `bars` not `open_menu`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Status & Feedback Icons
// =============================================================================

define_icon!(check_circle, "check_circle.svg", "Check mark inside a circle.");
define_icon!(times_circle, "times_circle.svg", "Cross inside a circle.");
define_icon!(info_circle, "info_circle.svg", "Letter i inside a circle.");

// =============================================================================
// Navigation Icons
// =============================================================================

define_icon!(bars, "bars.svg", "Three horizontal bars (hamburger).");
define_icon!(xmark, "xmark.svg", "Diagonal cross.");
define_icon!(arrow_up, "arrow_up.svg", "Arrow pointing up.");
define_icon!(chevron_down, "chevron_down.svg", "Chevron pointing down.");
define_icon!(chevron_up, "chevron_up.svg", "Chevron pointing up.");
define_icon!(globe, "globe.svg", "Globe with meridian and equator.");

// =============================================================================
// Content Icons
// =============================================================================

define_icon!(truck, "truck.svg", "Delivery truck seen from the side.");
define_icon!(map_pin, "map_pin.svg", "Map location pin.");
define_icon!(route, "route.svg", "Winding route between two points.");
define_icon!(fuel, "fuel.svg", "Fuel pump.");
define_icon!(wrench, "wrench.svg", "Wrench.");
define_icon!(users, "users.svg", "Two people.");
define_icon!(chart_bar, "chart_bar.svg", "Three ascending bars.");

/// Sets an icon to a square size.
#[must_use]
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
