// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all timing and geometry constants.
//!
//! This module serves as the single source of truth for the values used
//! across the page. Constants are organized by category.
//!
//! # Categories
//!
//! - **Counter**: Statistics counter animation
//! - **Toast**: Notification dwell and transitions
//! - **Scroll**: Navbar, scroll-to-top and anchor scrolling thresholds
//! - **Reveal**: Scroll-triggered card and chart animations
//! - **Contact**: Simulated form submission

// ==========================================================================
// Counter Defaults
// ==========================================================================

/// Total duration of a counter animation (in milliseconds).
pub const COUNTER_DURATION_MS: u64 = 2000;

/// Number of discrete steps a counter animation is split into.
pub const COUNTER_STEPS: u32 = 60;

/// Visible ratio at which a counter starts animating.
pub const COUNTER_VISIBILITY_THRESHOLD: f32 = 0.5;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Time a toast stays on screen before its exit transition starts.
pub const TOAST_DWELL_MS: u64 = 4000;

/// Duration of the toast entrance and exit transitions.
pub const TOAST_TRANSITION_MS: u64 = 300;

/// Horizontal distance (in pixels) a toast slides during its transitions.
pub const TOAST_SLIDE_DISTANCE: f32 = 100.0;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Scroll offset after which the navbar switches to its compact "scrolled" look.
pub const NAVBAR_SCROLLED_THRESHOLD: f32 = 50.0;

/// Scroll offset after which the scroll-to-top button is shown.
pub const SCROLL_TO_TOP_THRESHOLD: f32 = 500.0;

/// Extra gap kept between the navbar and an anchor target after scrolling.
pub const ANCHOR_SCROLL_GAP: f32 = 20.0;

/// Viewport width under which the navbar collapses into a menu toggle.
pub const MOBILE_BREAKPOINT: f32 = 900.0;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Visible ratio at which a feature card is revealed.
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Amount the viewport's bottom edge is pulled up for reveal detection.
pub const REVEAL_BOTTOM_MARGIN: f32 = 100.0;

/// Duration of the card reveal transition.
pub const REVEAL_TRANSITION_MS: u64 = 600;

/// Visible ratio at which the chart bars start growing.
pub const CHART_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Duration of the chart bar growth animation.
pub const CHART_GROW_MS: u64 = 1500;

/// Interval between frames while a transition is running.
pub const FRAME_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Contact Defaults
// ==========================================================================

/// Simulated delay of a contact form submission.
pub const CONTACT_SUBMIT_DELAY_MS: u64 = 2000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Counter validation
    assert!(COUNTER_STEPS > 0);
    assert!(COUNTER_DURATION_MS >= COUNTER_STEPS as u64);
    assert!(COUNTER_VISIBILITY_THRESHOLD > 0.0 && COUNTER_VISIBILITY_THRESHOLD <= 1.0);

    // Toast validation
    assert!(TOAST_TRANSITION_MS > 0);
    assert!(TOAST_DWELL_MS > TOAST_TRANSITION_MS);

    // Scroll validation
    assert!(SCROLL_TO_TOP_THRESHOLD > NAVBAR_SCROLLED_THRESHOLD);

    // Reveal validation
    assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD <= 1.0);
    assert!(CHART_VISIBILITY_THRESHOLD > 0.0 && CHART_VISIBILITY_THRESHOLD <= 1.0);
    assert!(FRAME_INTERVAL_MS < TOAST_TRANSITION_MS);
};
