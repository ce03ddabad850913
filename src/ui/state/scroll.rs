// SPDX-License-Identifier: MPL-2.0
//! Smooth scrolling between two page offsets.

use std::time::{Duration, Instant};

/// Duration of a smooth scroll.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(450);

/// Offsets closer than this to the commanded position count as ours.
const DRIFT_TOLERANCE: f32 = 1.0;

/// An in-flight smooth scroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    last_commanded: f32,
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant) -> Self {
        Self {
            from,
            to,
            started_at,
            last_commanded: from,
        }
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset the page should be at `now`.
    #[must_use]
    pub fn position(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let t = (elapsed.as_secs_f32() / SMOOTH_SCROLL_DURATION.as_secs_f32()).min(1.0);
        self.from + (self.to - self.from) * ease_in_out(t)
    }

    /// Advances to `now` and returns the offset to scroll to.
    pub fn step(&mut self, now: Instant) -> f32 {
        self.last_commanded = self.position(now);
        self.last_commanded
    }

    #[must_use]
    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= SMOOTH_SCROLL_DURATION
    }

    /// Whether a reported offset departs from what this animation commanded,
    /// meaning the user scrolled in the meantime.
    #[must_use]
    pub fn is_interrupted_by(&self, reported_offset: f32) -> bool {
        (reported_offset - self.last_commanded).abs() > DRIFT_TOLERANCE
    }
}
