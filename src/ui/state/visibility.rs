// SPDX-License-Identifier: MPL-2.0
//! Viewport intersection detection.
//!
//! Elements are described by their vertical [`Span`] in page coordinates.
//! After every scroll or resize the [`Observer`] compares each span against
//! the visible band of the page and reports the elements whose visible ratio
//! just reached the threshold.

use std::collections::BTreeMap;

/// Vertical extent of an element in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Insets applied to the viewport before intersecting.
///
/// Positive values shrink the visible band, so an element must scroll
/// further in before it counts as visible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RootMargin {
    pub top: f32,
    pub bottom: f32,
}

/// Fraction of `span` inside the band `[root_top, root_bottom]`.
///
/// Zero-height elements count as fully visible while their top lies inside
/// the band.
#[must_use]
pub fn visible_ratio(span: Span, root_top: f32, root_bottom: f32) -> f32 {
    if root_bottom <= root_top {
        return 0.0;
    }
    if span.height <= 0.0 {
        return if (root_top..=root_bottom).contains(&span.top) {
            1.0
        } else {
            0.0
        };
    }
    let visible = span.bottom().min(root_bottom) - span.top.max(root_top);
    (visible / span.height).clamp(0.0, 1.0)
}

#[derive(Debug, Clone)]
struct Target {
    span: Span,
    once: bool,
    intersecting: bool,
}

/// Tracks which observed elements are visible enough.
#[derive(Debug, Clone)]
pub struct Observer<K> {
    threshold: f32,
    margin: RootMargin,
    targets: BTreeMap<K, Target>,
}

impl<K: Ord + Copy> Observer<K> {
    /// Creates an observer reporting elements at least `threshold` visible.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            margin: RootMargin::default(),
            targets: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: RootMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Watches an element, reporting it every time it becomes visible.
    pub fn observe(&mut self, key: K, span: Span) {
        self.insert(key, span, false);
    }

    /// Watches an element until it becomes visible once.
    pub fn observe_once(&mut self, key: K, span: Span) {
        self.insert(key, span, true);
    }

    fn insert(&mut self, key: K, span: Span, once: bool) {
        self.targets.insert(
            key,
            Target {
                span,
                once,
                intersecting: false,
            },
        );
    }

    pub fn unobserve(&mut self, key: K) {
        self.targets.remove(&key);
    }

    #[must_use]
    pub fn is_observing(&self, key: K) -> bool {
        self.targets.contains_key(&key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Recomputes visibility for a viewport scrolled to `offset` and
    /// `viewport_height` tall.
    ///
    /// Returns the keys that crossed the threshold since the last update, in
    /// key order. Fire-once targets stop being observed after they fire.
    pub fn update(&mut self, offset: f32, viewport_height: f32) -> Vec<K> {
        let root_top = offset + self.margin.top;
        let root_bottom = offset + viewport_height - self.margin.bottom;

        let mut entered = Vec::new();
        for (key, target) in &mut self.targets {
            let ratio = visible_ratio(target.span, root_top, root_bottom);
            let intersecting = ratio > 0.0 && ratio >= self.threshold;
            if intersecting && !target.intersecting {
                entered.push(*key);
            }
            target.intersecting = intersecting;
        }

        self.targets
            .retain(|key, target| !(target.once && entered.contains(key)));
        entered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_of_partially_visible_span() {
        let span = Span::new(100.0, 200.0);
        assert_eq!(visible_ratio(span, 0.0, 200.0), 0.5);
        assert_eq!(visible_ratio(span, 0.0, 100.0), 0.0);
        assert_eq!(visible_ratio(span, 0.0, 1000.0), 1.0);
        assert_eq!(visible_ratio(span, 250.0, 1000.0), 0.25);
    }

    #[test]
    fn zero_height_span_is_visible_inside_root() {
        let span = Span::new(50.0, 0.0);
        assert_eq!(visible_ratio(span, 0.0, 100.0), 1.0);
        assert_eq!(visible_ratio(span, 60.0, 100.0), 0.0);
    }

    #[test]
    fn collapsed_root_shows_nothing() {
        assert_eq!(visible_ratio(Span::new(0.0, 10.0), 50.0, 40.0), 0.0);
    }

    #[test]
    fn reports_threshold_crossing_once_per_entry() {
        let mut observer = Observer::new(0.5);
        observer.observe(1, Span::new(1000.0, 200.0));

        assert!(observer.update(0.0, 800.0).is_empty());
        assert_eq!(observer.update(400.0, 800.0), vec![1]);
        assert!(observer.update(450.0, 800.0).is_empty());
        assert!(observer.update(0.0, 800.0).is_empty());
        assert_eq!(observer.update(400.0, 800.0), vec![1]);
    }

    #[test]
    fn fire_once_target_never_fires_again() {
        let mut observer = Observer::new(0.5);
        observer.observe_once('a', Span::new(1000.0, 200.0));

        assert_eq!(observer.update(500.0, 800.0), vec!['a']);
        assert!(!observer.is_observing('a'));
        assert!(observer.update(0.0, 800.0).is_empty());
        assert!(observer.update(500.0, 800.0).is_empty());
        assert!(observer.is_empty());
    }

    #[test]
    fn bottom_margin_delays_reveal() {
        let mut observer = Observer::new(0.1).with_margin(RootMargin {
            top: 0.0,
            bottom: 100.0,
        });
        observer.observe_once(0, Span::new(700.0, 200.0));

        // Without the margin 100px (50%) would be visible; with it, none.
        assert!(observer.update(0.0, 800.0).is_empty());
        assert_eq!(observer.update(40.0, 800.0), vec![0]);
    }

    #[test]
    fn unobserve_stops_reporting() {
        let mut observer = Observer::new(0.5);
        observer.observe(3, Span::new(0.0, 100.0));
        observer.unobserve(3);
        assert!(observer.update(0.0, 800.0).is_empty());
    }
}
