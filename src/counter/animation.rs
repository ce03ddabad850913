// SPDX-License-Identifier: MPL-2.0
//! Stepwise counter animations and the animator that owns them.

use super::format::{self, FormattedNumber};
use crate::config::{COUNTER_DURATION_MS, COUNTER_STEPS};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::time::Duration;

/// Interval between two counter ticks (total duration split into equal steps).
#[must_use]
pub fn step_interval() -> Duration {
    Duration::from_millis(COUNTER_DURATION_MS) / COUNTER_STEPS
}

/// Interpolation of one counter from zero up to its target.
#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: FormattedNumber,
    elapsed_steps: u32,
    total_steps: u32,
}

impl CounterAnimation {
    #[must_use]
    pub fn new(target: FormattedNumber) -> Self {
        Self {
            target,
            elapsed_steps: 0,
            total_steps: COUNTER_STEPS,
        }
    }

    #[must_use]
    pub fn target(&self) -> &FormattedNumber {
        &self.target
    }

    #[must_use]
    pub fn elapsed_steps(&self) -> u32 {
        self.elapsed_steps
    }

    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed_steps >= self.total_steps
    }

    /// Advances one step and returns the text to display.
    ///
    /// The last step lands on the target magnitude exactly. Returns `None`
    /// once the animation has finished.
    pub fn tick(&mut self) -> Option<String> {
        if self.is_finished() {
            return None;
        }
        self.elapsed_steps += 1;
        Some(self.target.format(self.current_value()))
    }

    fn current_value(&self) -> f64 {
        if self.is_finished() {
            self.target.magnitude()
        } else {
            f64::from(self.elapsed_steps) / f64::from(self.total_steps) * self.target.magnitude()
        }
    }
}

/// Owned reference to a running animation.
///
/// Each start hands out a fresh generation, so a handle kept from an earlier
/// run cannot cancel the animation that replaced it.
#[must_use = "dropping the handle leaves no way to cancel the animation"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationHandle<K> {
    element: K,
    generation: u64,
}

impl<K: Copy> AnimationHandle<K> {
    pub fn element(&self) -> K {
        self.element
    }
}

#[derive(Debug, Clone)]
struct Running {
    animation: CounterAnimation,
    generation: u64,
}

/// Display texts of counter elements and the animations driving them.
#[derive(Debug, Clone)]
pub struct Animator<K> {
    texts: BTreeMap<K, String>,
    running: BTreeMap<K, Running>,
    next_generation: u64,
}

impl<K> Default for Animator<K> {
    fn default() -> Self {
        Self {
            texts: BTreeMap::new(),
            running: BTreeMap::new(),
            next_generation: 0,
        }
    }
}

impl<K: Ord + Copy + Debug> Animator<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the static text of an element, cancelling any animation on it.
    pub fn insert(&mut self, element: K, text: impl Into<String>) {
        self.running.remove(&element);
        self.texts.insert(element, text.into());
    }

    /// Current display text of an element.
    #[must_use]
    pub fn text(&self, element: K) -> Option<&str> {
        self.texts.get(&element).map(String::as_str)
    }

    /// Starts animating an element from zero to the number in its text.
    ///
    /// Returns `None` (leaving the text untouched) when the element is unknown
    /// or its text is not a formatted number.
    pub fn start(&mut self, element: K) -> Option<AnimationHandle<K>> {
        let text = self.texts.get(&element)?;
        let target = match format::parse(text) {
            Ok(target) => target,
            Err(err) => {
                tracing::debug!(?element, %err, "counter left static");
                return None;
            }
        };

        let generation = self.next_generation;
        self.next_generation += 1;
        self.running.insert(
            element,
            Running {
                animation: CounterAnimation::new(target),
                generation,
            },
        );
        Some(AnimationHandle {
            element,
            generation,
        })
    }

    /// Advances every running animation by one step.
    ///
    /// Finished animations are released. Returns the elements whose text
    /// changed.
    pub fn tick(&mut self) -> Vec<K> {
        let mut changed = Vec::with_capacity(self.running.len());
        for (element, running) in &mut self.running {
            if let Some(text) = running.animation.tick() {
                self.texts.insert(*element, text);
                changed.push(*element);
            }
        }
        self.running
            .retain(|_, running| !running.animation.is_finished());
        changed
    }

    /// Stops the animation a handle refers to, keeping the current text.
    ///
    /// Returns `false` when the animation already finished or was replaced.
    pub fn cancel(&mut self, handle: AnimationHandle<K>) -> bool {
        match self.running.get(&handle.element) {
            Some(running) if running.generation == handle.generation => {
                self.running.remove(&handle.element);
                true
            }
            _ => false,
        }
    }

    /// Forgets an element and any animation running on it.
    pub fn remove_element(&mut self, element: K) {
        self.running.remove(&element);
        self.texts.remove(&element);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.running.is_empty()
    }

    #[must_use]
    pub fn is_running(&self, element: K) -> bool {
        self.running.contains_key(&element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animation(text: &str) -> CounterAnimation {
        CounterAnimation::new(format::parse(text).expect("valid counter text"))
    }

    fn run_to_end(animation: &mut CounterAnimation) -> Vec<String> {
        std::iter::from_fn(|| animation.tick()).collect()
    }

    #[test]
    fn step_interval_splits_duration_evenly() {
        assert_eq!(step_interval() * COUNTER_STEPS, Duration::from_millis(2000));
        assert_eq!(step_interval().as_millis(), 33);
    }

    #[test]
    fn animation_ends_on_exact_target() {
        let mut anim = animation("+50K");
        let frames = run_to_end(&mut anim);
        assert_eq!(frames.len(), 60);
        assert_eq!(frames.first().map(String::as_str), Some("+1K"));
        assert_eq!(frames.last().map(String::as_str), Some("+50K"));
        assert!(anim.is_finished());
        assert_eq!(anim.tick(), None);
    }

    #[test]
    fn decimal_counter_is_halfway_at_step_thirty() {
        let mut anim = animation("99.9%");
        let frames = run_to_end(&mut anim);
        assert_eq!(frames[29], "50.0%");
        assert_eq!(frames[59], "99.9%");
    }

    #[test]
    fn zero_counter_stays_at_zero() {
        let mut anim = animation("0");
        assert!(run_to_end(&mut anim).iter().all(|frame| frame == "0"));
    }

    #[test]
    fn animator_writes_frames_into_element_text() {
        let mut animator = Animator::new();
        animator.insert(1_u8, "+500");
        let handle = animator.start(1).expect("numeric text");
        assert_eq!(handle.element(), 1);
        assert!(animator.is_animating());

        for _ in 0..30 {
            assert_eq!(animator.tick(), vec![1]);
        }
        assert_eq!(animator.text(1), Some("+250"));

        for _ in 0..30 {
            animator.tick();
        }
        assert_eq!(animator.text(1), Some("+500"));
        assert!(!animator.is_animating());
        assert!(animator.tick().is_empty());
    }

    #[test]
    fn non_numeric_text_is_left_alone() {
        let mut animator = Animator::new();
        animator.insert(7_u8, "24/7");
        assert!(animator.start(7).is_none());
        assert!(!animator.is_animating());
        assert_eq!(animator.text(7), Some("24/7"));
    }

    #[test]
    fn unknown_element_does_not_start() {
        let mut animator: Animator<u8> = Animator::new();
        assert!(animator.start(3).is_none());
    }

    #[test]
    fn cancel_keeps_intermediate_text() {
        let mut animator = Animator::new();
        animator.insert(0_u8, "60");
        let handle = animator.start(0).unwrap();
        animator.tick();
        assert!(animator.cancel(handle));
        assert!(!animator.is_running(0));
        assert_eq!(animator.text(0), Some("1"));
        assert!(!animator.cancel(handle));
    }

    #[test]
    fn stale_handle_cannot_cancel_replacement() {
        let mut animator = Animator::new();
        animator.insert(0_u8, "10");
        let first = animator.start(0).unwrap();
        animator.insert(0, "20");
        let second = animator.start(0).unwrap();

        assert!(!animator.cancel(first));
        assert!(animator.is_running(0));
        assert!(animator.cancel(second));
    }

    #[test]
    fn removing_element_disposes_animation() {
        let mut animator = Animator::new();
        animator.insert(2_u8, "99.9%");
        let handle = animator.start(2).unwrap();
        animator.tick();
        animator.remove_element(2);

        assert!(!animator.is_animating());
        assert_eq!(animator.text(2), None);
        assert!(!animator.cancel(handle));
    }

    #[test]
    fn independent_elements_animate_together() {
        let mut animator = Animator::new();
        animator.insert('a', "+500");
        animator.insert('b', "99.9%");
        let _a = animator.start('a').unwrap();
        let _b = animator.start('b').unwrap();

        assert_eq!(animator.tick(), vec!['a', 'b']);
        assert_eq!(animator.text('a'), Some("+8"));
        assert_eq!(animator.text('b'), Some("1.7%"));
    }
}
