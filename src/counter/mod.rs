// SPDX-License-Identifier: MPL-2.0
//! Animated statistics counters.
//!
//! A counter element shows a formatted figure such as `+50K` or `99.9%`.
//! When it first scrolls into view, the figure is replayed from zero up to
//! its value in [`COUNTER_STEPS`](crate::config::COUNTER_STEPS) steps, keeping
//! the source formatting at every step.
//!
//! - [`format`] parses display texts and re-applies their formatting
//! - [`animation`] interpolates values and owns the running animations
//!
//! # Examples
//!
//! ```
//! use fleet_pro::counter::{Animator, FormattedNumber};
//!
//! let number: FormattedNumber = "+50K".parse().unwrap();
//! assert_eq!(number.format(25.0), "+25K");
//!
//! let mut animator = Animator::new();
//! animator.insert("vehicles", "+500");
//! let _handle = animator.start("vehicles").unwrap();
//! animator.tick();
//! assert_eq!(animator.text("vehicles"), Some("+8"));
//! ```

pub mod animation;
pub mod format;

pub use animation::{step_interval, AnimationHandle, Animator, CounterAnimation};
pub use format::{parse, FormattedNumber, ParseError};
