// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains UI state logic that is independent of any widget,
//! so it can be tested without rendering.

pub mod scroll;
pub mod visibility;

// Re-export commonly used types for convenience
pub use scroll::ScrollAnimation;
pub use visibility::{Observer, RootMargin, Span};
