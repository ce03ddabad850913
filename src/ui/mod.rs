// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page
//!
//! - [`page`] - Section order, heights and anchor geometry of the page
//! - [`sections`] - One component per page section (hero, features, stats, ...)
//! - [`navbar`] - Navigation bar with the compact dropdown menu
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state (visibility observers, smooth scrolling)
//! - [`styles`] - Centralized styling (buttons, containers, text inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod design_tokens;
pub mod icons;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod sections;
pub mod state;
pub mod styles;
pub mod theming;
