// SPDX-License-Identifier: MPL-2.0
//! `fleet_pro` is the interactive landing page of the Fleet Pro logistics
//! platform, built with the Iced GUI framework.
//!
//! It renders a single scrolling page (hero, features, numbers, services,
//! FAQ, contact form) with animated counters, scroll-triggered reveals,
//! toast notifications and a bilingual interface localized with Fluent.

pub mod app;
pub mod config;
pub mod counter;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
