// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! A notification shows as a colored card in the bottom-right corner. Only
//! one toast exists at a time: notifying again replaces the current toast
//! immediately. Each toast dwells for a fixed time, then slides out.
//!
//! # Components
//!
//! - [`notification`] - `Notification` request and `Severity` levels
//! - [`manager`] - `Manager` owning the single toast and its lifecycle
//! - [`toast`] - `Toast` state, transition progress and rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! let id = manager.notify(Notification::error("notification-contact-required"), Instant::now());
//!
//! // Schedule the continuations
//! Task::perform(tokio::time::sleep(manager::dwell()), move |()| NotificationMessage::BeginExit(id));
//! ```

pub mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::{view as view_toast, Phase, Toast, ToastId};
