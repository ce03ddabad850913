// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` request and the `Severity` enum
//! that decides how the resulting toast looks.

use crate::ui::design_tokens::palette;
use crate::ui::icons;
use iced::widget::Svg;
use iced::Color;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, check mark).
    #[default]
    Success,
    /// Something went wrong or input was rejected (red, cross).
    Error,
    /// Neutral information (blue, "i").
    Info,
}

impl Severity {
    /// Returns the toast background color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::TOAST_SUCCESS,
            Severity::Error => palette::TOAST_ERROR,
            Severity::Info => palette::TOAST_INFO,
        }
    }

    /// Returns the icon shown at the start of the toast.
    #[must_use]
    pub fn icon(self) -> Svg<'static> {
        match self {
            Severity::Success => icons::check_circle(),
            Severity::Error => icons::times_circle(),
            Severity::Info => icons::info_circle(),
        }
    }
}

/// A request to show a message to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity level (determines color and icon).
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time, so a language switch also re-translates the toast.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    /// Creates a notification with the default severity.
    pub fn message(message_key: impl Into<String>) -> Self {
        Self::new(Severity::default(), message_key)
    }

    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }
}
