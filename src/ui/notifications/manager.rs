// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns at most one toast. A new notification replaces the
//! current toast outright, without an exit transition. The caller schedules
//! the timed continuations ([`Message::BeginExit`] after the dwell time,
//! [`Message::Remove`] after the exit transition); both are guarded by the
//! toast id, so continuations of a replaced toast do nothing.

use super::notification::Notification;
use super::toast::{Toast, ToastId};
use crate::config::{TOAST_DWELL_MS, TOAST_TRANSITION_MS};
use std::time::{Duration, Instant};

/// Timed continuations of a toast's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The dwell time elapsed: start sliding out.
    BeginExit(ToastId),
    /// The exit transition finished: remove the toast.
    Remove(ToastId),
}

/// Delay between showing a toast and starting its exit.
#[must_use]
pub fn dwell() -> Duration {
    Duration::from_millis(TOAST_DWELL_MS)
}

/// Delay between starting a toast's exit and removing it.
#[must_use]
pub fn exit_duration() -> Duration {
    Duration::from_millis(TOAST_TRANSITION_MS)
}

/// Holds the single toast currently on screen.
#[derive(Debug, Default)]
pub struct Manager {
    current: Option<Toast>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a notification, replacing any toast already on screen.
    ///
    /// Returns the id the caller should pass to the timed continuations.
    pub fn notify(&mut self, notification: Notification, now: Instant) -> ToastId {
        if let Some(previous) = self.current.take() {
            tracing::debug!(id = ?previous.id(), "toast replaced");
        }
        let toast = Toast::new(notification, now);
        let id = toast.id();
        tracing::debug!(?id, key = toast.notification().message_key(), "toast shown");
        self.current = Some(toast);
        id
    }

    /// Starts the exit transition of the toast with `id`.
    ///
    /// Returns `false` if that toast is no longer on screen.
    pub fn begin_exit(&mut self, id: ToastId, now: Instant) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id() == id => {
                toast.begin_exit(now);
                true
            }
            _ => false,
        }
    }

    /// Removes the toast with `id`.
    ///
    /// Returns `false` if that toast was already replaced or removed.
    pub fn remove(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|toast| toast.id() == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// Applies a timed continuation. Returns whether it affected the current toast.
    pub fn handle_message(&mut self, message: Message, now: Instant) -> bool {
        match message {
            Message::BeginExit(id) => self.begin_exit(id, now),
            Message::Remove(id) => self.remove(id),
        }
    }

    /// Returns the toast currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        self.current.is_some()
    }

    /// Whether the current toast is sliding in or out at `now`.
    #[must_use]
    pub fn is_transitioning(&self, now: Instant) -> bool {
        self.current
            .as_ref()
            .is_some_and(|toast| toast.is_transitioning(now))
    }
}
