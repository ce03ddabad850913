// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native window and mouse events are routed to top-level messages, and
//! timers run only while something on the page is moving.

use super::Message;
use crate::config::FRAME_INTERVAL_MS;
use crate::counter::animation::step_interval;
use iced::{event, mouse, time, window, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
///
/// Window resizes are always routed. While the compact menu is open, cursor
/// moves and mouse presses are routed too, whether or not a widget captured
/// them, so a press anywhere outside the menu can close it.
pub fn create_event_subscription(menu_open: bool) -> Subscription<Message> {
    if menu_open {
        event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::CursorMoved(position))
            }
            event::Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::PointerPressed),
            _ => None,
        })
    } else {
        event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        })
    }
}

/// Creates the counter step timer, running while any counter animates.
pub fn create_counter_subscription(counting: bool) -> Subscription<Message> {
    if counting {
        time::every(step_interval()).map(|_| Message::CounterTick)
    } else {
        Subscription::none()
    }
}

/// Creates the frame timer that drives transitions and smooth scrolling.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(FRAME_INTERVAL_MS)).map(Message::Frame)
    } else {
        Subscription::none()
    }
}
