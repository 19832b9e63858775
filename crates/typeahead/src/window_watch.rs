//! Window-level press observation for outside-click dismissal.
//!
//! The typeahead closes its hint and dropdown when the user presses
//! somewhere outside of it. The widget cannot see those presses through its
//! own event handlers, so the host owns a [`WindowWatcher`] and forwards
//! every window-level press into it; mounted widgets subscribe and decide
//! for themselves whether the press was inside their subtree.
//!
//! Subscriptions are scoped: a widget connects with
//! [`Signal::connect_scoped`](typeahead_core::Signal::connect_scoped) and
//! keeps the returned guard for as long as it is mounted, so the
//! window-level listener lives exactly as long as the widget does.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use typeahead::{Typeahead, WindowWatcher, WindowPressEvent};
//!
//! let watcher = WindowWatcher::new();
//! let widget = Arc::new(Mutex::new(Typeahead::new()));
//!
//! // Mount: route window presses into the widget for its lifetime.
//! let widget_slot = widget.clone();
//! let _guard = watcher.pressed.connect_scoped(move |event| {
//!     widget_slot.lock().unwrap().handle_window_press(event);
//! });
//!
//! // Host forwards a press that hit nothing the registry knows about.
//! watcher.dispatch(None);
//! ```

use typeahead_core::{ObjectId, Signal};

use crate::events::WindowPressEvent;

/// Fan-out point for window-level presses.
///
/// Hosts construct one watcher per window, forward every press into
/// [`dispatch`](Self::dispatch), and hand the watcher to widgets at mount
/// time so they can subscribe.
pub struct WindowWatcher {
    /// Signal emitted for every window-level press.
    pub pressed: Signal<WindowPressEvent>,
}

impl Default for WindowWatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowWatcher {
    /// Create a new watcher with no subscribers.
    pub fn new() -> Self {
        Self {
            pressed: Signal::new(),
        }
    }

    /// Forward a window-level press to all subscribed widgets.
    ///
    /// `target` is the registered object the press landed on, or `None` when
    /// the press hit nothing the registry knows about.
    pub fn dispatch(&self, target: Option<ObjectId>) {
        tracing::trace!(target: "typeahead::widget", ?target, "window press");
        self.pressed.emit(WindowPressEvent::new(target));
    }
}
