//! Typeahead - a text-input widget with an inline completion hint and an
//! option dropdown.
//!
//! As the user types, the widget asks a caller-supplied [`HintProvider`] for
//! a completion of the current value and shows the uncompleted remainder
//! inline; a dropdown of [`OptionListModel`] entries can be navigated with
//! the vertical arrows and accepted by mouse. Hint acceptance is
//! bidirectional-text aware: the arrow that means "forward" for the typed
//! script is the one that completes.
//!
//! Rendering is out of scope. The widget owns the state machine (value,
//! visibility flags, selected index, caret); a host drives it with events
//! and reads it back when painting.
//!
//! # Example
//!
//! ```
//! use typeahead::prelude::*;
//!
//! let mut widget = Typeahead::new()
//!     .with_hint_provider(PrefixHint::new(vec!["ezequiel".to_string()]))
//!     .with_options(StringListModel::from(vec!["ezequiel", "ezra"]));
//!
//! widget.handle_text_change(&TextChangeEvent::new("eze"));
//! assert_eq!(widget.hint_remainder(), Some("quiel"));
//!
//! let mut tab = KeyPressEvent::new(Key::Tab, KeyboardModifiers::NONE);
//! widget.handle_key_press(&mut tab);
//! assert!(tab.base.is_accepted());
//! ```

pub mod direction;
pub mod events;
pub mod hint;
pub mod model;
pub mod prelude;
mod typeahead;
pub mod window_watch;

pub use direction::{TextDirection, detect_base_direction};
pub use events::{
    EventBase, FocusInEvent, FocusReason, Key, KeyPressEvent, KeyboardModifiers, MouseButton,
    PressEvent, TextChangeEvent, WindowPressEvent,
};
pub use model::{CaseSensitivity, HintProvider, OptionListModel, PrefixHint, StringListModel};
pub use typeahead::{NavDirection, Typeahead};
pub use window_watch::WindowWatcher;

// Re-export the core crate's surface that appears in this crate's API.
pub use typeahead_core::{
    ConnectionGuard, ConnectionId, Object, ObjectId, SharedObjectRegistry, Signal,
};
