//! Prelude module for the typeahead widget.
//!
//! This module re-exports the most commonly used types for convenient
//! importing:
//!
//! ```
//! use typeahead::prelude::*;
//! ```

// ============================================================================
// Widget
// ============================================================================

pub use crate::typeahead::{NavDirection, Typeahead};
pub use crate::window_watch::WindowWatcher;

// ============================================================================
// Events
// ============================================================================

pub use crate::events::{
    FocusInEvent, FocusReason, Key, KeyPressEvent, KeyboardModifiers, MouseButton, PressEvent,
    TextChangeEvent, WindowPressEvent,
};

// ============================================================================
// Data Sources
// ============================================================================

pub use crate::model::{CaseSensitivity, HintProvider, OptionListModel, PrefixHint, StringListModel};

// ============================================================================
// Text Direction
// ============================================================================

pub use crate::direction::{TextDirection, detect_base_direction};

// ============================================================================
// Core Re-exports
// ============================================================================

pub use typeahead_core::{Object, ObjectId, SharedObjectRegistry, Signal};
