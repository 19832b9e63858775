//! Core systems for the typeahead widget library.
//!
//! This crate provides the foundational components the widget crate builds on:
//!
//! - **Signal/Slot System**: Type-safe callback registration with direct,
//!   synchronous emission
//! - **Object Model**: Stable identifiers with parent-child ownership, used
//!   for press-target containment checks
//! - **Error Types**: Core error enum and `Result` alias
//! - **Logging**: `tracing` target and span name constants
//!
//! # Signal/Slot Example
//!
//! ```
//! use typeahead_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Object Registry Example
//!
//! ```
//! use typeahead_core::SharedObjectRegistry;
//!
//! struct Widget;
//!
//! let registry = SharedObjectRegistry::new();
//! let root = registry.register::<Widget>();
//! let input = registry.register::<Widget>();
//! registry.set_parent(input, Some(root)).unwrap();
//!
//! assert!(registry.is_descendant_of(input, root).unwrap());
//! ```

mod error;
pub mod logging;
pub mod object;
pub mod signal;

pub use error::{CoreError, Result};
pub use object::{
    Object, ObjectError, ObjectId, ObjectRegistry, ObjectResult, SharedObjectRegistry,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
