//! Logging facilities for the typeahead library.
//!
//! Instrumentation goes through the `tracing` crate. To see logs, install a
//! tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```

/// Span names used throughout the library for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Signal emission span.
    pub const SIGNAL: &str = "typeahead::signal";
    /// Object lifecycle span.
    pub const OBJECT: &str = "typeahead::object";
    /// Widget event handling span.
    pub const WIDGET: &str = "typeahead::widget";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "typeahead_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "typeahead_core::signal";
    /// Object model target.
    pub const OBJECT: &str = "typeahead_core::object";
    /// Widget crate target.
    pub const WIDGET: &str = "typeahead::widget";
}
