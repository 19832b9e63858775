//! Error types for the typeahead core crate.

use std::fmt;

use crate::object::ObjectError;

/// The main error type for core operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Object-related error.
    Object(ObjectError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(err) => write!(f, "Object error: {err}"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Object(err) => Some(err),
        }
    }
}

impl From<ObjectError> for CoreError {
    fn from(err: ObjectError) -> Self {
        Self::Object(err)
    }
}

/// A specialized Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_source() {
        let err = CoreError::from(ObjectError::InvalidObjectId);
        assert!(err.to_string().contains("Object error"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
