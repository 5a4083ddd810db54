//! Argument errors
//!
//! Two failure kinds reach a callback: an argument that was required but not
//! supplied, and an argument that was supplied with the wrong kind. Both carry
//! the zero-based index; messages number arguments from one, the way the
//! scripting side counts them.

use crate::value::ArgKind;
use thiserror::Error;

/// Failure reading an argument through `Arguments::check_*`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    /// Required argument not supplied (`index >= count`)
    #[error("bad argument #{position} (value expected)", position = .index.saturating_add(1))]
    IndexOutOfRange { index: usize, count: usize },

    /// Argument supplied with the wrong kind
    #[error("bad argument #{position} ({expected} expected, got {found})", position = .index.saturating_add(1))]
    TypeMismatch {
        index: usize,
        expected: ArgKind,
        found: ArgKind,
    },
}

impl ArgError {
    /// Zero-based index of the offending argument
    pub fn index(&self) -> usize {
        match self {
            ArgError::IndexOutOfRange { index, .. } | ArgError::TypeMismatch { index, .. } => {
                *index
            }
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ArgError::IndexOutOfRange { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, ArgError::TypeMismatch { .. })
    }
}

/// Failure capturing a call frame into an `ArgumentList`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The slot holds a value this layer does not marshal (table, function, ...)
    #[error("bad argument #{position} (unsupported type {type_name})", position = .index.saturating_add(1))]
    Unsupported {
        index: usize,
        type_name: &'static str,
    },
}

/// Result type for argument access
pub type ArgResult<T> = Result<T, ArgError>;
