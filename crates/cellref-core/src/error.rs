//! Error types for cellref-core

use std::fmt;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Which coordinate a [`Error::Domain`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Coarse classification of an [`Error`], looking through position wrappers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input does not match the textual or structural grammar
    Validation,
    /// Well-formed input whose numeric value is outside its domain
    Domain,
    /// Value count does not match cell count
    Mismatch,
}

/// Errors that can occur in cellref-core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input does not match the required grammar
    #[error("Invalid reference '{input}': {reason}")]
    Validation { input: String, reason: &'static str },

    /// Row or column outside its declared domain
    #[error("{axis} {value} out of bounds (expected 1..={max}) in '{input}'")]
    Domain {
        input: String,
        axis: Axis,
        value: u64,
        max: u64,
    },

    /// A value list does not line up with the expanded cells
    #[error("{values} value(s) supplied for {cells} cell(s)")]
    Mismatch { cells: usize, values: usize },

    /// Failure of one element of a batch operation
    #[error("element {index}: {source}")]
    AtIndex {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn validation<S: Into<String>>(input: S, reason: &'static str) -> Self {
        Error::Validation {
            input: input.into(),
            reason,
        }
    }

    pub(crate) fn domain<S: Into<String>>(input: S, axis: Axis, value: u64, max: u64) -> Self {
        Error::Domain {
            input: input.into(),
            axis,
            value,
            max,
        }
    }

    /// Wrap this error with the position of the batch element that produced it
    pub fn at_index(self, index: usize) -> Self {
        Error::AtIndex {
            index,
            source: Box::new(self),
        }
    }

    /// The kind of the underlying failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::Validation,
            Error::Domain { .. } => ErrorKind::Domain,
            Error::Mismatch { .. } => ErrorKind::Mismatch,
            Error::AtIndex { source, .. } => source.kind(),
        }
    }

    /// Position of the failing element, for errors raised by batch operations
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::AtIndex { index, .. } => Some(*index),
            _ => None,
        }
    }

    /// The offending input text, if the error carries one
    pub fn input(&self) -> Option<&str> {
        match self {
            Error::Validation { input, .. } | Error::Domain { input, .. } => Some(input.as_str()),
            Error::Mismatch { .. } => None,
            Error::AtIndex { source, .. } => source.input(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_looks_through_index() {
        let err = Error::validation("ZZZZ1", "too many column letters").at_index(3);
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.index(), Some(3));
        assert_eq!(err.input(), Some("ZZZZ1"));
    }

    #[test]
    fn test_display() {
        let err = Error::domain("0", Axis::Column, 0, 18_278);
        assert_eq!(
            err.to_string(),
            "column 0 out of bounds (expected 1..=18278) in '0'"
        );

        let err = Error::Mismatch {
            cells: 4,
            values: 3,
        };
        assert_eq!(err.to_string(), "3 value(s) supplied for 4 cell(s)");
        assert_eq!(err.index(), None);
        assert_eq!(err.input(), None);
    }
}
