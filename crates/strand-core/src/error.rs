//! Error types for Strand containers.
//!
//! Organized by concern: bounds checking ([`IndexError`]), sequence
//! operations ([`SeqError`]), and growth configuration ([`ConfigError`]).

use std::error::Error;
use std::fmt;

/// A position, element index, or range fell outside the live region of a
/// sequence.
///
/// Raised before any storage is touched, so a sequence that returns an
/// `IndexError` is left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// An insertion position outside `[0, len]` (after negative-offset
    /// normalization).
    Position {
        /// The position as supplied by the caller.
        index: isize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
    /// An element index outside `[0, len)`.
    Element {
        /// The index as supplied by the caller.
        index: isize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
    /// A range `[start, start + count)` that extends past `len`.
    Range {
        /// First index of the range.
        start: usize,
        /// Number of elements in the range.
        count: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position { index, len } => {
                write!(f, "position {index} out of range for sequence of length {len}")
            }
            Self::Element { index, len } => {
                write!(f, "index {index} out of bounds for sequence of length {len}")
            }
            Self::Range { start, count, len } => {
                write!(
                    f,
                    "range of {count} elements starting at {start} exceeds sequence length {len}"
                )
            }
        }
    }
}

impl Error for IndexError {}

/// Errors from sequence mutation, reservation, and bulk algorithms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeqError {
    /// A bounds check failed.
    Index(IndexError),
    /// Growth would exceed the configured `max_capacity`.
    CapacityExceeded {
        /// Capacity that the operation needed.
        requested: usize,
        /// The configured ceiling.
        max: usize,
    },
}

impl SeqError {
    /// Returns `true` if this error came from a failed bounds check.
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(e) => write!(f, "index error: {e}"),
            Self::CapacityExceeded { requested, max } => {
                write!(
                    f,
                    "sequence capacity exceeded: requested {requested} slots, maximum {max}"
                )
            }
        }
    }
}

impl Error for SeqError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Index(e) => Some(e),
            Self::CapacityExceeded { .. } => None,
        }
    }
}

impl From<IndexError> for SeqError {
    fn from(e: IndexError) -> Self {
        Self::Index(e)
    }
}

/// Errors detected by [`GrowthConfig::validate()`](crate::GrowthConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Growth factor below 2 can never make progress from a full block.
    GrowthFactorTooSmall {
        /// The configured factor.
        configured: usize,
    },
    /// A zero ceiling would forbid every non-empty sequence.
    ZeroMaxCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GrowthFactorTooSmall { configured } => {
                write!(f, "growth factor must be at least 2, got {configured}")
            }
            Self::ZeroMaxCapacity => write!(f, "max_capacity must be greater than zero"),
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_error_display_names_bounds() {
        let e = IndexError::Element { index: 7, len: 3 };
        assert_eq!(e.to_string(), "index 7 out of bounds for sequence of length 3");

        let e = IndexError::Range {
            start: 2,
            count: 5,
            len: 4,
        };
        assert!(e.to_string().contains("starting at 2"));
    }

    #[test]
    fn seq_error_wraps_index_error_as_source() {
        let inner = IndexError::Position { index: -9, len: 4 };
        let e: SeqError = inner.clone().into();
        assert!(e.is_index_error());
        let source = e.source().unwrap();
        assert_eq!(source.to_string(), inner.to_string());
    }

    #[test]
    fn capacity_exceeded_has_no_source() {
        let e = SeqError::CapacityExceeded {
            requested: 64,
            max: 32,
        };
        assert!(!e.is_index_error());
        assert!(e.source().is_none());
        assert!(e.to_string().contains("maximum 32"));
    }
}
