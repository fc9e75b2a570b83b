//! Position arguments and the shared bounds checks.
//!
//! Every positional entry point of a sequence accepts an `impl Position`.
//! Signed positions count from the end when negative (`-1` is the last
//! element, `-len` the first); the normalization lives here and nowhere
//! else, so all operations agree on it.

use crate::error::IndexError;

/// An integer usable as a sequence position.
pub trait Position: Copy {
    /// Map this position onto `[0, ..)` for a sequence of length `len`.
    ///
    /// Negative values are offset by `len`. Returns `None` when the
    /// position is still negative after the offset.
    fn normalize(self, len: usize) -> Option<usize>;

    /// The position as the caller wrote it, for error reporting.
    fn raw(self) -> isize;
}

macro_rules! impl_unsigned_position {
    ($($t:ty),*) => {$(
        impl Position for $t {
            #[inline]
            fn normalize(self, _len: usize) -> Option<usize> {
                usize::try_from(self).ok()
            }

            #[inline]
            fn raw(self) -> isize {
                isize::try_from(self).unwrap_or(isize::MAX)
            }
        }
    )*};
}

macro_rules! impl_signed_position {
    ($($t:ty),*) => {$(
        impl Position for $t {
            #[inline]
            fn normalize(self, len: usize) -> Option<usize> {
                let value = isize::try_from(self).ok()?;
                if value >= 0 {
                    return usize::try_from(value).ok();
                }
                let back = value.unsigned_abs();
                len.checked_sub(back)
            }

            #[inline]
            fn raw(self) -> isize {
                isize::try_from(self).unwrap_or(if self < 0 { isize::MIN } else { isize::MAX })
            }
        }
    )*};
}

impl_unsigned_position!(usize, u32);
impl_signed_position!(isize, i32, i64);

/// Resolve an insertion position: valid results lie in `[0, len]`.
pub fn resolve_position<P: Position>(pos: P, len: usize) -> Result<usize, IndexError> {
    match pos.normalize(len) {
        Some(i) if i <= len => Ok(i),
        _ => Err(IndexError::Position {
            index: pos.raw(),
            len,
        }),
    }
}

/// Resolve an element index: valid results lie in `[0, len)`.
pub fn resolve_element<P: Position>(pos: P, len: usize) -> Result<usize, IndexError> {
    match pos.normalize(len) {
        Some(i) if i < len => Ok(i),
        _ => Err(IndexError::Element {
            index: pos.raw(),
            len,
        }),
    }
}

/// Check that `[start, start + count)` lies within `[0, len]`.
pub fn check_range(start: usize, count: usize, len: usize) -> Result<(), IndexError> {
    match start.checked_add(count) {
        Some(end) if end <= len => Ok(()),
        _ => Err(IndexError::Range { start, count, len }),
    }
}
