//! Linear predicate search.
//!
//! Absence is reported as `Ok(None)`, never as an error. Only a start
//! bound outside the searchable region is an
//! [`IndexError`](strand_core::IndexError): `[0, len]` for a forward scan,
//! `[0, len)` for a backward one.

use strand_core::{resolve_element, resolve_position, SeqError};

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Index of the first element at or after `start` that matches
    /// `predicate`.
    pub fn find<F>(&self, predicate: F, start: usize) -> Result<Option<usize>, SeqError>
    where
        F: FnMut(&T) -> bool,
    {
        let start = resolve_position(start, self.len)?;
        Ok(self.scan_forward(start, predicate))
    }

    /// Index of the last element at or before `start` that matches
    /// `predicate`.
    ///
    /// `start` defaults to `len() - 1`, searching the whole sequence from
    /// the back; an empty sequence then finds nothing. An explicit `start`
    /// must name an element.
    pub fn find_last<F>(&self, predicate: F, start: Option<usize>) -> Result<Option<usize>, SeqError>
    where
        F: FnMut(&T) -> bool,
    {
        let start = match start {
            Some(start) => resolve_element(start, self.len)?,
            None if self.len == 0 => return Ok(None),
            None => self.len - 1,
        };
        Ok(self.scan_backward(start, predicate))
    }

    /// Returns `true` if every element matches. Stops at the first miss.
    pub fn all<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().all(|x| predicate(x))
    }

    /// Returns `true` if any element matches. Stops at the first hit.
    pub fn any<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(|x| predicate(x))
    }

    /// Scan `[start, len)` forward. An empty range finds nothing.
    pub(crate) fn scan_forward<F>(&self, start: usize, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        (start..self.len).find(|&i| predicate(self.live(i)))
    }

    /// Scan `[0, start]` backward, clipped to the live region. An empty
    /// sequence finds nothing.
    pub(crate) fn scan_backward<F>(&self, start: usize, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        let end = start.saturating_add(1).min(self.len);
        (0..end).rev().find(|&i| predicate(self.live(i)))
    }
}
