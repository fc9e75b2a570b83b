//! Capacity management: when and how far the storage block grows.
//!
//! Mutations call `expand` to guarantee room for pending elements.
//! Growth is geometric (doubling by default) so that a run of
//! single-element insertions reallocates only O(log n) times.
//! Explicit [`reserve`](Sequence::reserve) and [`shrink`](Sequence::shrink)
//! size the block exactly.

use strand_core::{GrowthConfig, SeqError};
use tracing::trace;

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Total number of slots in the storage block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.block.capacity()
    }

    /// Grow the block to exactly `n` slots if it is currently smaller.
    ///
    /// Never shrinks. Fails with [`SeqError::CapacityExceeded`] if `n`
    /// exceeds the configured ceiling.
    pub fn reserve(&mut self, n: usize) -> Result<(), SeqError> {
        if n <= self.capacity() {
            return Ok(());
        }
        if n > self.config.max_capacity {
            return Err(SeqError::CapacityExceeded {
                requested: n,
                max: self.config.max_capacity,
            });
        }
        self.block.set_capacity(n);
        Ok(())
    }

    /// Trim the block to exactly `len()` slots.
    pub fn shrink(&mut self) {
        self.block.set_capacity(self.len);
    }

    /// Check that `len() + extra` elements fit under the ceiling without
    /// growing anything.
    pub(crate) fn check_room(&self, extra: usize) -> Result<(), SeqError> {
        let max = self.config.max_capacity;
        match self.len.checked_add(extra) {
            Some(needed) if needed <= max => Ok(()),
            Some(needed) => Err(SeqError::CapacityExceeded {
                requested: needed,
                max,
            }),
            None => Err(SeqError::CapacityExceeded {
                requested: usize::MAX,
                max,
            }),
        }
    }

    /// Guarantee room for `len() + extra` elements.
    ///
    /// An empty sequence grows to exactly `extra`; otherwise the current
    /// capacity is multiplied by the growth factor until it suffices,
    /// clamped to the ceiling.
    pub(crate) fn expand(&mut self, extra: usize) -> Result<(), SeqError> {
        self.check_room(extra)?;
        let needed = self.len + extra;
        if needed <= self.capacity() {
            return Ok(());
        }
        let target = if self.len == 0 {
            needed
        } else {
            grown_capacity(self.capacity(), needed, &self.config)
        };
        trace!(
            len = self.len,
            extra,
            from = self.capacity(),
            to = target,
            "expanding sequence"
        );
        self.reserve(target)
    }
}

/// Multiply `current` by the growth factor until it reaches `needed`.
///
/// `needed` must not exceed `config.max_capacity`; the result lies in
/// `[needed, max_capacity]`.
fn grown_capacity(current: usize, needed: usize, config: &GrowthConfig) -> usize {
    let mut cap = current.max(1);
    while cap < needed {
        cap = match cap.checked_mul(config.growth_factor) {
            Some(next) => next,
            None => return config.max_capacity,
        };
    }
    cap.min(config.max_capacity)
}
