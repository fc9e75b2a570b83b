//! Shift engine: relocates element runs within the storage block.
//!
//! These are the only operations besides direct slot writes that change
//! the order of the raw storage. Neither touches `len`; callers adjust it
//! afterwards. Both rely on the invariant that slots in `[len, capacity)`
//! are empty.

use strand_core::SeqError;

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Move `[index, len)` left by `count` slots.
    ///
    /// The `count` elements directly before `index` are dropped and the
    /// vacated tail `[len - count, len)` is emptied.
    ///
    /// # Panics
    ///
    /// Panics if `count > index` or `index > len`.
    pub(crate) fn shift_left(&mut self, index: usize, count: usize) {
        assert!(count <= index, "shift_left by {count} from index {index}");
        assert!(index <= self.len, "shift_left from {index} past len {}", self.len);
        if count == 0 {
            return;
        }
        let len = self.len;
        let slots = self.block.slots_mut();
        slots[index - count..len].rotate_left(count);
        for slot in &mut slots[len - count..len] {
            *slot = None;
        }
    }

    /// Open a gap of `count` empty slots at `index`, moving `[index, len)`
    /// right by `count`.
    ///
    /// Expands the block first; on failure nothing has moved.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub(crate) fn shift_right(&mut self, index: usize, count: usize) -> Result<(), SeqError> {
        assert!(index <= self.len, "shift_right from {index} past len {}", self.len);
        if count == 0 {
            return Ok(());
        }
        self.expand(count)?;
        let len = self.len;
        // The `count` empty slots just past `len` rotate down into the gap.
        self.block.slots_mut()[index..len + count].rotate_right(count);
        Ok(())
    }
}
