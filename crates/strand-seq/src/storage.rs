//! Fixed-capacity contiguous storage blocks.
//!
//! A [`StorageBlock`] is a boxed slice of `Option<T>` slots. `None` is the
//! empty sentinel for slots that hold no logical value. The block has no
//! growth policy of its own: it only changes size when told to via
//! [`set_capacity`](StorageBlock::set_capacity). Bounds are the caller's
//! responsibility; out-of-range slot indices panic like slice indexing.

use tracing::debug;

/// A contiguous, fixed-capacity region of element slots.
pub struct StorageBlock<T> {
    /// Backing slots. `slots.len()` is the capacity.
    slots: Box<[Option<T>]>,
    /// Number of times the backing allocation has been replaced.
    reallocations: usize,
}

impl<T> StorageBlock<T> {
    /// Create a block with no slots. Does not allocate.
    pub fn new() -> Self {
        Self {
            slots: Box::default(),
            reallocations: 0,
        }
    }

    /// Create a block with `capacity` empty slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut block = Self::new();
        if capacity > 0 {
            block.set_capacity(capacity);
        }
        block
    }

    /// Total number of slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Borrow the value in slot `i`, or `None` if the slot is empty.
    ///
    /// # Panics
    ///
    /// Panics if `i >= capacity()`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.slots[i].as_ref()
    }

    /// Mutably borrow the value in slot `i`, or `None` if the slot is empty.
    ///
    /// # Panics
    ///
    /// Panics if `i >= capacity()`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.slots[i].as_mut()
    }

    /// Store `value` in slot `i`, returning whatever the slot held before.
    ///
    /// # Panics
    ///
    /// Panics if `i >= capacity()`.
    #[inline]
    pub fn set(&mut self, i: usize, value: T) -> Option<T> {
        self.slots[i].replace(value)
    }

    /// Empty slot `i`, returning its previous value.
    ///
    /// # Panics
    ///
    /// Panics if `i >= capacity()`.
    #[inline]
    pub fn take(&mut self, i: usize) -> Option<T> {
        self.slots[i].take()
    }

    /// Reallocate to exactly `n` slots.
    ///
    /// Contents up to `min(capacity(), n)` are preserved in place; new
    /// slots start empty; slots past `n` are dropped. A no-op when `n`
    /// already equals the capacity.
    pub fn set_capacity(&mut self, n: usize) {
        let old = self.slots.len();
        if n == old {
            return;
        }
        let mut fresh: Vec<Option<T>> = Vec::with_capacity(n);
        let mut previous = std::mem::take(&mut self.slots).into_vec();
        previous.truncate(n);
        fresh.extend(previous);
        fresh.resize_with(n, || None);
        self.slots = fresh.into_boxed_slice();
        self.reallocations += 1;
        debug!(old_capacity = old, new_capacity = n, "storage block reallocated");
    }

    /// Release every slot, leaving a zero-capacity block.
    pub fn release(&mut self) {
        if !self.slots.is_empty() {
            let old = self.slots.len();
            self.slots = Box::default();
            self.reallocations += 1;
            debug!(old_capacity = old, "storage block released");
        }
    }

    /// Number of times the backing allocation has been replaced.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    /// Borrow the raw slots.
    #[inline]
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Mutably borrow the raw slots. Callers keep the live prefix occupied.
    #[inline]
    pub(crate) fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }

    /// Memory footprint of the slot array in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.slots.len() * std::mem::size_of::<Option<T>>()
    }
}

impl<T> Default for StorageBlock<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for StorageBlock<T> {
    /// Deep-copies the slot array. The clone starts with a fresh
    /// reallocation count.
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            reallocations: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_block_is_empty_and_unallocated() {
        let block: StorageBlock<u8> = StorageBlock::new();
        assert_eq!(block.capacity(), 0);
        assert_eq!(block.reallocations(), 0);
    }

    #[test]
    fn with_capacity_starts_with_empty_slots() {
        let block: StorageBlock<i32> = StorageBlock::with_capacity(8);
        assert_eq!(block.capacity(), 8);
        assert!(block.slots().iter().all(Option::is_none));
    }

    #[test]
    fn set_then_get() {
        let mut block = StorageBlock::with_capacity(4);
        assert_eq!(block.set(2, "b"), None);
        assert_eq!(block.get(2), Some(&"b"));
        assert_eq!(block.set(2, "c"), Some("b"));
        assert_eq!(block.take(2), Some("c"));
        assert_eq!(block.get(2), None);
    }

    #[test]
    fn grow_preserves_prefix_and_empties_tail() {
        let mut block = StorageBlock::with_capacity(2);
        block.set(0, 10);
        block.set(1, 20);
        block.set_capacity(5);
        assert_eq!(block.capacity(), 5);
        assert_eq!(block.get(0), Some(&10));
        assert_eq!(block.get(1), Some(&20));
        assert!(block.slots()[2..].iter().all(Option::is_none));
    }

    #[test]
    fn shrink_drops_tail() {
        let mut block = StorageBlock::with_capacity(4);
        for i in 0..4 {
            block.set(i, i * 10);
        }
        block.set_capacity(2);
        assert_eq!(block.slots(), &[Some(0), Some(10)]);
    }

    #[test]
    fn same_capacity_is_not_a_reallocation() {
        let mut block: StorageBlock<u8> = StorageBlock::with_capacity(3);
        let before = block.reallocations();
        block.set_capacity(3);
        assert_eq!(block.reallocations(), before);
    }

    #[test]
    fn release_frees_all_slots() {
        let mut block = StorageBlock::with_capacity(3);
        block.set(0, 'x');
        block.release();
        assert_eq!(block.capacity(), 0);
        assert_eq!(block.memory_bytes(), 0);
    }

    #[test]
    fn clone_is_independent() {
        let mut a = StorageBlock::with_capacity(2);
        a.set(0, String::from("left"));
        let mut b = a.clone();
        b.set(0, String::from("right"));
        assert_eq!(a.get(0).map(String::as_str), Some("left"));
        assert_eq!(b.get(0).map(String::as_str), Some("right"));
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_slot_panics() {
        let block: StorageBlock<u8> = StorageBlock::with_capacity(1);
        let _ = block.get(1);
    }
}
