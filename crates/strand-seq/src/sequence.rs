//! The growable sequence and its mutation operations.
//!
//! [`Sequence`] pairs a [`StorageBlock`] with a logical length. Slots in
//! `[len, capacity)` are always empty; public queries never look at them.
//! Every mutation checks its bounds first, then asks the capacity manager
//! for room, then relocates elements with the shift engine, and only then
//! writes. A failed call leaves the sequence untouched.

use std::fmt;
use std::ops::Index;

use smallvec::SmallVec;
use strand_core::{
    check_range, resolve_element, resolve_position, ConfigError, GrowthConfig, Position,
    SeqError,
};

use crate::storage::StorageBlock;

/// Inline buffer used to stage incoming elements before a shift.
pub(crate) type Staged<T> = SmallVec<[T; 8]>;

/// Borrowing iterator over the live elements of a [`Sequence`].
pub type Iter<'a, T> = std::iter::Flatten<std::slice::Iter<'a, Option<T>>>;

/// An ordered, index-addressable container over a contiguous block.
#[derive(Clone)]
pub struct Sequence<T> {
    pub(crate) block: StorageBlock<T>,
    pub(crate) len: usize,
    pub(crate) config: GrowthConfig,
}

impl<T> Sequence<T> {
    /// Create an empty sequence. Does not allocate.
    pub fn new() -> Self {
        Self {
            block: StorageBlock::new(),
            len: 0,
            config: GrowthConfig::default(),
        }
    }

    /// Create an empty sequence with a validated growth configuration.
    pub fn with_config(config: GrowthConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            block: StorageBlock::new(),
            len: 0,
            config,
        })
    }

    /// Create an empty sequence with exactly `capacity` reserved slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            block: StorageBlock::with_capacity(capacity),
            len: 0,
            config: GrowthConfig::default(),
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The growth configuration in effect.
    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Number of times the storage block has been reallocated.
    pub fn reallocations(&self) -> usize {
        self.block.reallocations()
    }

    /// Memory footprint of the storage block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.block.memory_bytes()
    }

    /// Borrow the element at `index`.
    pub fn get<P: Position>(&self, index: P) -> Result<&T, SeqError> {
        let i = resolve_element(index, self.len)?;
        Ok(self.live(i))
    }

    /// Mutably borrow the element at `index`.
    pub fn get_mut<P: Position>(&mut self, index: P) -> Result<&mut T, SeqError> {
        let i = resolve_element(index, self.len)?;
        Ok(self
            .block
            .get_mut(i)
            .expect("slots below len are always occupied"))
    }

    /// Overwrite the element at `index`, returning the previous value.
    pub fn set<P: Position>(&mut self, index: P, element: T) -> Result<T, SeqError> {
        let i = resolve_element(index, self.len)?;
        Ok(self
            .block
            .set(i, element)
            .expect("slots below len are always occupied"))
    }

    /// Drop every element and release the storage block.
    pub fn clear(&mut self) {
        self.block.release();
        self.len = 0;
    }

    /// Iterate over the live elements in order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.block.slots()[..self.len].iter().flatten()
    }

    /// Insert `element` before position `index`.
    ///
    /// `index` may equal `len()` to append; negative positions count from
    /// the end.
    pub fn insert<P: Position>(&mut self, index: P, element: T) -> Result<(), SeqError> {
        self.insert_many(index, std::iter::once(element))
    }

    /// Insert `elements`, in order, before position `index`.
    ///
    /// An empty `elements` is a no-op once the position has been validated.
    pub fn insert_many<P, I>(&mut self, index: P, elements: I) -> Result<(), SeqError>
    where
        P: Position,
        I: IntoIterator<Item = T>,
    {
        let at = resolve_position(index, self.len)?;
        let incoming: Staged<T> = elements.into_iter().collect();
        if incoming.is_empty() {
            return Ok(());
        }
        let count = incoming.len();
        self.shift_right(at, count)?;
        self.len += count;
        self.write_run(at, incoming);
        Ok(())
    }

    /// Remove `count` elements starting at `index`.
    pub fn remove<P: Position>(&mut self, index: P, count: usize) -> Result<(), SeqError> {
        let at = resolve_position(index, self.len)?;
        check_range(at, count, self.len)?;
        if count == 0 {
            return Ok(());
        }
        self.shift_left(at + count, count);
        self.len -= count;
        Ok(())
    }

    /// Replace the `count` elements starting at `index` with `elements`.
    ///
    /// The replacement may be longer or shorter than `count`; the tail is
    /// shifted to fit. `count == 0` is a pure insertion and an empty
    /// `elements` a pure removal.
    pub fn replace<P, I>(&mut self, index: P, elements: I, count: usize) -> Result<(), SeqError>
    where
        P: Position,
        I: IntoIterator<Item = T>,
    {
        let at = resolve_position(index, self.len)?;
        check_range(at, count, self.len)?;
        let incoming: Staged<T> = elements.into_iter().collect();
        let n = incoming.len();
        let tail = at + count;
        if n > count {
            self.shift_right(tail, n - count)?;
        } else if n < count {
            self.shift_left(tail, count - n);
        }
        self.len = self.len + n - count;
        self.write_run(at, incoming);
        Ok(())
    }

    /// Borrow the live element in slot `i`. `i` must be below `len`.
    #[inline]
    pub(crate) fn live(&self, i: usize) -> &T {
        self.block
            .get(i)
            .expect("slots below len are always occupied")
    }

    /// Write `elements` into consecutive slots starting at `at`.
    pub(crate) fn write_run<I: IntoIterator<Item = T>>(&mut self, at: usize, elements: I) {
        for (offset, element) in elements.into_iter().enumerate() {
            self.block.set(at + offset, element);
        }
    }

    /// Empty the live region while keeping the block.
    pub(crate) fn clear_live(&mut self) {
        for slot in &mut self.block.slots_mut()[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Replace the contents with `elements`, reusing the block.
    pub(crate) fn assign(&mut self, elements: Vec<T>) -> Result<(), SeqError> {
        self.reserve(elements.len())?;
        self.clear_live();
        for element in elements {
            self.block.set(self.len, element);
            self.len += 1;
        }
        Ok(())
    }
}

impl<T: Clone + Default> Sequence<T> {
    /// Change the length to `new_size`.
    ///
    /// Shrinking drops the tail and trims the block to exactly `new_size`
    /// slots. Growing reserves `new_size` slots and fills every new slot
    /// with a clone of `fill`, or with `T::default()` when no fill is given.
    pub fn resize(&mut self, new_size: usize, fill: Option<T>) -> Result<(), SeqError> {
        if new_size < self.len {
            self.block.set_capacity(new_size);
            self.len = new_size;
        } else if new_size > self.len {
            self.reserve(new_size)?;
            let fill = fill.unwrap_or_default();
            while self.len < new_size {
                self.block.set(self.len, fill.clone());
                self.len += 1;
            }
        }
        Ok(())
    }
}

impl<T: Clone> Sequence<T> {
    /// Copy the live elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        let mut seq = Self::with_capacity(elements.len());
        seq.write_run(0, elements);
        seq.len = seq.block.capacity();
        seq
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for Sequence<T> {
    /// # Panics
    ///
    /// Panics if the configured `max_capacity` would be exceeded.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let at = self.len;
        if let Err(e) = self.insert_many(at, iter) {
            panic!("extend failed: {e}");
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
