//! Bulk algorithms over the live region of a sequence.
//!
//! Out-of-place variants (`*_into`) read `self` and overwrite the output
//! from index 0, reusing the output's block; `partition_into` appends
//! instead. Outputs cannot alias the input: the borrow checker rejects
//! it. The one algorithm that must work on itself, filtering, has a
//! dedicated [`filter_in_place`](Sequence::filter_in_place).
//!
//! Capacity for an output is secured before anything is written, so an
//! error leaves every output as it was.

use std::cmp::Ordering;

use smallvec::SmallVec;
use strand_core::{check_range, SeqError};

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Keep only the elements matching `predicate`, in order.
    ///
    /// Compacts within the existing block: the write cursor never passes
    /// the read cursor, so no unread element is overwritten. Capacity is
    /// unchanged.
    ///
    /// If `predicate` panics, the elements it has not yet judged are kept
    /// and the sequence stays consistent.
    pub fn filter_in_place<F>(&mut self, mut predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        let end = self.len;
        let mut pass = Compaction {
            seq: self,
            read: 0,
            write: 0,
            end,
        };
        while pass.read < pass.end {
            let read = pass.read;
            if predicate(pass.seq.live(read)) {
                if pass.write != read {
                    let kept = pass.seq.block.take(read);
                    pass.seq.block.slots_mut()[pass.write] = kept;
                }
                pass.write += 1;
                pass.read += 1;
            } else {
                let rejected = pass.seq.block.take(read);
                pass.read += 1;
                drop(rejected);
            }
        }
    }

    /// Overwrite `output` with `transform` applied to every element.
    ///
    /// `output` ends up with exactly `len()` elements,
    /// `output[i] == transform(self[i])`.
    pub fn map_into<U, F>(&self, mut transform: F, output: &mut Sequence<U>) -> Result<(), SeqError>
    where
        F: FnMut(&T) -> U,
    {
        output.reserve(self.len)?;
        output.clear_live();
        for element in self.iter() {
            output.block.set(output.len, transform(element));
            output.len += 1;
        }
        Ok(())
    }

    /// Reverse the live elements in place by swapping from both ends.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let slots = self.block.slots_mut();
        let (mut lo, mut hi) = (0, self.len - 1);
        while lo < hi {
            slots.swap(lo, hi);
            lo += 1;
            hi -= 1;
        }
    }

    /// Stable in-place sort by a three-way comparator.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.len;
        self.block.slots_mut()[..len].sort_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => compare(a, b),
            // The live region holds no empty slots.
            _ => Ordering::Equal,
        });
    }
}

/// Cursor state of an in-place filter.
///
/// Slots in `[write, read)` are empty and `[read, end)` are still unread.
/// Dropping the pass slides the unread run down to `write` and commits the
/// length, so an unwinding predicate leaves no hole below `len`.
struct Compaction<'a, T> {
    seq: &'a mut Sequence<T>,
    read: usize,
    write: usize,
    end: usize,
}

impl<T> Drop for Compaction<'_, T> {
    fn drop(&mut self) {
        let gap = self.read - self.write;
        if gap > 0 && self.read < self.end {
            self.seq.block.slots_mut()[self.write..self.end].rotate_left(gap);
        }
        self.seq.len = self.write + (self.end - self.read);
    }
}

impl<T: Clone> Sequence<T> {
    /// Overwrite `output` with the elements matching `predicate`, in order.
    pub fn filter_into<F>(&self, mut predicate: F, output: &mut Sequence<T>) -> Result<(), SeqError>
    where
        F: FnMut(&T) -> bool,
    {
        output.reserve(self.len)?;
        output.clear_live();
        for element in self.iter() {
            if predicate(element) {
                output.block.set(output.len, element.clone());
                output.len += 1;
            }
        }
        Ok(())
    }

    /// Append each element to `left` if it matches `predicate`, else to
    /// `right`, preserving relative order in both.
    pub fn partition_into<F>(
        &self,
        mut predicate: F,
        left: &mut Sequence<T>,
        right: &mut Sequence<T>,
    ) -> Result<(), SeqError>
    where
        F: FnMut(&T) -> bool,
    {
        let decisions: SmallVec<[bool; 64]> = self.iter().map(&mut predicate).collect();
        let matched = decisions.iter().filter(|&&d| d).count();
        left.check_room(matched)?;
        right.check_room(self.len - matched)?;
        left.expand(matched)?;
        right.expand(self.len - matched)?;
        for (element, goes_left) in self.iter().zip(decisions) {
            let side = if goes_left { &mut *left } else { &mut *right };
            side.block.set(side.len, element.clone());
            side.len += 1;
        }
        Ok(())
    }

    /// Overwrite `output` with a stably sorted copy of the elements.
    pub fn sorted_into<F>(&self, compare: F, output: &mut Sequence<T>) -> Result<(), SeqError>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut sorted = self.to_vec();
        sorted.sort_by(compare);
        output.assign(sorted)
    }

    /// Overwrite `output` with the elements in reverse order.
    pub fn reversed_into(&self, output: &mut Sequence<T>) -> Result<(), SeqError> {
        output.assign(self.iter().rev().cloned().collect())
    }

    /// Overwrite `output` with a copy of `self[begin..end]`.
    ///
    /// When `begin >= end` the range is empty and `output` is left exactly
    /// as it was, whatever its contents; this is not an error.
    pub fn range_into(&self, begin: usize, end: usize, output: &mut Sequence<T>) -> Result<(), SeqError> {
        if begin >= end {
            return Ok(());
        }
        check_range(begin, end - begin, self.len)?;
        output.assign(self.iter().skip(begin).take(end - begin).cloned().collect())
    }
}
