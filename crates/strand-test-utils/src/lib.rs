//! Test utilities and fixtures for Strand development.
//!
//! Provides canonical sequences, a drop-counting element type
//! ([`Tracked`]) for ownership checks, ordering predicates for sort
//! assertions, and an opt-in tracing subscriber.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

use strand_seq::Sequence;

pub use fixtures::{ascending, one_to_five, ten_to_forty};

/// Install a test-friendly `tracing` subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Shared drop counter for [`Tracked`] values.
#[derive(Clone, Default)]
pub struct DropLog {
    drops: Rc<Cell<usize>>,
}

impl DropLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracked value reporting to this log.
    pub fn track(&self, value: i32) -> Tracked {
        Tracked {
            value,
            log: self.clone(),
        }
    }

    /// Number of tracked values dropped so far.
    pub fn drops(&self) -> usize {
        self.drops.get()
    }
}

/// A non-`Copy` element that records its own drop.
///
/// Clones report to the same [`DropLog`], so a test can check that a
/// mutation dropped exactly the elements it displaced.
#[derive(Clone)]
pub struct Tracked {
    pub value: i32,
    log: DropLog,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.drops.set(self.log.drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl std::fmt::Debug for Tracked {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

/// Values of a tracked sequence, in order.
pub fn values(seq: &Sequence<Tracked>) -> Vec<i32> {
    seq.iter().map(|t| t.value).collect()
}

/// Returns `true` if every adjacent pair satisfies `compare(a, b) != Greater`.
pub fn is_sorted_by<T, F>(seq: &Sequence<T>, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    let items: Vec<&T> = seq.iter().collect();
    items
        .windows(2)
        .all(|pair| compare(pair[0], pair[1]) != Ordering::Greater)
}

/// Returns `true` if `a` and `b` hold the same multiset of elements.
pub fn is_permutation<T: Ord + Clone>(a: &Sequence<T>, b: &Sequence<T>) -> bool {
    let mut left = a.to_vec();
    let mut right = b.to_vec();
    left.sort();
    right.sort();
    left == right
}
