//! Canonical sequences used across the test suites.

use strand_seq::Sequence;

/// `[0, 1, ..., n - 1]`.
pub fn ascending(n: i32) -> Sequence<i32> {
    (0..n).collect()
}

/// `[1, 2, 3, 4, 5]`.
pub fn one_to_five() -> Sequence<i32> {
    Sequence::from([1, 2, 3, 4, 5])
}

/// `[10, 20, 30, 40]`.
pub fn ten_to_forty() -> Sequence<i32> {
    Sequence::from([10, 20, 30, 40])
}
