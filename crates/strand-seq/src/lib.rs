//! Growable contiguous sequence engine for Strand containers.
//!
//! A [`Sequence`] presents a dynamically sized, ordered container over a
//! fixed-capacity [`StorageBlock`] that is reallocated only when needed.
//!
//! # Architecture
//!
//! ```text
//! Sequence (len ≤ capacity)
//! ├── StorageBlock      Box<[Option<T>]>, `None` = empty slot
//! ├── capacity manager  reserve / expand (geometric) / shrink
//! ├── shift engine      shift_left / shift_right over the block
//! ├── mutations         insert, insert_many, remove, replace, resize
//! ├── algorithms        filter, map, partition, sort, reverse, range
//! └── search            find, find_last, all, any
//! ```
//!
//! # Bounds and failure
//!
//! Positional arguments accept any [`Position`](strand_core::Position);
//! negative values count from the end. Every bounds or capacity check
//! runs before storage is touched, so a failed call never leaves a
//! sequence half-mutated.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algorithms;
pub mod capacity;
pub mod search;
pub mod sequence;
mod shift;
pub mod storage;

pub use sequence::{Iter, Sequence};
pub use storage::StorageBlock;
