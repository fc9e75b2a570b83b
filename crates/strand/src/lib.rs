//! Strand: in-memory sequence containers over growable contiguous storage.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Strand sub-crates. For most users, adding `strand` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! let mut seq = Sequence::from([10, 20, 30, 40]);
//! seq.remove(1, 2)?;
//! seq.insert(-1, 25)?;
//! assert_eq!(seq.to_vec(), vec![10, 25, 40]);
//!
//! let mut evens = Sequence::new();
//! seq.filter_into(|x| x % 2 == 0, &mut evens)?;
//! assert_eq!(evens.to_vec(), vec![10, 40]);
//!
//! assert_eq!(seq.find(|&x| x > 20, 0)?, Some(1));
//! # Ok::<(), SeqError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `strand-core` | Errors, positions, growth configuration |
//! | [`seq`] | `strand-seq` | `Sequence`, `StorageBlock`, bulk algorithms |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, positions, and growth configuration (`strand-core`).
pub use strand_core as types;

/// The sequence engine (`strand-seq`).
///
/// [`seq::Sequence`] is also available in the [`prelude`].
pub use strand_seq as seq;

/// Common imports for typical Strand usage.
///
/// ```rust
/// use strand::prelude::*;
/// ```
pub mod prelude {
    pub use strand_core::{ConfigError, GrowthConfig, IndexError, Position, SeqError};
    pub use strand_seq::Sequence;
}
