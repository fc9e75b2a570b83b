//! Core types for the Strand container library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the error types, the [`Position`] abstraction used by every positional
//! sequence operation, and the [`GrowthConfig`] consumed by storage growth.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod position;

pub use config::GrowthConfig;
pub use error::{ConfigError, IndexError, SeqError};
pub use position::{check_range, resolve_element, resolve_position, Position};
