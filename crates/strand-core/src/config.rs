//! Growth configuration for sequence storage.

use crate::error::ConfigError;

/// Controls how a sequence grows its storage block.
///
/// Validated when attached to a sequence; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrowthConfig {
    /// Multiplier applied to the current capacity until it covers a
    /// pending insertion.
    ///
    /// Default: 2 (doubling). Must be at least 2.
    pub growth_factor: usize,

    /// Hard ceiling on the number of slots in the storage block.
    ///
    /// Default: `usize::MAX` (unbounded). Geometric growth is clamped to
    /// this value; requests beyond it fail. Must be greater than zero.
    pub max_capacity: usize,
}

impl GrowthConfig {
    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Default capacity ceiling.
    pub const DEFAULT_MAX_CAPACITY: usize = usize::MAX;

    /// Create a config with the default factor and the given ceiling.
    pub fn bounded(max_capacity: usize) -> Self {
        Self {
            max_capacity,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.growth_factor < 2 {
            return Err(ConfigError::GrowthFactorTooSmall {
                configured: self.growth_factor,
            });
        }
        if self.max_capacity == 0 {
            return Err(ConfigError::ZeroMaxCapacity);
        }
        Ok(())
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }
}
