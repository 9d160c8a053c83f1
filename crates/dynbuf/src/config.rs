//! Buffer configuration parameters.

use crate::error::BufferError;

/// How much storage a new buffer allocates up front.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InitialCapacity {
    /// No backing allocation. The buffer must be given one with
    /// `reserve` before any element can be stored.
    None,
    /// [`BufferConfig::DEFAULT_ITEMS`] zero-initialised slots.
    #[default]
    Default,
    /// An explicit number of zero-initialised slots.
    Items(usize),
}

impl InitialCapacity {
    /// Number of slots this policy allocates.
    pub fn items(self) -> usize {
        match self {
            Self::None => 0,
            Self::Default => BufferConfig::DEFAULT_ITEMS,
            Self::Items(n) => n,
        }
    }
}

/// Configuration for a [`DynamicBuffer`](crate::DynamicBuffer).
///
/// Validated at construction; the buffer copies what it needs and the
/// values are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    /// Storage allocated when the buffer is created.
    ///
    /// Default: [`InitialCapacity::Default`] (32 items).
    pub initial: InitialCapacity,

    /// Multiplier applied to the item capacity when an insert finds the
    /// buffer full.
    ///
    /// Default: 2. Must be at least 2.
    pub growth_factor: usize,
}

impl BufferConfig {
    /// Default item count for eagerly allocated buffers.
    pub const DEFAULT_ITEMS: usize = 32;

    /// Default capacity multiplier on growth.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a config with the given initial capacity policy.
    ///
    /// Uses default values for all other parameters.
    pub fn new(initial: InitialCapacity) -> Self {
        Self {
            initial,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Check the parameters for values no buffer can work with.
    pub fn validate(&self) -> Result<(), BufferError> {
        if self.growth_factor < 2 {
            return Err(BufferError::InvalidConfig {
                reason: "growth_factor must be at least 2",
            });
        }
        if self.initial == InitialCapacity::Items(0) {
            return Err(BufferError::InvalidConfig {
                reason: "explicit initial capacity must be positive; use InitialCapacity::None",
            });
        }
        Ok(())
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(InitialCapacity::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_allocates_32_items() {
        let config = BufferConfig::default();
        assert_eq!(config.initial.items(), 32);
        assert_eq!(config.growth_factor, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unallocated_policy_has_no_items() {
        assert_eq!(InitialCapacity::None.items(), 0);
        assert!(BufferConfig::new(InitialCapacity::None).validate().is_ok());
    }

    #[test]
    fn growth_factor_below_two_rejected() {
        let config = BufferConfig {
            growth_factor: 1,
            ..BufferConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BufferError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn zero_explicit_items_rejected() {
        let config = BufferConfig::new(InitialCapacity::Items(0));
        assert!(matches!(
            config.validate(),
            Err(BufferError::InvalidConfig { .. })
        ));
    }
}
