//! Session configuration

use crate::cargo_heap::InsertStrategy;

/// Shipment priorities a new session starts with
pub const DEFAULT_SEED: [i32; 5] = [12, 35, 9, 18, 23];

/// Settings for a [`CargoSession`](crate::session::CargoSession)
///
/// # Example
///
/// ```rust
/// use galactic_cargo::cargo_heap::InsertStrategy;
/// use galactic_cargo::config::SessionConfig;
///
/// let config = SessionConfig::default()
///     .with_seed([4, 8, 15])
///     .with_strategy(InsertStrategy::Rebuild);
///
/// assert_eq!(config.seed, vec![4, 8, 15]);
/// assert_eq!(config.strategy, InsertStrategy::Rebuild);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Shipments initially available for insertion
    pub seed: Vec<i32>,
    /// How admitted shipments are worked into the heap
    pub strategy: InsertStrategy,
}

impl SessionConfig {
    /// Replaces the starting shipments
    pub fn with_seed(mut self, seed: impl IntoIterator<Item = i32>) -> Self {
        self.seed = seed.into_iter().collect();
        self
    }

    /// Selects how admitted shipments are inserted
    pub fn with_strategy(mut self, strategy: InsertStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED.to_vec(),
            strategy: InsertStrategy::SiftUp,
        }
    }
}
