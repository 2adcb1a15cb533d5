//! Shipments waiting to be admitted into the cargo heap
//!
//! The pool is filled once from a seed set and only ever shrinks.

use log::trace;

/// Unordered collection of shipment priorities not yet in the heap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailableShipmentPool {
    pending: Vec<i32>,
}

impl AvailableShipmentPool {
    /// Creates a pool holding the given seed shipments
    pub fn new(seed: impl IntoIterator<Item = i32>) -> Self {
        Self {
            pending: seed.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.pending.contains(&value)
    }

    /// Removes one occurrence of `value`, returning whether it was present
    ///
    /// The pool is left unchanged when the value is absent.
    pub fn take_if_present(&mut self, value: i32) -> bool {
        match self.pending.iter().position(|&v| v == value) {
            Some(pos) => {
                self.pending.remove(pos);
                trace!("took {} from pool, {} left", value, self.pending.len());
                true
            }
            None => false,
        }
    }

    /// The remaining shipments, in seed order
    pub fn as_sequence(&self) -> &[i32] {
        &self.pending
    }
}
