//! Priority cargo heap
//!
//! An array-backed binary max-heap of shipment priorities. The element at
//! index `i` has children at `2i + 1` and `2i + 2` and its parent at
//! `(i - 1) / 2`; every parent is at least as large as its children.
//!
//! Two insertion strategies are supported:
//!
//! - [`InsertStrategy::SiftUp`] appends and walks the new element towards the
//!   root while it exceeds its parent.
//! - [`InsertStrategy::Rebuild`] appends and re-heapifies the whole array
//!   bottom-up.
//!
//! Starting from a valid heap, both produce the same array layout: a bottom-up
//! rebuild only moves elements along the new element's path to the root,
//! swapping exactly where sift-up would. They differ only in cost.
//!
//! # Time Complexity
//!
//! | Operation               | Complexity |
//! |-------------------------|------------|
//! | `insert` (sift-up)      | O(log n)   |
//! | `insert` (rebuild)      | O(n)       |
//! | `extract_max`           | O(log n)   |
//! | `peek`                  | O(1)       |
//! | `from_vec` / `rebuild`  | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use galactic_cargo::cargo_heap::PriorityCargoHeap;
//!
//! let mut heap = PriorityCargoHeap::new();
//! for value in [12, 35, 9, 18, 23] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.peek(), Ok(35));
//! assert_eq!(heap.extract_max(), Ok(35));
//! assert_eq!(heap.extract_max(), Ok(23));
//! assert_eq!(heap.len(), 3);
//! ```

use log::trace;

use crate::traits::{HeapError, MaxHeap};

/// How a newly inserted value is worked into the heap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InsertStrategy {
    /// Swap the new element upward until its parent is not smaller
    #[default]
    SiftUp,
    /// Re-run a full bottom-up heapify after appending
    Rebuild,
}

/// A binary max-heap of shipment priorities
///
/// The priority is the value itself; there is no separate payload.
#[derive(Debug, Clone, Default)]
pub struct PriorityCargoHeap {
    /// Heap-ordered elements, level by level
    elements: Vec<i32>,
    /// Strategy used by [`PriorityCargoHeap::insert`]
    strategy: InsertStrategy,
}

impl PriorityCargoHeap {
    /// Creates an empty heap that inserts with [`InsertStrategy::SiftUp`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty heap that inserts with the given strategy
    pub fn with_strategy(strategy: InsertStrategy) -> Self {
        Self {
            elements: Vec::new(),
            strategy,
        }
    }

    /// Builds a heap from an arbitrary array by heapifying it in place
    pub fn from_vec(values: Vec<i32>) -> Self {
        let mut heap = Self {
            elements: values,
            strategy: InsertStrategy::default(),
        };
        heap.rebuild();
        heap
    }

    /// The strategy used by [`PriorityCargoHeap::insert`]
    pub fn strategy(&self) -> InsertStrategy {
        self.strategy
    }

    /// Changes the strategy used by subsequent inserts
    pub fn set_strategy(&mut self, strategy: InsertStrategy) {
        self.strategy = strategy;
    }

    /// Number of shipments in the heap
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when there is nothing to dispatch
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Inserts a value using the heap's configured strategy
    pub fn insert(&mut self, value: i32) {
        self.insert_with(value, self.strategy);
    }

    /// Inserts a value using an explicit strategy
    pub fn insert_with(&mut self, value: i32, strategy: InsertStrategy) {
        self.elements.push(value);
        match strategy {
            InsertStrategy::SiftUp => self.sift_up(self.elements.len() - 1),
            InsertStrategy::Rebuild => self.rebuild(),
        }
        trace!("inserted {} ({:?}), heap now {:?}", value, strategy, self.elements);
        debug_assert!(self.is_valid());
    }

    /// Returns the largest value without removing it
    pub fn peek(&self) -> Result<i32, HeapError> {
        self.elements.first().copied().ok_or(HeapError::EmptyHeap)
    }

    /// Removes and returns the largest value
    ///
    /// The last element takes the root's place and is sifted down. A heap
    /// with one element is simply emptied.
    pub fn extract_max(&mut self) -> Result<i32, HeapError> {
        if self.elements.is_empty() {
            return Err(HeapError::EmptyHeap);
        }

        let last_idx = self.elements.len() - 1;
        self.elements.swap(0, last_idx);
        let max = self.elements.pop().ok_or(HeapError::EmptyHeap)?;

        if !self.elements.is_empty() {
            self.sift_down(0);
        }

        trace!("extracted {}, heap now {:?}", max, self.elements);
        debug_assert!(self.is_valid());
        Ok(max)
    }

    /// The internal array in level order (not sorted)
    pub fn snapshot(&self) -> &[i32] {
        &self.elements
    }

    /// Re-establishes the heap property over the whole array
    ///
    /// Visits every non-leaf index from the last parent down to the root and
    /// sifts each one down.
    pub fn rebuild(&mut self) {
        let len = self.elements.len();
        for index in (0..len / 2).rev() {
            self.sift_down(index);
        }
    }

    /// Checks that every parent is at least as large as its children
    pub fn is_valid(&self) -> bool {
        (1..self.elements.len()).all(|i| self.elements[(i - 1) / 2] >= self.elements[i])
    }

    /// Drains the heap, returning its values from largest to smallest
    pub fn into_descending_vec(mut self) -> Vec<i32> {
        let mut sorted = Vec::with_capacity(self.elements.len());
        while let Ok(value) = self.extract_max() {
            sorted.push(value);
        }
        sorted
    }

    /// Move element at index up while it is larger than its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.elements[index] > self.elements[parent] {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while a child is larger
    fn sift_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && self.elements[left] > self.elements[largest] {
                largest = left;
            }
            if right < len && self.elements[right] > self.elements[largest] {
                largest = right;
            }

            if largest != index {
                self.elements.swap(index, largest);
                index = largest;
            } else {
                break;
            }
        }
    }
}

impl MaxHeap<i32> for PriorityCargoHeap {
    fn new() -> Self {
        Self::default()
    }

    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn push(&mut self, value: i32) {
        self.insert(value);
    }

    fn peek(&self) -> Result<i32, HeapError> {
        PriorityCargoHeap::peek(self)
    }

    fn pop(&mut self) -> Result<i32, HeapError> {
        self.extract_max()
    }
}

impl Extend<i32> for PriorityCargoHeap {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for PriorityCargoHeap {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut heap = PriorityCargoHeap::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.insert(3);
        heap.insert(1);
        heap.insert(2);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek(), Ok(3));

        assert_eq!(heap.extract_max(), Ok(3));
        assert_eq!(heap.extract_max(), Ok(2));
        assert_eq!(heap.extract_max(), Ok(1));
        assert_eq!(heap.extract_max(), Err(HeapError::EmptyHeap));
    }

    #[test]
    fn test_shipment_round_trip() {
        let mut heap = PriorityCargoHeap::new();
        for value in [12, 35, 9, 18, 23] {
            heap.insert(value);
        }

        let dispatched: Vec<i32> = (0..5).map(|_| heap.extract_max().unwrap()).collect();
        assert_eq!(dispatched, vec![35, 23, 18, 12, 9]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_sift_up_layout() {
        let mut heap = PriorityCargoHeap::new();
        for value in [12, 35, 9, 18, 23] {
            heap.insert(value);
        }
        // 12 -> [35,12] -> [35,12,9] -> [35,18,9,12] -> [35,23,9,12,18]
        assert_eq!(heap.snapshot(), &[35, 23, 9, 12, 18]);
    }

    #[test]
    fn test_rebuild_layout() {
        let mut heap = PriorityCargoHeap::with_strategy(InsertStrategy::Rebuild);
        for value in [12, 35, 9, 18, 23] {
            heap.insert(value);
        }
        assert!(heap.is_valid());
        // same layout as sift-up
        assert_eq!(heap.snapshot(), &[35, 23, 9, 12, 18]);
        assert_eq!(heap.into_descending_vec(), vec![35, 23, 18, 12, 9]);
    }

    #[test]
    fn test_empty_heap_is_untouched() {
        let mut heap = PriorityCargoHeap::new();
        assert_eq!(heap.peek(), Err(HeapError::EmptyHeap));
        assert_eq!(heap.extract_max(), Err(HeapError::EmptyHeap));
        assert!(heap.is_empty());
        assert!(heap.snapshot().is_empty());
    }

    #[test]
    fn test_single_element() {
        let mut heap = PriorityCargoHeap::new();
        heap.insert(42);
        assert_eq!(heap.extract_max(), Ok(42));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_duplicate_priorities() {
        let mut heap = PriorityCargoHeap::new();
        heap.insert(7);
        heap.insert(7);
        heap.insert(7);

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.extract_max(), Ok(7));
        assert_eq!(heap.extract_max(), Ok(7));
        assert_eq!(heap.extract_max(), Ok(7));
    }

    #[test]
    fn test_from_vec_heapifies() {
        let heap = PriorityCargoHeap::from_vec(vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(heap.is_valid());
        assert_eq!(heap.peek(), Ok(7));
        assert_eq!(heap.into_descending_vec(), vec![7, 6, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_negative_values() {
        let heap: PriorityCargoHeap = [-5, -1, -9, 0, i32::MIN, i32::MAX].into_iter().collect();
        assert_eq!(heap.into_descending_vec(), vec![i32::MAX, 0, -1, -5, -9, i32::MIN]);
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = PriorityCargoHeap::new();
        heap.extend(0..100);

        for i in (0..100).rev() {
            assert_eq!(heap.extract_max(), Ok(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = PriorityCargoHeap::with_strategy(InsertStrategy::Rebuild);
        heap.extend((0..100).rev());

        for i in (0..100).rev() {
            assert_eq!(heap.extract_max(), Ok(i));
        }
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let heap: PriorityCargoHeap = [4, 8, 15, 16, 23, 42].into_iter().collect();
        assert_eq!(heap.snapshot().to_vec(), heap.snapshot().to_vec());
    }
}
