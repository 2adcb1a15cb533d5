//! Common traits for the cargo heap
//!
//! The [`MaxHeap`] trait mirrors the shape of Rust's `BinaryHeap` API, but is
//! expressed in terms of the operations a cargo manager needs: push a shipment,
//! look at the most urgent one, and dispatch it.
//!
//! Unlike `BinaryHeap::pop`, which returns `Option`, [`MaxHeap::pop`] and
//! [`MaxHeap::peek`] report an empty heap as a [`HeapError`] so callers can
//! surface it to the user instead of silently ignoring it.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap holds no elements
    EmptyHeap,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for max-ordered heaps where the value is its own priority
///
/// # Example
///
/// ```rust
/// use galactic_cargo::MaxHeap;
/// use galactic_cargo::cargo_heap::PriorityCargoHeap;
///
/// let mut heap: PriorityCargoHeap = MaxHeap::new();
/// heap.push(3);
/// heap.push(7);
/// heap.push(5);
///
/// assert_eq!(heap.peek(), Ok(7));
/// assert_eq!(MaxHeap::pop(&mut heap), Ok(7));
/// ```
pub trait MaxHeap<T: Ord + Copy> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts a value
    ///
    /// # Time Complexity
    /// O(log n) with sift-up, O(n) when the heap is rebuilt on every insert.
    fn push(&mut self, value: T);

    /// Returns the maximum without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to look at.
    fn peek(&self) -> Result<T, HeapError>;

    /// Removes and returns the maximum
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if there is nothing to remove. The heap
    /// is left unchanged in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn pop(&mut self) -> Result<T, HeapError>;
}
