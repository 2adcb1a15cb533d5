//! Shared helpers for integration tests

use galactic_cargo::PriorityCargoHeap;

/// Routes `log` output through `env_logger` when `RUST_LOG` is set
pub fn init_test() {
    drop(env_logger::builder().is_test(true).try_init());
}

/// Checks the max-heap property directly on the snapshot
pub fn assert_max_heap(heap: &PriorityCargoHeap) {
    let elements = heap.snapshot();
    for child in 1..elements.len() {
        let parent = (child - 1) / 2;
        assert!(
            elements[parent] >= elements[child],
            "parent {} at {} is smaller than child {} at {} in {:?}",
            elements[parent],
            parent,
            elements[child],
            child,
            elements
        );
    }
}

/// Sorted copy of a slice, for multiset comparisons
pub fn sorted(values: &[i32]) -> Vec<i32> {
    let mut values = values.to_vec();
    values.sort_unstable();
    values
}
