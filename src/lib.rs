//! Galactic Cargo Management
//!
//! This crate provides the priority-ordering core of a cargo dispatch game:
//! shipments wait in a pool, get admitted into a binary max-heap, and are
//! dispatched most-urgent first.
//!
//! # Components
//!
//! - **[`PriorityCargoHeap`]**: array-backed max-heap with sift-up or
//!   full-rebuild insertion and sift-down extraction
//! - **[`AvailableShipmentPool`]**: shipments not yet admitted to the heap
//! - **[`CargoSession`]**: owns one pool and one heap and runs the
//!   insert / dispatch / view menu
//!
//! # Example
//!
//! ```rust
//! use galactic_cargo::{CargoSession, Outcome, SessionConfig};
//!
//! let mut session = CargoSession::new(SessionConfig::default());
//! assert_eq!(session.handle_line("1 23"), Outcome::Inserted(23));
//! assert_eq!(session.handle_line("1 35"), Outcome::Inserted(35));
//! assert_eq!(session.handle_line("2"), Outcome::Dispatched(35));
//! assert_eq!(session.handle_line("3"), Outcome::Viewed(vec![23]));
//! ```

pub mod cargo_heap;
pub mod config;
pub mod pool;
pub mod session;
pub mod traits;

// Re-export the main types for convenience
pub use cargo_heap::{InsertStrategy, PriorityCargoHeap};
pub use config::SessionConfig;
pub use pool::AvailableShipmentPool;
pub use session::{CargoError, CargoSession, Command, Outcome, COMPLETION_MESSAGE};
pub use traits::{HeapError, MaxHeap};
