//! Type aliases for waymark core.
//!
//! Internal code imports its synchronization primitives from here so the
//! choice of implementation stays in one place.
//!
//! ## Concurrency Primitives
//!
//! Compiled filters are immutable and need no locking. The only lock in the
//! crate guards the in-memory [`RecordingSink`](crate::filter::RecordingSink).
//! `parking_lot` is used because its mutex never poisons: a panicking test
//! thread does not break the sink for the others.
//!
//! ### Usage
//!
//! ```rust
//! use waymark_core::alias::PMutex;
//!
//! let lines = PMutex::new(Vec::<String>::new());
//! lines.lock().push("compiled".to_string());  // No unwrap needed!
//! assert_eq!(lines.lock().len(), 1);
//! ```

// ============ Concurrency Primitives ============

/// Non-poisoning mutex (parking_lot implementation).
pub use parking_lot::Mutex as PMutex;

/// Mutex guard for [`PMutex`].
pub use parking_lot::MutexGuard as PMutexGuard;
