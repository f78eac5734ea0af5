//! # Module Store Testing
//!
//! Testing utilities and helpers for reducer-driven UI state modules.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then builder for reducers
//! - [`assertions`]: Assertion helpers for returned effects
//! - [`RecordingListener`]: A store listener that records what it was shown
//!
//! ## Example
//!
//! ```ignore
//! use module_store_testing::{ReducerTest, assertions};
//!
//! ReducerTest::new(CounterReducer)
//!     .given_state(CounterState { count: 0 })
//!     .when_action(CounterAction::Increment)
//!     .then_state(|state| assert_eq!(state.count, 1))
//!     .then_effects(assertions::assert_no_effects)
//!     .run();
//! ```

/// Listener that records projections of the state it is notified with
pub mod listener;

/// Fluent reducer testing
pub mod reducer_test;

// Re-export commonly used items
pub use listener::RecordingListener;
pub use reducer_test::{ReducerTest, assertions};
