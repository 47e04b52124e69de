//! # Todo Testing
//!
//! Testing utilities and helpers for the todo state-transition architecture.
//!
//! This crate provides:
//! - A fluent Given-When-Then builder for reducer tests
//! - Assertion helpers for pure reducers (no-op checks, action folding)
//!
//! ## Example
//!
//! ```ignore
//! use todo_testing::ReducerTest;
//!
//! #[test]
//! fn add_appends_item() {
//!     ReducerTest::new(TodoReducer)
//!         .given_state(TodoState::new())
//!         .when_action(TodoAction::Add { text: "Buy milk".to_owned() })
//!         .then_state(|state| {
//!             assert_eq!(state.len(), 1);
//!         })
//!         .run();
//! }
//! ```


// Re-export commonly used items
pub use reducer_test::{ReducerTest, assertions};
