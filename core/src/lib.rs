//! # Todo Core
//!
//! Core trait for the todo state-transition architecture.
//!
//! This crate provides the fundamental abstraction for building a
//! unidirectional-data-flow application: a single pure function that maps the
//! current state and an action to the next state.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature, owned data
//! - **Action**: All possible inputs to a reducer, a closed enum
//! - **Reducer**: Pure function `(&State, Action) → State`
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - State is replaced, never mutated in place
//! - No hidden I/O: a reducer reads nothing but its parameters
//!
//! ## Example
//!
//! ```
//! use todo_core::Reducer;
//!
//! #[derive(Clone, Debug, Default, PartialEq, Eq)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &CounterState, action: CounterAction) -> CounterState {
//!         match action {
//!             CounterAction::Increment => CounterState { count: state.count + 1 },
//!             CounterAction::Decrement => CounterState { count: state.count - 1 },
//!         }
//!     }
//! }
//!
//! let reducer = CounterReducer;
//! let state = CounterState::default();
//! let next = reducer.reduce(&state, CounterAction::Increment);
//! assert_eq!(next.count, 1);
//! assert_eq!(state.count, 0); // the input state is untouched
//! ```

/// Reducer module - the core trait for business logic
///
/// Reducers are pure functions: `(&State, Action) → State`
///
/// They contain all business logic and are deterministic and testable. The
/// input state is taken by shared reference and never mutated; the returned
/// state replaces it wholesale in the store.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    ///
    /// # Contract
    ///
    /// `reduce` is pure and total:
    ///
    /// 1. It never mutates the input state
    /// 2. It returns a fully-formed next state for every action variant
    /// 3. It reads nothing outside its parameters and performs no I/O
    ///
    /// Totality over the action set comes from exhaustive matching on a
    /// closed enum rather than a catch-all arm.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TodoReducer {
    ///     type State = TodoState;
    ///     type Action = TodoAction;
    ///
    ///     fn reduce(&self, state: &TodoState, action: TodoAction) -> TodoState {
    ///         match action {
    ///             TodoAction::Add { text } => {
    ///                 // Append an item carrying the next fresh id
    ///             }
    ///             TodoAction::Toggle { id } => {
    ///                 // Flip completion on the matching item
    ///             }
    ///             TodoAction::Remove { id } => {
    ///                 // Drop the matching item, preserving order
    ///             }
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Compute the next state for an action
        ///
        /// # Arguments
        ///
        /// - `state`: Shared reference to the current state
        /// - `action`: The action to process
        ///
        /// # Returns
        ///
        /// The next state. For actions that do not apply (for example a
        /// reference to an id that no longer exists), this is an unchanged
        /// copy of the input.
        fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State;
    }
}

pub use reducer::Reducer;
