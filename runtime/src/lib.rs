//! # Todo Runtime
//!
//! Runtime implementation for the todo state-transition architecture.
//!
//! This crate provides the Store runtime that owns the authoritative state
//! and coordinates reducer execution.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that holds state and serializes dispatch
//! - **Dispatch**: `send` runs the reducer under a write lock and installs
//!   the returned state in place of the old one
//!
//! ## Example
//!
//! ```ignore
//! use todo_runtime::Store;
//! use todo_core::Reducer;
//!
//! let store = Store::new(initial_state, my_reducer);
//!
//! // Send an action
//! store.send(Action::DoSomething).await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use std::sync::Arc;
use todo_core::Reducer;
use tokio::sync::RwLock;

/// Store runtime for coordinating reducer execution.
pub mod store {
    use super::{Arc, Reducer, RwLock};
    use std::marker::PhantomData;

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock` for concurrent access)
    /// 2. Reducer (business logic)
    ///
    /// Dispatch is serialized: each `send` acquires the write lock, runs the
    /// reducer, and replaces the state with the reducer's output before the
    /// next action is processed. Actions therefore apply in dispatch order,
    /// one transition in flight at a time.
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(TodoState::new(), TodoReducer);
    ///
    /// store.send(TodoAction::Add {
    ///     text: "Buy milk".to_owned(),
    /// }).await;
    /// ```
    pub struct Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        _action: PhantomData<fn(A)>,
    }

    impl<S, A, R> Store<S, A, R>
    where
        R: Reducer<State = S, Action = A>,
    {
        /// Create a new store with initial state and reducer
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        ///
        /// # Returns
        ///
        /// A new Store instance ready to process actions
        #[must_use]
        pub fn new(initial_state: S, reducer: R) -> Self {
            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                _action: PhantomData,
            }
        }

        /// Send an action to the store
        ///
        /// This is the primary way to interact with the store:
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action)
        /// 3. Installs the returned state in place of the old one
        ///
        /// The reducer executes synchronously while holding the write lock,
        /// so concurrent `send` calls serialize at the reducer and apply in
        /// lock-acquisition order. `send` is infallible: actions that do not
        /// apply (a stale id, for example) reduce to an unchanged state.
        ///
        /// # Arguments
        ///
        /// - `action`: The action to process
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A)
        where
            S: PartialEq,
        {
            tracing::debug!("Processing action");
            metrics::counter!("store.actions.total").increment(1);

            let mut state = self.state.write().await;
            tracing::trace!("Acquired write lock on state");

            let span = tracing::debug_span!("reducer_execution");
            let _enter = span.enter();

            let start = std::time::Instant::now();
            let next = self.reducer.reduce(&state, action);
            let duration = start.elapsed();
            metrics::histogram!("store.reducer.duration_seconds").record(duration.as_secs_f64());

            if next == *state {
                // Unchanged output: the action did not apply (stale id or
                // equivalent no-op).
                tracing::debug!("Action left state unchanged");
                metrics::counter!("store.actions.noop").increment(1);
            }

            *state = next;
            tracing::trace!("Installed new state");
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released
        /// promptly:
        ///
        /// ```ignore
        /// let todo_count = store.state(|s| s.len()).await;
        /// ```
        ///
        /// # Arguments
        ///
        /// - `f`: Closure that receives a reference to state and returns a value
        ///
        /// # Returns
        ///
        /// The value returned by the closure
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }
    }

    impl<S, A, R> Clone for Store<S, A, R>
    where
        R: Reducer<State = S, Action = A> + Clone,
    {
        /// Clones share the same underlying state
        ///
        /// Cloning a store clones handles, not data: all clones observe and
        /// mutate the same state cell.
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                _action: PhantomData,
            }
        }
    }
}

// Re-export for convenience
pub use store::Store;

// Test module
#[cfg(test)]
mod tests {
    use super::*;

    // Test state
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct TestState {
        value: i32,
        history: Vec<i32>,
    }

    impl TestState {
        fn new() -> Self {
            Self {
                value: 0,
                history: Vec::new(),
            }
        }
    }

    // Test action
    #[derive(Debug, Clone)]
    enum TestAction {
        Increment,
        Decrement,
        NoOp,
    }

    // Test reducer
    #[derive(Debug, Clone)]
    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;

        fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State {
            match action {
                TestAction::Increment => {
                    let value = state.value + 1;
                    let mut history = state.history.clone();
                    history.push(value);
                    TestState { value, history }
                },
                TestAction::Decrement => {
                    let value = state.value - 1;
                    let mut history = state.history.clone();
                    history.push(value);
                    TestState { value, history }
                },
                TestAction::NoOp => state.clone(),
            }
        }
    }

    #[tokio::test]
    async fn test_store_creation() {
        let store = Store::new(TestState::new(), TestReducer);

        let value = store.state(|s| s.value).await;
        assert_eq!(value, 0);
    }

    #[tokio::test]
    async fn test_send_action() {
        let store = Store::new(TestState::new(), TestReducer);

        store.send(TestAction::Increment).await;

        let value = store.state(|s| s.value).await;
        assert_eq!(value, 1);
    }

    #[tokio::test]
    async fn test_actions_apply_in_dispatch_order() {
        let store = Store::new(TestState::new(), TestReducer);

        store.send(TestAction::Increment).await;
        store.send(TestAction::Increment).await;
        store.send(TestAction::Decrement).await;

        let (value, history) = store.state(|s| (s.value, s.history.clone())).await;
        assert_eq!(value, 1);
        assert_eq!(history, vec![1, 2, 1]);
    }

    #[tokio::test]
    async fn test_noop_action_leaves_state_unchanged() {
        let store = Store::new(TestState::new(), TestReducer);

        store.send(TestAction::Increment).await;
        let before = store.state(Clone::clone).await;

        store.send(TestAction::NoOp).await;

        let after = store.state(Clone::clone).await;
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = Store::new(TestState::new(), TestReducer);
        let clone = store.clone();

        store.send(TestAction::Increment).await;

        let value = clone.state(|s| s.value).await;
        assert_eq!(value, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    #[allow(clippy::expect_used)] // Test code can use expect
    async fn test_concurrent_sends_serialize() {
        let store = Store::new(TestState::new(), TestReducer);

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.send(TestAction::Increment).await;
                })
            })
            .collect();

        for handle in handles {
            handle.await.expect("send task panicked");
        }

        // Every transition observed a consistent snapshot: no lost updates.
        let (value, history) = store.state(|s| (s.value, s.history.clone())).await;
        assert_eq!(value, 16);
        assert_eq!(history, (1..=16).collect::<Vec<_>>());
    }
}
