//! Todo list built on the reducer architecture.
//!
//! The whole application is one pure transition model plus a thin terminal
//! shell around it:
//!
//! - Domain types ([`TodoState`], [`TodoItem`], [`TodoAction`]) and the
//!   [`TodoReducer`] transition function
//! - A store-driven presentation layer ([`TodoForm`], [`TodoList`], the
//!   command parser, and the [`App`] session loop)
//! - Testing with `ReducerTest` and property tests over action sequences
//!
//! # Quick Start
//!
//! ```no_run
//! use todo_app::{TodoAction, TodoReducer, TodoState};
//! use todo_runtime::Store;
//!
//! # async fn example() {
//! // Create the store around the initial state and the reducer
//! let store = Store::new(TodoState::new(), TodoReducer::new());
//!
//! // Add a todo
//! store.send(TodoAction::Add {
//!     text: "Buy milk".to_string(),
//! }).await;
//!
//! // Read state
//! let state = store.state(Clone::clone).await;
//! println!("Total todos: {}", state.len());
//! println!("Completed: {}", state.completed_count());
//! # }
//! ```

pub mod reducer;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use reducer::TodoReducer;
pub use types::{TodoAction, TodoId, TodoItem, TodoState};
pub use ui::{App, Command, CommandError, LineOutcome, TodoForm, TodoList, TodoStore, help_text};
