//! Reducer logic for the todo list.
//!
//! The reducer is the entire transition model: a pure function from the
//! current state and one action to the next state. It never mutates its
//! input, reads nothing outside its parameters, and handles every action
//! variant, so applying a sequence of actions is exactly a left fold.

use crate::types::{TodoAction, TodoId, TodoItem, TodoState};
use todo_core::Reducer;

/// Reducer for the todo list
#[derive(Clone, Debug)]
pub struct TodoReducer;

impl TodoReducer {
    /// Creates a new `TodoReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for TodoReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducer for TodoReducer {
    type State = TodoState;
    type Action = TodoAction;

    fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State {
        match action {
            TodoAction::Add { text } => {
                // The id comes from the state, never from the caller; text is
                // taken verbatim (blank rejection is the form's concern).
                let mut todos = state.todos.clone();
                todos.push(TodoItem::new(TodoId::new(state.next_id), text));

                TodoState {
                    todos,
                    next_id: state.next_id + 1,
                }
            },

            TodoAction::Toggle { id } => {
                let mut todos = state.todos.clone();
                if let Some(item) = todos.iter_mut().find(|item| item.id == id) {
                    item.toggle();
                }

                // Unknown id: nothing matched, the clone equals the input.
                TodoState {
                    todos,
                    next_id: state.next_id,
                }
            },

            TodoAction::Remove { id } => {
                let mut todos = state.todos.clone();
                todos.retain(|item| item.id != id);

                // next_id is not rolled back: removed ids stay retired.
                TodoState {
                    todos,
                    next_id: state.next_id,
                }
            },
        }
    }
}
