//! Domain types for the todo list.
//!
//! A todo list is an ordered collection of text items that can be added,
//! toggled complete, and removed. Identity is positional-independent: every
//! item carries an id assigned by the state at creation time, and ids are
//! never reused for the lifetime of the list.

/// Unique identifier for a todo item
///
/// Ids are assigned by [`TodoState`] when an item is added; callers never
/// mint their own. They are unique for the lifetime of the list, even across
/// removals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(u64);

impl TodoId {
    /// Creates a `TodoId` from its raw value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
///
/// `id` and `text` are fixed at creation; only `completed` changes, and only
/// through the transition model.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Text of the todo
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, not yet completed todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Flips the completion flag
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// State of the todo list
///
/// Items are kept in insertion order. `next_id` starts at 1 and is strictly
/// increasing; it is always greater than every id that has ever been issued,
/// which makes ids unique for the lifetime of the list.
///
/// Fields are crate-private: all mutation flows through the reducer, so the
/// ordering and id invariants cannot be broken from outside.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoState {
    /// All todos in insertion order
    pub(crate) todos: Vec<TodoItem>,
    /// The id the next added item will receive
    pub(crate) next_id: u64,
}

impl TodoState {
    /// Creates a new empty todo state
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Returns the todos in insertion order
    #[must_use]
    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    /// Returns the id the next added item will receive
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Returns the number of todos
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns `true` if the list has no todos
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Checks if a todo with this id exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.todos.iter().any(|t| t.id == id)
    }
}

impl Default for TodoState {
    fn default() -> Self {
        Self::new()
    }
}

/// Actions accepted by the todo transition model
///
/// This is the complete input vocabulary: every state change in the system is
/// one of these three. The enum is closed, so the reducer's match is total by
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new item carrying the state's next fresh id
    ///
    /// The text is taken verbatim; the transition model performs no
    /// validation. Blank-input rejection belongs to the presentation layer.
    Add {
        /// Text of the new todo
        text: String,
    },

    /// Flip the completion flag of the item with this id
    ///
    /// Unknown ids are ignored: the resulting state equals the input.
    Toggle {
        /// Todo to toggle
        id: TodoId,
    },

    /// Remove the item with this id, preserving the order of the rest
    ///
    /// Unknown ids are ignored: the resulting state equals the input.
    Remove {
        /// Todo to remove
        id: TodoId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_id_display() {
        let id = TodoId::new(7);
        assert_eq!(format!("{id}"), "7");
        assert_eq!(id.as_u64(), 7);
    }

    #[test]
    fn todo_item_new() {
        let item = TodoItem::new(TodoId::new(1), "Test todo".to_string());

        assert_eq!(item.id, TodoId::new(1));
        assert_eq!(item.text, "Test todo");
        assert!(!item.completed);
    }

    #[test]
    fn todo_item_toggle() {
        let mut item = TodoItem::new(TodoId::new(1), "Test".to_string());

        item.toggle();
        assert!(item.completed);

        item.toggle();
        assert!(!item.completed);
    }

    #[test]
    fn todo_state_starts_empty_with_next_id_one() {
        let state = TodoState::new();

        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
        assert_eq!(state.completed_count(), 0);
        assert_eq!(state.next_id(), 1);
        assert_eq!(state, TodoState::default());
    }

    #[test]
    fn todo_state_lookup() {
        let state = TodoState {
            todos: vec![
                TodoItem::new(TodoId::new(1), "One".to_string()),
                TodoItem::new(TodoId::new(2), "Two".to_string()),
            ],
            next_id: 3,
        };

        assert!(state.contains(TodoId::new(1)));
        assert!(!state.contains(TodoId::new(3)));
        assert_eq!(state.get(TodoId::new(2)).unwrap().text, "Two");
        assert!(state.get(TodoId::new(9)).is_none());
    }
}
