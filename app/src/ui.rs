//! Presentation layer: input form, list rendering, and command parsing.
//!
//! Everything here is a thin shell around the store. The components hold no
//! domain state of their own (the form's transient input buffer is the one
//! exception), re-derive what they display from the store after every
//! dispatch, and receive the store by explicit reference rather than through
//! any ambient context.

use crate::reducer::TodoReducer;
use crate::types::{TodoAction, TodoId, TodoState};
use std::str::FromStr;
use thiserror::Error;
use todo_runtime::Store;

/// The store type this UI drives
pub type TodoStore = Store<TodoState, TodoAction, TodoReducer>;

// ANSI SGR codes for the completed-item strike-through cue.
const STRIKE: &str = "\x1b[9m";
const RESET: &str = "\x1b[0m";

/// Input form for new todos
///
/// Owns the transient input buffer. Submitting trims the buffer and
/// dispatches [`TodoAction::Add`] only when the trimmed text is non-empty;
/// this is the only validation anywhere in the system. A rejected submit
/// leaves the buffer untouched so the user can edit instead of retyping.
#[derive(Clone, Debug, Default)]
pub struct TodoForm {
    input: String,
}

impl TodoForm {
    /// Creates a new form with an empty input buffer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            input: String::new(),
        }
    }

    /// Returns the current input buffer
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Replaces the input buffer
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Submits the form against the store
    ///
    /// Trims the buffer; if the trimmed text is non-empty, dispatches
    /// [`TodoAction::Add`] with it and clears the buffer. Blank input
    /// dispatches nothing and keeps the buffer.
    ///
    /// # Returns
    ///
    /// `true` if an action was dispatched
    pub async fn submit(&mut self, store: &TodoStore) -> bool {
        let text = self.input.trim();
        if text.is_empty() {
            tracing::debug!("Rejected blank todo text");
            return false;
        }

        store
            .send(TodoAction::Add {
                text: text.to_owned(),
            })
            .await;
        self.input.clear();
        true
    }
}

/// Renderer for the todo list
///
/// Pure presentation: a function of the state and nothing else. Completed
/// items show a checked box and struck-through text.
pub struct TodoList;

impl TodoList {
    /// Renders the list to a displayable string
    ///
    /// One line per item in insertion order, showing the id, a checkbox, and
    /// the text, followed by a completed/total summary line.
    #[must_use]
    pub fn render(state: &TodoState) -> String {
        if state.is_empty() {
            return "No todos yet.".to_owned();
        }

        let mut out = String::new();
        for item in state.todos() {
            let mark = if item.completed { "✓" } else { " " };
            if item.completed {
                out.push_str(&format!(
                    "  [{mark}] {} {STRIKE}{}{RESET}\n",
                    item.id, item.text
                ));
            } else {
                out.push_str(&format!("  [{mark}] {} {}\n", item.id, item.text));
            }
        }
        out.push_str(&format!(
            "Completed: {}/{}",
            state.completed_count(),
            state.len()
        ));
        out
    }
}

/// Errors produced when parsing an input line into a [`Command`]
///
/// These never reach the store; the loop renders them as a one-line hint and
/// keeps going.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line was empty after trimming
    #[error("empty command")]
    Empty,

    /// The first word is not a known command
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The command needs an id argument and none was given
    #[error("usage: {0} <id>")]
    MissingId(&'static str),

    /// The id argument is not a number
    #[error("invalid id: {0}")]
    InvalidId(String),
}

/// A parsed input line
///
/// Commands are the terminal's gestures: each maps to at most one action
/// dispatch. Ids are passed through as typed; whether they still exist is
/// the store's concern, not the parser's.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `add <text>`: submit new todo text through the form
    Add(String),
    /// `toggle <id>`: flip completion for an item
    Toggle(TodoId),
    /// `rm <id>` / `remove <id>`: delete an item
    Remove(TodoId),
    /// `list`: render the current list
    List,
    /// `help`: show usage
    Help,
    /// `quit` / `exit`: leave the session
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CommandError::Empty);
        }

        let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (trimmed, ""),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add(rest.to_owned())),
            "toggle" => parse_id("toggle", rest).map(Self::Toggle),
            "rm" | "remove" => parse_id("rm", rest).map(Self::Remove),
            "list" => Ok(Self::List),
            "help" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::UnknownCommand(keyword.to_owned())),
        }
    }
}

fn parse_id(command: &'static str, rest: &str) -> Result<TodoId, CommandError> {
    if rest.is_empty() {
        return Err(CommandError::MissingId(command));
    }

    rest.parse::<u64>()
        .map(TodoId::new)
        .map_err(|_| CommandError::InvalidId(rest.to_owned()))
}

/// Usage text for the interactive session
#[must_use]
pub const fn help_text() -> &'static str {
    "Commands:
  add <text>    Add Todo: append a new item
  toggle <id>   Flip completion for an item
  rm <id>       Remove: delete an item
  list          Render the current list
  help          Show this help
  quit          Exit"
}

/// Outcome of handling one input line
#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Text to display before reading the next line (may be empty)
    Output(String),
    /// The session is over
    Quit,
}

/// The interactive application
///
/// Owns the store and the form, and threads them to the components by
/// explicit reference. Each mutating command re-renders the list from the
/// store's state, so the display is always derived, never cached.
pub struct App {
    store: TodoStore,
    form: TodoForm,
}

impl App {
    /// Creates the application around an injected store
    #[must_use]
    pub const fn new(store: TodoStore) -> Self {
        Self {
            store,
            form: TodoForm::new(),
        }
    }

    /// Handles one line of input
    ///
    /// Blank lines produce empty output. Parse errors produce a hint.
    /// Gestures on ids that no longer exist dispatch anyway and the store
    /// ignores them, so the re-rendered list simply shows no change.
    pub async fn handle_line(&mut self, line: &str) -> LineOutcome {
        let command = match line.trim() {
            "" => return LineOutcome::Output(String::new()),
            trimmed => match trimmed.parse::<Command>() {
                Ok(command) => command,
                Err(error) => {
                    return LineOutcome::Output(format!("{error} (try 'help')"));
                },
            },
        };

        match command {
            Command::Add(text) => {
                self.form.set_input(text);
                if self.form.submit(&self.store).await {
                    LineOutcome::Output(self.render_list().await)
                } else {
                    LineOutcome::Output("Nothing added: todo text is empty.".to_owned())
                }
            },
            Command::Toggle(id) => {
                self.store.send(TodoAction::Toggle { id }).await;
                LineOutcome::Output(self.render_list().await)
            },
            Command::Remove(id) => {
                self.store.send(TodoAction::Remove { id }).await;
                LineOutcome::Output(self.render_list().await)
            },
            Command::List => LineOutcome::Output(self.render_list().await),
            Command::Help => LineOutcome::Output(help_text().to_owned()),
            Command::Quit => LineOutcome::Quit,
        }
    }

    async fn render_list(&self) -> String {
        self.store.state(TodoList::render).await
    }
}
