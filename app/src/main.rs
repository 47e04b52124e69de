//! Interactive todo session.
//!
//! Reads commands line by line from stdin, dispatches the corresponding
//! actions through the store, and re-renders the list after every change.

use std::io::Write;

use todo_app::{App, LineOutcome, TodoReducer, TodoState, help_text};
use todo_runtime::Store;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_app=info,todo_runtime=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== ToDo App ===\n");
    println!("{}\n", help_text());

    let store = Store::new(TodoState::new(), TodoReducer::new());
    let mut app = App::new(store);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        match app.handle_line(&line).await {
            LineOutcome::Output(output) => {
                if !output.is_empty() {
                    println!("{output}");
                }
            },
            LineOutcome::Quit => break,
        }
        prompt()?;
    }

    println!("Bye.");
    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}
