//! Plain-text rendering of the controller state.
//!
//! One pure function from state to a display string, re-run after every
//! reconciliation. The layout mirrors the page it replaces: a loading
//! line while the first fetch is pending, a "No tasks found." placeholder
//! for an empty list, and per-item blocks with status and action hints.
//! The complete action is hidden once an item is completed; delete is
//! always offered.

use std::fmt::Write;

use crate::controller::TodoListClient;
use crate::types::{Priority, TodoItem};

pub const EMPTY_LIST_TEXT: &str = "No tasks found.";
pub const LOADING_TEXT: &str = "Loading...";

pub fn render(client: &TodoListClient) -> String {
    if client.is_loading() {
        return LOADING_TEXT.to_string();
    }

    let mut out = String::from("Todo List\n");
    if client.items().is_empty() {
        out.push_str(EMPTY_LIST_TEXT);
        out.push('\n');
        return out;
    }

    for item in client.items() {
        render_item(&mut out, item);
    }
    out
}

fn render_item(out: &mut String, item: &TodoItem) {
    let status = if item.completed { "Completed" } else { "Pending" };
    let _ = writeln!(out, "\n{}", item.title);
    let _ = writeln!(out, "  {}", item.description);
    let _ = writeln!(out, "  Status: {status}");
    if !item.category.is_empty() {
        let _ = writeln!(out, "  Category: {}", item.category);
    }
    let _ = writeln!(out, "  Priority: {}", priority_label(item.priority));
    if let Some(due) = item.due_date {
        let _ = writeln!(out, "  Due: {due}");
    }
    if item.completed {
        let _ = writeln!(out, "  [delete]");
    } else {
        let _ = writeln!(out, "  [complete] [delete]");
    }
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "Low",
        Priority::Medium => "Medium",
        Priority::High => "High",
    }
}
