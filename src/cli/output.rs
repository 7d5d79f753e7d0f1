use serde::Serialize;

use crate::model::state::{Filter, SortBy, Theme};
use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub datetime: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct ListJson {
    pub filter: Filter,
    pub sort_by: SortBy,
    pub tasks: Vec<TaskJson>,
}

#[derive(Serialize)]
pub struct FilterJson {
    pub filter: Filter,
}

#[derive(Serialize)]
pub struct SortJson {
    pub sort_by: SortBy,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: Theme,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        title: task.title.clone(),
        description: task.description.clone(),
        datetime: task.datetime.to_rfc3339(),
        completed: task.completed,
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    let check = if task.completed { 'x' } else { ' ' };
    format!("[{}] {} {}", check, task.id, task.title)
}

/// Format detailed task view
pub fn format_task_detail(task: &Task) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format_task_line(task));
    if !task.description.is_empty() {
        for line in task.description.lines() {
            lines.push(format!("  {}", line));
        }
    }
    lines.push(format!(
        "  updated: {}",
        task.datetime.format("%Y-%m-%d %H:%M")
    ));
    lines
}
