use std::path::{Path, PathBuf};

use chrono::Local;

use crate::io::snapshot::{self, Snapshot};
use crate::model::state::{Filter, SortBy};
use crate::model::task::Task;

/// Single source of truth for tasks and view-selection state.
///
/// Constructed explicitly via [`TaskStore::load`]; there is no ambient
/// global instance. Every mutation serializes the durable state back to
/// the data directory. If a write fails, the in-memory state stays
/// authoritative for the running session and a warning goes to stderr.
pub struct TaskStore {
    state: Snapshot,
    data_dir: PathBuf,
}

impl TaskStore {
    /// Load the persisted snapshot from `data_dir`. A missing or corrupt
    /// record yields the empty default state rather than an error.
    pub fn load(data_dir: &Path) -> TaskStore {
        TaskStore {
            state: snapshot::read_snapshot(data_dir),
            data_dir: data_dir.to_path_buf(),
        }
    }

    /// The task collection, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn filter(&self) -> Filter {
        self.state.filter
    }

    pub fn sort_by(&self) -> SortBy {
        self.state.sort_by
    }

    /// Find a task by id.
    pub fn get(&self, id: i64) -> Option<&Task> {
        self.state.tasks.iter().find(|t| t.id == id)
    }

    /// Add a new task at the end of the collection and return it.
    /// Empty titles and descriptions are accepted.
    pub fn add(&mut self, title: String, description: String) -> Task {
        let task = Task::new(self.next_id(), title, description);
        self.state.tasks.push(task.clone());
        self.persist();
        task
    }

    /// Replace a task's title and description, stamp it with the current
    /// time, and reset `completed` to false. No-op on an unknown id.
    pub fn edit(&mut self, id: i64, title: String, description: String) {
        let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        task.title = title;
        task.description = description;
        task.datetime = Local::now();
        task.completed = false;
        self.persist();
    }

    /// Remove the task with the given id. No-op on an unknown id.
    pub fn remove(&mut self, id: i64) {
        let before = self.state.tasks.len();
        self.state.tasks.retain(|t| t.id != id);
        if self.state.tasks.len() != before {
            self.persist();
        }
    }

    /// Flip a task's completed flag, leaving its timestamp untouched.
    /// No-op on an unknown id.
    pub fn toggle_completed(&mut self, id: i64) {
        let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        task.completed = !task.completed;
        self.persist();
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.state.filter = filter;
        self.persist();
    }

    pub fn set_sort(&mut self, sort_by: SortBy) {
        self.state.sort_by = sort_by;
        self.persist();
    }

    /// Ids follow the creation clock (milliseconds) but always move past
    /// the highest existing id, so rapid successive adds cannot collide.
    fn next_id(&self) -> i64 {
        let stamp = Local::now().timestamp_millis();
        let max = self.state.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        stamp.max(max + 1)
    }

    fn persist(&self) {
        if let Err(e) = snapshot::write_snapshot(&self.data_dir, &self.state) {
            eprintln!("warning: could not persist task store: {}", e);
        }
    }
}
