use crate::model::state::{Filter, SortBy};
use crate::model::task::Task;

/// Derive the list of tasks to display.
///
/// Runs the pipeline in a fixed order: status filter, then text search,
/// then sort. The search term matches case-insensitively as a substring
/// of the title or description; an empty term matches everything. The
/// backing collection is never reordered — only the returned view is.
pub fn visible_tasks<'a>(
    tasks: &'a [Task],
    filter: Filter,
    sort_by: SortBy,
    search: &str,
) -> Vec<&'a Task> {
    let needle = search.to_lowercase();

    let mut view: Vec<&Task> = tasks
        .iter()
        .filter(|task| match filter {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Pending => !task.completed,
        })
        .filter(|task| {
            needle.is_empty()
                || task.title.to_lowercase().contains(&needle)
                || task.description.to_lowercase().contains(&needle)
        })
        .collect();

    match sort_by {
        // Oldest update first; ties keep their original relative order.
        SortBy::Date => view.sort_by_key(|task| task.datetime),
        SortBy::Alphabetical => {
            view.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }

    view
}
