use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tk", about = concat!("[v] tick v", env!("CARGO_PKG_VERSION"), " - your todo list in the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Use a different data directory
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),
    /// Replace a task's title and description
    Edit(EditArgs),
    /// Remove a task
    Rm(RmArgs),
    /// Toggle a task between pending and completed
    Toggle(ToggleArgs),
    /// List tasks through the current filter and sort
    List(ListArgs),
    /// Show task details
    Show(ShowArgs),
    /// Show or set the status filter
    Filter(FilterArgs),
    /// Show or set the sort order
    Sort(SortArgs),
    /// Show or toggle the display theme
    Theme(ThemeArgs),
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    pub title: String,
    /// Task description
    #[arg(default_value = "")]
    pub description: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task ID
    pub id: i64,
    /// New title
    pub title: String,
    /// New description
    #[arg(default_value = "")]
    pub description: String,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task ID
    pub id: i64,
}

#[derive(Args)]
pub struct ToggleArgs {
    /// Task ID
    pub id: i64,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Only show tasks whose title or description contains this text
    #[arg(long, default_value = "")]
    pub search: String,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Task ID
    pub id: i64,
}

// ---------------------------------------------------------------------------
// View-selection and preference args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct FilterArgs {
    /// New filter (all, completed, pending); omit to show the current one
    pub value: Option<String>,
}

#[derive(Args)]
pub struct SortArgs {
    /// New sort order (date, alphabetical); omit to show the current one
    pub value: Option<String>,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// Switch between light and dark
    #[arg(long)]
    pub toggle: bool,
}
