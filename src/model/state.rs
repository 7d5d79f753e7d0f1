use std::fmt;

use serde::{Deserialize, Serialize};

/// Status filter applied before search and sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => write!(f, "all"),
            Filter::Completed => write!(f, "completed"),
            Filter::Pending => write!(f, "pending"),
        }
    }
}

/// Sort order for the projected view. `Date` orders by last update,
/// oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Date,
    #[default]
    Alphabetical,
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::Date => write!(f, "date"),
            SortBy::Alphabetical => write!(f, "alphabetical"),
        }
    }
}

/// Display theme preference, persisted separately from the task snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

/// Parse a filter string into a Filter
pub fn parse_filter(s: &str) -> Result<Filter, String> {
    match s {
        "all" => Ok(Filter::All),
        "completed" => Ok(Filter::Completed),
        "pending" => Ok(Filter::Pending),
        _ => Err(format!(
            "unknown filter '{}' (expected: all, completed, pending)",
            s
        )),
    }
}

/// Parse a sort string into a SortBy
pub fn parse_sort(s: &str) -> Result<SortBy, String> {
    match s {
        "date" => Ok(SortBy::Date),
        "alphabetical" => Ok(SortBy::Alphabetical),
        _ => Err(format!(
            "unknown sort '{}' (expected: date, alphabetical)",
            s
        )),
    }
}
