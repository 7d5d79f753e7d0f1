use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::state::Theme;

/// Persisted user preferences. Read once at startup; written whenever the
/// theme is toggled. Kept separate from the task snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub theme: Theme,
}

/// Get the prefs file path, respecting XDG_CONFIG_HOME
pub fn prefs_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("tick").join("prefs.toml")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read preferences from a specific path.
/// If the file doesn't exist, returns defaults.
/// If the file is corrupted, backs it up as .bak and returns defaults.
pub fn read_prefs_from(path: &Path) -> Prefs {
    if !path.exists() {
        return Prefs::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<Prefs>(&content) {
            Ok(prefs) => prefs,
            Err(e) => {
                let bak = path.with_extension("toml.bak");
                let _ = fs::copy(path, &bak);
                eprintln!(
                    "warning: could not parse {} (backed up as {}): {}",
                    path.display(),
                    bak.display(),
                    e
                );
                Prefs::default()
            }
        },
        Err(_) => Prefs::default(),
    }
}

/// Read preferences from the default location.
pub fn read_prefs() -> Prefs {
    read_prefs_from(&prefs_path())
}

/// Write preferences to a specific path.
pub fn write_prefs_to(path: &Path, prefs: &Prefs) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content =
        toml::to_string_pretty(prefs).map_err(|e| std::io::Error::other(e.to_string()))?;
    fs::write(path, content)
}

/// Write preferences to the default location.
pub fn write_prefs(prefs: &Prefs) -> Result<(), std::io::Error> {
    write_prefs_to(&prefs_path(), prefs)
}
