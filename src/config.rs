// Configuration: where habit data lives and a few display constants.
// There are no flags or config files; `Config::default()` is what the
// binary uses, and tests build a `Config` pointing into a temp dir.

use std::path::PathBuf;

/// File name used for persisted habit data, relative to the working directory.
pub const DATA_FILE: &str = "habits.json";

/// Format of persisted and displayed dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Width of section headers and separators.
pub const SCREEN_WIDTH: usize = 45;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    /// Build a config that stores data at `data_file`.
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        Config {
            data_file: data_file.into(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::with_data_file(DATA_FILE)
    }
}
