use crate::config::DEFAULT_CONFIG_FILE;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const HABIT_EXTENSIONS: [&str; 2] = ["toml", "json"];

/// Habit record files under `root`, sorted. Hidden directories and the
/// project config file are skipped.
pub fn list_habit_files(root: &Path) -> Vec<PathBuf> {
    let mut files = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| is_habit_file(path))
        .collect::<Vec<_>>();
    files.sort();
    files
}

pub fn is_habit_file(path: &Path) -> bool {
    let is_config = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name == DEFAULT_CONFIG_FILE)
        .unwrap_or(false);
    let has_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| HABIT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false);
    has_extension && !is_config
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
