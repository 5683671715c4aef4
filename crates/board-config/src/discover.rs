//! Discovery of the `board.yaml` configuration file.
//!
//! An explicit path wins, then the `PBOARD_CONFIG` environment variable,
//! then the nearest `board.yaml` found by walking up from the start
//! directory.

use std::path::{Path, PathBuf};

/// The name of the board configuration file.
pub const CONFIG_FILE_NAME: &str = "board.yaml";

/// The environment variable that can override the config file location.
pub const CONFIG_ENV: &str = "PBOARD_CONFIG";

/// Walk up the directory tree from `start` looking for `board.yaml`.
///
/// Returns `None` if the filesystem root is reached without finding one.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().ok()?;

    let mut current = start.as_path();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent;
            }
            _ => break, // Reached filesystem root.
        }
    }

    None
}

/// Resolve which config file to use.
///
/// Priority: `explicit` > `PBOARD_CONFIG` > nearest `board.yaml` above
/// `start` > `start/board.yaml` (which may not exist yet).
pub fn resolve_config_path(explicit: Option<&Path>, start: &Path) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        if !env_path.is_empty() {
            return PathBuf::from(env_path);
        }
    }

    find_config_file(start).unwrap_or_else(|| start.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&file, "").unwrap();

        let found = find_config_file(dir.path()).unwrap().canonicalize().unwrap();
        assert_eq!(found, file.canonicalize().unwrap());
    }

    #[test]
    fn test_find_config_in_child() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&file, "").unwrap();
        let child = dir.path().join("a").join("b");
        std::fs::create_dir_all(&child).unwrap();

        let found = find_config_file(&child).unwrap().canonicalize().unwrap();
        assert_eq!(found, file.canonicalize().unwrap());
    }

    #[test]
    fn test_explicit_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let explicit = dir.path().join("custom.yaml");
        assert_eq!(resolve_config_path(Some(&explicit), dir.path()), explicit);
    }

    #[test]
    fn test_missing_directory_is_not_found() {
        assert!(find_config_file(Path::new("/nonexistent/board/dir")).is_none());
    }
}
