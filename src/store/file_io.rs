use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Name of the data file inside the data directory.
pub const DATA_FILE: &str = "tasks.json";

/// Suffix appended to the data file name for the pre-save backup.
pub const BACKUP_SUFFIX: &str = ".bak";

/// Error type for task store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("task title cannot be empty")]
    EmptyTitle,
    #[error("no task with id {0}")]
    TaskNotFound(String),
    #[error("could not parse {path}: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not back up {path}: {source}")]
    Backup {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Resolve the data directory: explicit override, then `$TICK_DATA_DIR`,
/// then `$XDG_DATA_HOME/tick`, then `~/.local/share/tick`.
pub fn data_dir(override_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir {
        return PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("TICK_DATA_DIR")
        && !dir.is_empty()
    {
        return PathBuf::from(dir);
    }
    if let Ok(xdg) = std::env::var("XDG_DATA_HOME")
        && !xdg.is_empty()
    {
        return PathBuf::from(xdg).join("tick");
    }
    dirs_home().join(".local").join("share").join("tick")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// The backup path for a data file: same name plus the fixed suffix.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(BACKUP_SUFFIX);
    path.with_file_name(name)
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Read the task collection from `path`.
///
/// A missing file is the expected first-run state and yields an empty
/// collection. A file that exists but does not parse is an error; the
/// file itself is left untouched.
pub fn read_tasks(path: &Path) -> Result<Vec<Task>, StoreError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };
    serde_json::from_str(&text).map_err(|e| StoreError::Corrupt {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the task collection to `path`.
///
/// If the file already exists its bytes are first copied verbatim to the
/// backup path, overwriting any previous backup. The write itself goes
/// through a temp file + rename, so a failed save leaves the previous
/// file intact. A write failure also appends the serialized payload to
/// the recovery log before returning the error.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<(), StoreError> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir).map_err(|e| StoreError::Write {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }

    if path.exists() {
        let bak = backup_path(path);
        fs::copy(path, &bak).map_err(|e| StoreError::Backup {
            path: bak,
            source: e,
        })?;
    }

    let mut json =
        serde_json::to_string_pretty(tasks).map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            source: io::Error::other(e),
        })?;
    json.push('\n');

    if let Err(e) = atomic_write(path, json.as_bytes()) {
        super::recovery::log_save_failure(path, &json, &e);
        return Err(StoreError::Write {
            path: path.to_path_buf(),
            source: e,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_tasks() -> Vec<Task> {
        vec![Task::new("Walk dog"), Task::new("Buy milk")]
    }

    #[test]
    fn backup_path_appends_suffix() {
        assert_eq!(
            backup_path(Path::new("/data/tasks.json")),
            PathBuf::from("/data/tasks.json.bak")
        );
    }

    #[test]
    fn atomic_write_creates_and_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("test.txt");

        atomic_write(&path, b"hello world").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");

        atomic_write(&path, b"goodbye").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "goodbye");
    }

    #[test]
    fn read_missing_file_is_empty() {
        let tmp = TempDir::new().unwrap();
        let tasks = read_tasks(&tmp.path().join("tasks.json")).unwrap();
        assert!(tasks.is_empty());
    }

    #[test]
    fn read_corrupt_file_errors_and_leaves_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.json");
        fs::write(&path, "not json {{{").unwrap();

        let err = read_tasks(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        // File bytes unchanged
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json {{{");
    }

    #[test]
    fn read_wrong_shape_is_corrupt() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.json");
        fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        let err = read_tasks(&path).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn write_then_read_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.json");
        let tasks = sample_tasks();

        write_tasks(&path, &tasks).unwrap();
        let loaded = read_tasks(&path).unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn first_write_creates_no_backup() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.json");

        write_tasks(&path, &sample_tasks()).unwrap();
        assert!(path.exists());
        assert!(!backup_path(&path).exists());
    }

    #[test]
    fn write_backs_up_previous_bytes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.json");

        write_tasks(&path, &sample_tasks()).unwrap();
        let before = fs::read(&path).unwrap();

        write_tasks(&path, &[Task::new("Only one")]).unwrap();
        let bak = fs::read(backup_path(&path)).unwrap();
        assert_eq!(bak, before);

        // Data file holds the new state
        let loaded = read_tasks(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "Only one");
    }

    #[test]
    fn backup_overwritten_on_each_save() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.json");

        write_tasks(&path, &[Task::new("one")]).unwrap();
        write_tasks(&path, &[Task::new("two")]).unwrap();
        let second = fs::read(&path).unwrap();
        write_tasks(&path, &[Task::new("three")]).unwrap();

        // Backup holds the second state, not the first
        assert_eq!(fs::read(backup_path(&path)).unwrap(), second);
    }

    #[test]
    fn write_creates_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("deep").join("nested").join("tasks.json");

        write_tasks(&path, &sample_tasks()).unwrap();
        assert_eq!(read_tasks(&path).unwrap().len(), 2);
    }

    #[test]
    fn write_backs_up_corrupt_content_verbatim() {
        // A corrupt file is preserved in the backup when the next save runs
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.json");
        fs::write(&path, "garbled ]]").unwrap();

        write_tasks(&path, &sample_tasks()).unwrap();
        assert_eq!(
            fs::read_to_string(backup_path(&path)).unwrap(),
            "garbled ]]"
        );
    }

    #[test]
    fn data_dir_prefers_override() {
        assert_eq!(data_dir(Some("/tmp/custom")), PathBuf::from("/tmp/custom"));
    }

    #[test]
    fn empty_array_round_trips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.json");
        write_tasks(&path, &[]).unwrap();
        assert!(read_tasks(&path).unwrap().is_empty());
        // The file is a JSON array
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.trim(), "[]");
    }
}
