use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;

/// Self-documenting header written at the top of a new recovery log.
const FILE_HEADER: &str = "\
# tick recovery log — payloads that could not be saved normally.
# Each entry is the full JSON content of a failed save.
# Safe to delete once recovered.

";

/// Return the path to the recovery log, next to the data file.
pub fn recovery_log_path(data_path: &Path) -> PathBuf {
    data_path
        .parent()
        .unwrap_or(Path::new("."))
        .join(".recovery.log")
}

/// Append a failed save's payload to the recovery log.
/// Errors are swallowed and printed to stderr; recovery logging must never
/// mask the original failure.
pub fn log_save_failure(data_path: &Path, payload: &str, cause: &io::Error) {
    if let Err(e) = log_save_failure_inner(data_path, payload, cause) {
        eprintln!("warning: could not write to recovery log: {}", e);
    }
}

fn log_save_failure_inner(
    data_path: &Path,
    payload: &str,
    cause: &io::Error,
) -> io::Result<()> {
    let path = recovery_log_path(data_path);
    let needs_header = !path.exists();

    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
    if needs_header {
        file.write_all(FILE_HEADER.as_bytes())?;
    }

    let mut entry = format!(
        "## {} — save to {} failed: {}\n",
        Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        data_path.display(),
        cause,
    );
    entry.push_str(payload);
    if !payload.ends_with('\n') {
        entry.push('\n');
    }
    entry.push('\n');

    file.write_all(entry.as_bytes())?;
    Ok(())
}
