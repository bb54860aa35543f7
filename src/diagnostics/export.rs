// SPDX-License-Identifier: MPL-2.0
//! Writing activity reports to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

/// Generates a default filename for activity reports.
///
/// Format: `postify_diagnostics_YYYYMMDD_HHMMSS.json`, in local time.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!("postify_diagnostics_{}.json", now.format("%Y%m%d_%H%M%S"))
}

/// Returns the default directory for saving reports.
///
/// Uses the user's Documents folder if available, otherwise the current directory.
#[must_use]
pub fn default_export_directory() -> PathBuf {
    dirs::document_dir().unwrap_or_else(|| std::env::current_dir().unwrap_or_default())
}

/// Writes `content` through a temporary sibling file, then renames it into place.
///
/// # Errors
///
/// Returns any I/O error from writing or renaming; the temporary file is removed.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;

    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_filename_has_prefix_and_extension() {
        let name = generate_default_filename();
        assert!(name.starts_with("postify_diagnostics_"));
        assert!(name.ends_with(".json"));
    }

    #[test]
    fn write_atomic_replaces_content_and_leaves_no_temp_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("report.json");

        write_atomic(&path, "{}").expect("first write");
        write_atomic(&path, "{\"a\":1}").expect("second write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "{\"a\":1}");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn write_atomic_fails_for_missing_directory() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("missing").join("report.json");
        assert!(write_atomic(&path, "{}").is_err());
    }
}
