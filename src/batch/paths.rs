//! Resolving table entries against the table's directory.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Directory that relative table entries are resolved against.
pub fn table_base_dir(table: &Path) -> io::Result<PathBuf> {
    let table = fs::canonicalize(table)?;
    Ok(table
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| table.clone()))
}

/// Absolute entries are kept as written; relative ones are joined onto `base`
/// and normalised.
pub fn resolve_entry(base: &Path, value: &str) -> PathBuf {
    let path = Path::new(value);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        normalize(&base.join(path))
    }
}

/// Lexically removes `.` and folds `..` without touching the filesystem, so
/// it also works for destinations that do not exist yet.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::ParentDir => {
                if !matches!(out.components().next_back(), Some(Component::RootDir | Component::Prefix(_)) | None) {
                    out.pop();
                }
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
