//! Pre-flight checks and the moves themselves.

use super::MoveSummary;
use crate::error::{AppError, Result};
use crate::models::MoveRecord;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Sources that are not existing files, in table order.
pub fn missing_sources(records: &[MoveRecord]) -> Vec<PathBuf> {
    records
        .iter()
        .filter(|r| !r.source.is_file())
        .map(|r| r.source.clone())
        .collect()
}

/// Fails with every missing source if any row cannot run.
pub fn preflight(records: &[MoveRecord]) -> Result<()> {
    let missing = missing_sources(records);
    if missing.is_empty() {
        return Ok(());
    }

    let listing: Vec<String> = missing.iter().map(|p| p.display().to_string()).collect();
    tracing::error!("Missing source files:\n{}", listing.join("\n"));
    Err(AppError::MissingSources(missing))
}

/// Performs every move in order, stopping at the first I/O failure.
///
/// Missing destination directories are created, and an existing destination
/// file is deleted before its replacement moves in.
pub fn apply(records: &[MoveRecord]) -> Result<MoveSummary> {
    apply_with(records, |src, dst| fs::rename(src, dst))
}

/// [`apply`] with the rename step supplied by the caller.
pub fn apply_with<F>(records: &[MoveRecord], rename: F) -> Result<MoveSummary>
where
    F: Fn(&Path, &Path) -> io::Result<()>,
{
    let mut summary = MoveSummary::default();

    for record in records {
        let (src, dst) = (&record.source, &record.destination);

        if src == dst {
            info!("Source and destination are the same file, leaving in place: {}", src.display());
            continue;
        }

        if let Some(parent) = dst.parent() {
            if !parent.exists() {
                info!("Creating destination directory: {}", parent.display());
                fs::create_dir_all(parent)?;
                summary.directories_created += 1;
            }
        }

        // A case-only rename on a case-insensitive filesystem names the source itself.
        if dst.is_file() && !same_file(src, dst) {
            fs::remove_file(dst)?;
            summary.replaced += 1;
        }

        info!("Moving: {} -> {}", src.display(), dst.display());
        move_file(src, dst, &rename)?;
        summary.moved += 1;
    }

    Ok(summary)
}

/// True when both paths name the same file on disk.
pub fn same_file(a: &Path, b: &Path) -> bool {
    a == b || same_file_on_disk(a, b)
}

#[cfg(unix)]
fn same_file_on_disk(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(ma), Ok(mb)) => ma.dev() == mb.dev() && ma.ino() == mb.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_file_on_disk(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => false,
    }
}

/// Renames `src` onto `dst`, copying then deleting when they sit on different filesystems.
fn move_file<F>(src: &Path, dst: &Path, rename: &F) -> io::Result<()>
where
    F: Fn(&Path, &Path) -> io::Result<()>,
{
    match rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::CrossesDevices => {
            warn!("Rename across filesystems, copying instead: {}", e);
            fs::copy(src, dst)?;
            fs::remove_file(src)
        },
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_sources_keeps_table_order() {
        let dir = TempDir::new().unwrap();
        let present = dir.path().join("present.txt");
        fs::write(&present, "x").unwrap();
        let a_dir = dir.path().join("a_dir");
        fs::create_dir(&a_dir).unwrap();

        let records = vec![
            MoveRecord::new(dir.path().join("z.txt"), dir.path().join("1")),
            MoveRecord::new(&present, dir.path().join("2")),
            MoveRecord::new(&a_dir, dir.path().join("3")),
            MoveRecord::new(dir.path().join("b.txt"), dir.path().join("4")),
        ];

        assert_eq!(
            missing_sources(&records),
            vec![dir.path().join("z.txt"), a_dir, dir.path().join("b.txt")]
        );
    }

    #[test]
    fn test_preflight_passes_when_all_present() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("a.txt");
        fs::write(&src, "x").unwrap();

        assert!(preflight(&[MoveRecord::new(&src, dir.path().join("b.txt"))]).is_ok());
        assert!(preflight(&[]).is_ok());
    }

    #[test]
    fn test_apply_creates_dirs_and_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "alpha").unwrap();
        fs::write(&b, "beta").unwrap();
        let existing = dir.path().join("taken.txt");
        fs::write(&existing, "old").unwrap();

        let records = vec![
            MoveRecord::new(&a, dir.path().join("x").join("y").join("a.txt")),
            MoveRecord::new(&b, &existing),
        ];
        let summary = apply(&records).unwrap();

        assert_eq!(
            summary,
            MoveSummary { moved: 2, directories_created: 1, replaced: 1 }
        );
        assert!(!a.exists());
        assert!(!b.exists());
        assert_eq!(fs::read_to_string(dir.path().join("x/y/a.txt")).unwrap(), "alpha");
        assert_eq!(fs::read_to_string(&existing).unwrap(), "beta");
    }

    #[test]
    fn test_apply_colliding_destinations_last_row_wins() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "one").unwrap();
        fs::write(&second, "two").unwrap();
        let target = dir.path().join("same.txt");

        let records = vec![MoveRecord::new(&first, &target), MoveRecord::new(&second, &target)];
        apply(&records).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "two");
        assert!(!first.exists());
        assert!(!second.exists());
    }

    #[test]
    fn test_apply_stops_at_first_failure_without_rollback() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let c = dir.path().join("c.txt");
        fs::write(&a, "alpha").unwrap();
        fs::write(&c, "gamma").unwrap();

        // The second source vanished after pre-flight.
        let records = vec![
            MoveRecord::new(&a, dir.path().join("moved_a.txt")),
            MoveRecord::new(dir.path().join("gone.txt"), dir.path().join("moved_b.txt")),
            MoveRecord::new(&c, dir.path().join("moved_c.txt")),
        ];
        let result = apply(&records);

        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(dir.path().join("moved_a.txt").exists());
        assert!(c.exists());
        assert!(!dir.path().join("moved_c.txt").exists());
    }

    #[test]
    fn test_same_source_and_destination_keeps_file() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        fs::write(&a, "precious").unwrap();

        let summary = apply(&[MoveRecord::new(&a, &a)]).unwrap();

        assert_eq!(summary, MoveSummary::default());
        assert_eq!(fs::read_to_string(&a).unwrap(), "precious");
    }

    #[test]
    fn test_same_file_detection() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "a").unwrap();
        fs::write(&b, "b").unwrap();

        assert!(same_file(&a, &a));
        assert!(same_file(&a, &dir.path().join(".").join("a.txt")));
        assert!(!same_file(&a, &b));
        assert!(!same_file(&a, &dir.path().join("missing.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn test_hard_link_counts_as_same_file_and_keeps_content() {
        let dir = TempDir::new().unwrap();
        let a = dir.path().join("a.txt");
        let alias = dir.path().join("alias.txt");
        fs::write(&a, "shared").unwrap();
        fs::hard_link(&a, &alias).unwrap();

        assert!(same_file(&a, &alias));

        let summary = apply(&[MoveRecord::new(&a, &alias)]).unwrap();

        assert_eq!(summary.replaced, 0);
        assert_eq!(fs::read_to_string(&alias).unwrap(), "shared");
    }

    #[test]
    fn test_cross_device_rename_falls_back_to_copy() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("other").join("dst.txt");
        fs::write(&src, "payload").unwrap();

        let summary = apply_with(&[MoveRecord::new(&src, &dst)], |_, _| {
            Err(io::Error::from(io::ErrorKind::CrossesDevices))
        })
        .unwrap();

        assert_eq!(summary.moved, 1);
        assert!(!src.exists());
        assert_eq!(fs::read_to_string(&dst).unwrap(), "payload");
    }

    #[test]
    fn test_other_rename_errors_propagate_without_copy() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.txt");
        let dst = dir.path().join("dst.txt");
        fs::write(&src, "payload").unwrap();

        let result = apply_with(&[MoveRecord::new(&src, &dst)], |_, _| {
            Err(io::Error::from(io::ErrorKind::PermissionDenied))
        });

        assert!(matches!(result, Err(AppError::Io(_))));
        assert!(src.exists());
        assert!(!dst.exists());
    }
}
