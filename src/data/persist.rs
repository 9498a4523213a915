//! Atomic file replacement
//!
//! Output is staged in a temp file next to the destination and renamed over
//! it only once fully written, so a failed run never leaves a truncated
//! fixture behind under the final name.

use crate::error::Result;
use std::fs::File;
use std::path::Path;
use tempfile::Builder;

/// Write `path` through a staged temp file, returning the final size in bytes
pub fn write_atomically<F>(path: &Path, sync: bool, write: F) -> Result<u64>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut staged = Builder::new()
        .prefix(".str-fixtures-")
        .suffix(".tmp")
        .tempfile_in(dir)?;

    // On error the temp file is removed when `staged` drops
    write(staged.as_file_mut())?;

    if sync {
        staged.as_file().sync_all()?;
    }

    let file = staged.persist(path).map_err(|e| e.error)?;
    let len = file.metadata()?.len();
    drop(file);

    if sync {
        sync_dir(dir)?;
    }

    log::trace!("persisted {} ({} bytes)", path.display(), len);
    Ok(len)
}

/// Make the rename itself durable
#[cfg(unix)]
fn sync_dir(dir: &Path) -> Result<()> {
    File::open(dir)?.sync_all()?;
    Ok(())
}

#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FixtureError;
    use std::io::Write;

    fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_writes_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");

        let len = write_atomically(&path, true, |f| Ok(f.write_all(b"first")?)).unwrap();
        assert_eq!(len, 5);

        let len = write_atomically(&path, false, |f| Ok(f.write_all(b"second!")?)).unwrap();
        assert_eq!(len, 7);
        assert_eq!(std::fs::read(&path).unwrap(), b"second!");
        assert_eq!(entries(dir.path()), vec!["out.bin".to_string()]);
    }

    #[test]
    fn test_failed_write_keeps_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        std::fs::write(&path, b"good").unwrap();

        let result = write_atomically(&path, true, |f| {
            f.write_all(b"partial")?;
            Err(FixtureError::EmptyDataset)
        });

        assert!(result.is_err());
        assert_eq!(std::fs::read(&path).unwrap(), b"good");
        assert_eq!(entries(dir.path()), vec!["out.bin".to_string()]);
    }

    #[test]
    fn test_missing_directory_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let path = missing.join("out.bin");

        let result = write_atomically(&path, true, |f| Ok(f.write_all(b"x")?));

        assert!(matches!(result, Err(FixtureError::FileIo(_))));
        assert!(!path.exists());
        assert!(!missing.exists());
    }
}
