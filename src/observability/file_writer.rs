//! Rotating file writer with size-based rotation and backup retention.
//!
//! This module provides a log file writer that rotates the file when the next
//! write would push it past a size threshold, keeping a fixed number of
//! numbered backups (`zanban.log.1` is the most recent). This prevents
//! unbounded disk usage for log files.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Size-rotated log file.
///
/// The file is opened lazily on the first write, so construction succeeds even
/// if the directory does not exist yet. Wrap in a `Mutex` to share it with a
/// `tracing-subscriber` fmt layer.
///
/// # Rotation Strategy
///
/// 1. Track the file size, seeded from disk when the file is opened
/// 2. If a write would exceed the limit on a non-empty file, rotate:
///    - Drop `<name>.<max_backups>`
///    - Shift `<name>.<n>` to `<name>.<n + 1>`
///    - Rename the current file to `<name>.1`
/// 3. Reopen a fresh file and write
///
/// # Example
///
/// ```rust
/// use std::io::Write;
/// use zanban::observability::RotatingFile;
///
/// let dir = std::env::temp_dir().join("zanban-doc");
/// std::fs::create_dir_all(&dir)?;
/// let mut log = RotatingFile::new(dir.join("zanban.log"));
/// writeln!(log, "plugin loaded")?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct RotatingFile {
    /// Path to the primary log file.
    file_path: PathBuf,
    /// Rotation threshold in bytes.
    max_bytes: u64,
    /// Backups kept after rotation.
    max_backups: usize,
    /// Lazily-initialized file handle.
    file: Option<File>,
    /// Bytes currently in the primary file.
    written: u64,
}

impl RotatingFile {
    /// Creates a writer with the default limits (10 MB, 3 backups).
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with custom limits.
    #[must_use]
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            file: None,
            written: 0,
        }
    }

    /// Path of the `n`-th backup.
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.file_path.clone().into_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn open(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            let file = OpenOptions::new().create(true).append(true).open(&self.file_path)?;
            self.written = file.metadata().map(|m| m.len()).unwrap_or(0);
            self.file = Some(file);
        }
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "log file unavailable"))
    }

    /// Shifts backups and moves the current file to `<name>.1`.
    fn rotate(&mut self) -> io::Result<()> {
        self.file = None;
        self.written = 0;

        if self.max_backups == 0 {
            return remove_if_exists(&self.file_path);
        }

        remove_if_exists(&self.backup_path(self.max_backups))?;
        for n in (1..self.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        if self.file_path.exists() {
            fs::rename(&self.file_path, self.backup_path(1))?;
        }
        Ok(())
    }
}

fn remove_if_exists(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl Write for RotatingFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.open()?;
        let incoming = buf.len() as u64;
        if self.written > 0 && self.written + incoming > self.max_bytes {
            self.rotate()?;
        }

        let file = self.open()?;
        file.write_all(buf)?;
        self.written += incoming;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.as_mut().map_or(Ok(()), Write::flush)
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn test_writes_without_rotation_under_limit() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zanban.log");
        let mut log = RotatingFile::with_limits(path.clone(), 100, 2);

        log.write_all(b"one\n").unwrap();
        log.write_all(b"two\n").unwrap();
        log.flush().unwrap();

        assert_eq!(read(&path), "one\ntwo\n");
        assert!(!dir.path().join("zanban.log.1").exists());
    }

    #[test]
    fn test_rotates_and_caps_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zanban.log");
        let mut log = RotatingFile::with_limits(path.clone(), 6, 2);

        for line in ["aaaa\n", "bbbb\n", "cccc\n", "dddd\n"] {
            log.write_all(line.as_bytes()).unwrap();
        }
        log.flush().unwrap();

        assert_eq!(read(&path), "dddd\n");
        assert_eq!(read(&dir.path().join("zanban.log.1")), "cccc\n");
        assert_eq!(read(&dir.path().join("zanban.log.2")), "bbbb\n");
        assert!(!dir.path().join("zanban.log.3").exists());
    }

    #[test]
    fn test_existing_file_size_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zanban.log");
        fs::write(&path, "12345").unwrap();

        let mut log = RotatingFile::with_limits(path.clone(), 6, 1);
        log.write_all(b"xy").unwrap();

        assert_eq!(read(&path), "xy");
        assert_eq!(read(&dir.path().join("zanban.log.1")), "12345");
    }

    #[test]
    fn test_oversized_write_goes_to_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zanban.log");
        let mut log = RotatingFile::with_limits(path.clone(), 2, 1);

        log.write_all(b"much too long").unwrap();
        assert_eq!(read(&path), "much too long");
    }
}
