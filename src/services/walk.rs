//! Lazy recursive file walk shared by the indexer scan and directory
//! validation.
//!
//! The walk yields regular files one at a time, so callers decide whether
//! to drain it serially or collect candidates and fan the per-file work out
//! across rayon workers. Unreadable entries are logged and skipped; only a
//! missing or unreadable root fails construction.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Depth-first iterator over the regular files beneath a root directory.
///
/// Symbolic links are not followed: a link to a directory is neither
/// descended into nor yielded, matching the scan contract of visiting only
/// regular files.
pub struct FileWalk {
    stack: Vec<fs::ReadDir>,
}

impl FileWalk {
    /// Open a walk rooted at `root`.
    ///
    /// # Errors
    /// Fails when the root does not exist, is not a directory, or cannot
    /// be opened; per-entry failures during iteration never surface here.
    pub fn new(root: &Path) -> io::Result<Self> {
        let metadata = fs::metadata(root)?;
        if !metadata.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("not a directory: {}", root.display()),
            ));
        }

        Ok(Self {
            stack: vec![fs::read_dir(root)?],
        })
    }
}

impl Iterator for FileWalk {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let reader = self.stack.last_mut()?;

            let entry = match reader.next() {
                Some(Ok(entry)) => entry,
                Some(Err(err)) => {
                    log::warn!("Skipping unreadable directory entry: {err}");
                    continue;
                }
                None => {
                    self.stack.pop();
                    continue;
                }
            };

            let path = entry.path();
            let file_type = match entry.file_type() {
                Ok(t) => t,
                Err(err) => {
                    log::warn!("Skipping {}: {err}", path.display());
                    continue;
                }
            };

            if file_type.is_dir() {
                match fs::read_dir(&path) {
                    Ok(reader) => self.stack.push(reader),
                    Err(err) => log::warn!("Skipping directory {}: {err}", path.display()),
                }
                continue;
            }

            if file_type.is_file() {
                return Some(path);
            }
            // Symlinks and special files fall through and are ignored.
        }
    }
}

/// Drain a walk into a sorted candidate list.
///
/// Sorting makes downstream behavior independent of readdir ordering; the
/// parallel fan-out reorders completion anyway, so this only pins the
/// serial paths.
pub fn collect_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = FileWalk::new(root)?.collect();
    files.sort();
    Ok(files)
}
