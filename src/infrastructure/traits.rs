//! Filesystem boundary used when loading entry files
//!
//! Services only see this trait, so tests can hand them in-memory entry files.

use std::io;
use std::path::Path;

pub trait FileSystem: Send + Sync {
    /// Whole contents of the entry file at `path`.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// `true` if `path` names a regular file.
    fn is_file(&self, path: &Path) -> bool;
}

/// Entry files on the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
