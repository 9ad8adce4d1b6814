//! Context for I/O failures while reading entry files

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

pub trait IoResultExt<T> {
    /// Tag an I/O failure with the entry file it happened on.
    ///
    /// ```ignore
    /// let content = fs.read_to_string(path).for_entry_file(path)?;
    /// ```
    fn for_entry_file(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn for_entry_file(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("cannot read entry file {} ({:?})", path.display(), e.kind()),
            source: Box::new(e),
        })
    }
}
