//! Error conversion helpers for I/O operations
//!
//! Provides an extension trait for attaching context to `io::Error`.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Describe what was being done when the I/O error occurred.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(out, "{}", line).io_context("write list")?;
    /// ```
    fn io_context(self, action: &str) -> ApplicationResult<T>;

    /// Like [`io_context`](Self::io_context), naming the path involved.
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn io_context(self, action: &str) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Io {
            context: action.to_string(),
            source,
        })
    }

    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Io {
            context: format!("{}: {}", action, path.display()),
            source,
        })
    }
}
