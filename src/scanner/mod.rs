mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{FileFilter, PrefixFilter};

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Trait for discovering candidate files under a root directory.
pub trait FileScanner {
    /// Collect all candidate files under `root`, sorted by path.
    ///
    /// # Errors
    /// Returns an error if the scan cannot be performed.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
