use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{LocatorGuardError, Result};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Selects candidate locator files by naming convention: the file name must
/// begin with `prefix` and carry `extension`, and must not match any exclude
/// glob.
pub struct PrefixFilter {
    prefix: String,
    extension: String,
    exclude_patterns: GlobSet,
}

impl PrefixFilter {
    /// Create a new filter.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(prefix: String, extension: String, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| LocatorGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| LocatorGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            prefix,
            extension,
            exclude_patterns,
        })
    }

    fn has_candidate_name(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(&self.prefix))
    }

    fn has_candidate_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for PrefixFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_candidate_name(path) && self.has_candidate_extension(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
