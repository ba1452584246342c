//! Output path derivation.
//!
//! The output of an extraction lives next to its source, with the last
//! extension of the file name removed: `archive.tar.gz` becomes
//! `archive.tar`, `data.json.gz` becomes `data.json`.
//!
//! Only the file name is considered. A `.` in a directory component is not an
//! extension, and neither is the leading `.` of a hidden file name, so
//! `dir.d/README` and `.gz` have nothing to strip and are rejected.

use crate::error::ConfigurationError;
use std::path::{Path, PathBuf};

/// Derive the output path for a compressed file.
pub fn target_path(source: &Path) -> Result<PathBuf, ConfigurationError> {
    if source.extension().is_none() {
        return Err(ConfigurationError::missing_extension(source));
    }

    Ok(source.with_extension(""))
}
