//! Target command implementation.

use oxigz_core::target_path;
use std::path::Path;

/// Print the derived output path. The file itself is not opened.
pub fn cmd_target(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", target_path(file)?.display());
    Ok(())
}
