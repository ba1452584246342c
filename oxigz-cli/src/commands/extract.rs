//! Extract command implementation.

use log::warn;
use oxigz_gzip::ExtractionTask;
use std::path::Path;

pub fn cmd_extract(file: &Path, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut task = ExtractionTask::open(file)?;
    let target = task.target_path().to_path_buf();

    if target.exists() {
        warn!("Overwriting existing file {}", target.display());
    }

    println!("Extracting {} to {}", file.display(), target.display());
    task.extract()?;

    if verbose {
        println!(
            "  Extracted: {} ({} bytes)",
            target.display(),
            task.bytes_written()
        );
    }

    Ok(())
}
