//! Info command implementation.

use oxigz_gzip::{GzipInfo, inspect};
use serde::Serialize;
use std::path::Path;

/// JSON output for gzip information.
#[derive(Debug, Serialize)]
struct GzipInfoJson {
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    original_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mtime: Option<u32>,
    os: &'static str,
    members: usize,
    compressed_size: u64,
    uncompressed_size: u64,
    ratio: f64,
}

impl GzipInfoJson {
    fn from_info(file: &Path, info: &GzipInfo) -> Self {
        Self {
            file: file.display().to_string(),
            original_name: info.original_name.clone(),
            comment: info.comment.clone(),
            mtime: (info.mtime > 0).then_some(info.mtime),
            os: info.os_name(),
            members: info.members,
            compressed_size: info.compressed_size,
            uncompressed_size: info.uncompressed_size,
            ratio: info.compression_ratio(),
        }
    }
}

pub fn cmd_info(file: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let info = inspect(file)?;

    if json {
        let output = GzipInfoJson::from_info(file, &info);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Gzip Information");
    println!("================");
    println!("File: {}", file.display());
    println!("Size: {} bytes", info.compressed_size);

    println!();
    println!("GZIP Header:");
    if let Some(name) = &info.original_name {
        println!("  Original filename: {}", name);
    }
    if let Some(comment) = &info.comment {
        println!("  Comment: {}", comment);
    }
    if info.mtime > 0 {
        println!("  Modification time: {} (Unix timestamp)", info.mtime);
    }
    println!("  Operating system: {} ({})", info.os_name(), info.os);
    if info.extra_len > 0 {
        println!("  Extra field: {} bytes", info.extra_len);
    }

    println!();
    println!("Contents:");
    println!("  Members: {}", info.members);
    println!("  Uncompressed size: {} bytes", info.uncompressed_size);
    if info.uncompressed_size > 0 {
        println!("  Compression ratio: {:.1}%", info.space_savings());
    }

    Ok(())
}
