//! Read-only decoding: header metadata and integrity checks.
//!
//! Both operations decode the whole file into a sink. Nothing is written to
//! disk, and the same error taxonomy as extraction applies.

use crate::members::GzipMembers;
use crate::task::copy_decoded;
use flate2::GzHeader;
use log::debug;
use oxigz_core::error::ExtractionError;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Metadata of a gzip file.
///
/// Header fields come from the first member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GzipInfo {
    /// Original file name stored in the header (FNAME), if any.
    pub original_name: Option<String>,
    /// Comment stored in the header (FCOMMENT), if any.
    pub comment: Option<String>,
    /// Modification time as a Unix timestamp, 0 when not recorded.
    pub mtime: u32,
    /// Operating system byte.
    pub os: u8,
    /// Length of the extra field (FEXTRA), 0 when absent.
    pub extra_len: usize,
    /// Number of concatenated gzip members.
    pub members: usize,
    /// Size of the compressed file.
    pub compressed_size: u64,
    /// Size of all members once decoded.
    pub uncompressed_size: u64,
}

impl GzipInfo {
    fn from_header(header: &GzHeader) -> Self {
        let text = |bytes: &[u8]| String::from_utf8_lossy(bytes).into_owned();

        Self {
            original_name: header.filename().map(text),
            comment: header.comment().map(text),
            mtime: header.mtime(),
            os: header.operating_system(),
            extra_len: header.extra().map_or(0, <[u8]>::len),
            members: 0,
            compressed_size: 0,
            uncompressed_size: 0,
        }
    }

    /// Name of the operating system recorded in the header.
    pub fn os_name(&self) -> &'static str {
        match self.os {
            0 => "FAT",
            1 => "Amiga",
            2 => "VMS",
            3 => "Unix",
            4 => "VM/CMS",
            5 => "Atari TOS",
            6 => "HPFS",
            7 => "Macintosh",
            8 => "Z-System",
            9 => "CP/M",
            10 => "TOPS-20",
            11 => "NTFS",
            12 => "QDOS",
            13 => "Acorn RISCOS",
            _ => "unknown",
        }
    }

    /// Compressed size relative to the uncompressed size.
    pub fn compression_ratio(&self) -> f64 {
        if self.uncompressed_size == 0 {
            1.0
        } else {
            self.compressed_size as f64 / self.uncompressed_size as f64
        }
    }

    /// Space savings as a percentage.
    pub fn space_savings(&self) -> f64 {
        if self.uncompressed_size == 0 {
            0.0
        } else {
            (1.0 - self.compression_ratio()) * 100.0
        }
    }
}

/// Decode every member of a gzip file and collect its metadata.
pub fn inspect(path: impl AsRef<Path>) -> Result<GzipInfo, ExtractionError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ExtractionError::open(path, e))?;
    let compressed_size = file
        .metadata()
        .map_err(|e| ExtractionError::open(path, e))?
        .len();
    let mut decoder = GzipMembers::new(BufReader::new(file));
    let uncompressed_size = copy_decoded(&mut decoder, &mut io::sink(), path, path)?;
    let members = decoder.members();

    debug!(
        "{}: {} member(s), {} -> {} bytes",
        path.display(),
        members,
        compressed_size,
        uncompressed_size
    );

    let mut info = GzipInfo::from_header(decoder.first_header().unwrap_or(&GzHeader::default()));
    info.members = members;
    info.compressed_size = compressed_size;
    info.uncompressed_size = uncompressed_size;
    Ok(info)
}

/// Test the integrity of a gzip file, returning its decoded size.
pub fn verify(path: impl AsRef<Path>) -> Result<u64, ExtractionError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ExtractionError::open(path, e))?;
    let mut decoder = GzipMembers::new(BufReader::new(file));

    copy_decoded(&mut decoder, &mut io::sink(), path, path)
}
