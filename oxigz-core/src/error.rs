//! Error types for OxiGz operations.
//!
//! Failures are split by when they happen. [`ConfigurationError`] is raised
//! while an extraction is being set up (the source cannot be opened, or no
//! output name can be derived from it). [`ExtractionError`] covers the
//! read-decode-write pipeline itself.
//!
//! Both keep the underlying [`io::Error`] as their source, and include its
//! message in their `Display` output.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// An extraction could not be set up.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The source file could not be opened for reading.
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        /// Path that was being opened.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The source path names a directory.
    #[error("Cannot open {}: is a directory", path.display())]
    IsDirectory {
        /// Offending path.
        path: PathBuf,
    },

    /// The source file name has no extension to strip.
    #[error("Cannot derive an output name from {}: no extension to strip", path.display())]
    MissingExtension {
        /// Offending path.
        path: PathBuf,
    },
}

impl ConfigurationError {
    /// Create an open error.
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Create an is-a-directory error.
    pub fn is_directory(path: impl Into<PathBuf>) -> Self {
        Self::IsDirectory { path: path.into() }
    }

    /// Create a missing extension error.
    pub fn missing_extension(path: impl Into<PathBuf>) -> Self {
        Self::MissingExtension { path: path.into() }
    }

    /// Path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::IsDirectory { path }
            | Self::MissingExtension { path } => path,
        }
    }
}

/// The read-decode-write pipeline failed.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The compressed file could not be opened.
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        /// Compressed file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The input is not a valid gzip stream (bad header, corrupt DEFLATE data,
    /// checksum mismatch or truncation).
    #[error("Invalid gzip data in {}: {source}", path.display())]
    Decode {
        /// Compressed file path.
        path: PathBuf,
        /// Underlying error reported by the decoder.
        #[source]
        source: io::Error,
    },

    /// Reading the compressed file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Compressed file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output file could not be created.
    #[error("Failed to create {}: {source}", path.display())]
    Create {
        /// Output file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing the output file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Output file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The source stream was already consumed by an earlier extraction.
    #[error("Source {} was already consumed by a previous extraction", path.display())]
    AlreadyConsumed {
        /// Compressed file path.
        path: PathBuf,
    },
}

impl ExtractionError {
    /// Create an open error.
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Classify an error returned while reading from a gzip decoder.
    ///
    /// The decoder reports malformed input as `InvalidInput`/`InvalidData` and
    /// a truncated stream as `UnexpectedEof`; anything else came from the
    /// underlying file.
    pub fn from_decoder(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::InvalidInput
            | io::ErrorKind::InvalidData
            | io::ErrorKind::UnexpectedEof => Self::Decode { path, source },
            _ => Self::Read { path, source },
        }
    }

    /// Create an output creation error.
    pub fn create(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Create {
            path: path.into(),
            source,
        }
    }

    /// Create an output write error.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create an already consumed error.
    pub fn already_consumed(path: impl Into<PathBuf>) -> Self {
        Self::AlreadyConsumed { path: path.into() }
    }

    /// True when the failure is due to the compressed data itself rather than
    /// the file system.
    pub fn is_corrupt_input(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Path the error refers to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Decode { path, .. }
            | Self::Read { path, .. }
            | Self::Create { path, .. }
            | Self::Write { path, .. }
            | Self::AlreadyConsumed { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_keeps_io_message() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "No such file or directory");
        let err = ConfigurationError::open("missing.gz", io_err);
        let msg = err.to_string();
        assert!(msg.contains("missing.gz"));
        assert!(msg.contains("No such file or directory"));

        let err = ExtractionError::write("out.txt", io::Error::other("disk full"));
        assert!(err.to_string().contains("disk full"));
        assert_eq!(err.path(), Path::new("out.txt"));
    }

    #[test]
    fn test_source_is_preserved() {
        use std::error::Error as _;

        let err = ExtractionError::create(
            "out.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err.source().expect("io error is the source");
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_decoder_error_classification() {
        let err = ExtractionError::from_decoder(
            "a.gz",
            io::Error::new(io::ErrorKind::InvalidInput, "invalid gzip header"),
        );
        assert!(err.is_corrupt_input());

        let err = ExtractionError::from_decoder(
            "a.gz",
            io::Error::new(io::ErrorKind::UnexpectedEof, "truncated"),
        );
        assert!(matches!(err, ExtractionError::Decode { .. }));

        let err = ExtractionError::from_decoder(
            "a.gz",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ExtractionError::Read { .. }));
        assert!(!err.is_corrupt_input());
    }

    #[test]
    fn test_missing_extension_display() {
        let err = ConfigurationError::missing_extension("README");
        assert!(err.to_string().contains("no extension"));
        assert_eq!(err.path(), Path::new("README"));
    }
}
