//! # OxiGz Core
//!
//! Core components shared by the OxiGz crates.
//!
//! - [`error`]: [`ConfigurationError`] and [`ExtractionError`]
//! - [`target`]: derivation of an output path from a compressed file path
//!
//! ## Example
//!
//! ```rust
//! use oxigz_core::target::target_path;
//! use std::path::{Path, PathBuf};
//!
//! let target = target_path(Path::new("logs/2018-01-01-15.json.gz")).unwrap();
//! assert_eq!(target, PathBuf::from("logs/2018-01-01-15.json"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod target;

// Re-exports for convenience
pub use error::{ConfigurationError, ExtractionError};
pub use target::target_path;

/// Size of the intermediate buffer used when copying decoded bytes to disk.
pub const COPY_BUFFER_SIZE: usize = 1024;
