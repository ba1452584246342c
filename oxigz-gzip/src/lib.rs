//! # OxiGz Gzip
//!
//! Extraction of single gzip files (RFC 1952) to disk.
//!
//! Decoding is done by [`flate2`]; this crate owns the file handling around
//! it: deriving the output name, opening the source, copying the decoded
//! stream to the output, and reporting failures.
//!
//! ## Example
//!
//! ```rust,no_run
//! use oxigz_gzip::ExtractionTask;
//!
//! let mut task = ExtractionTask::open("2018-01-01-15.json.gz")?;
//! println!("Extracting to {}", task.target_path().display());
//! task.extract()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Inspection
//!
//! [`inspect()`] and [`verify()`] decode a file without writing anything, to
//! report header metadata or to test integrity.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod inspect;
mod members;
pub mod task;

// Re-exports
pub use inspect::{GzipInfo, inspect, verify};
pub use task::{ExtractionTask, TaskState};
