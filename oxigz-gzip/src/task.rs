//! Single-file gzip extraction.

use crate::members::GzipMembers;
use log::debug;
use oxigz_core::COPY_BUFFER_SIZE;
use oxigz_core::error::{ConfigurationError, ExtractionError};
use oxigz_core::target::target_path;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};

/// Lifecycle of an [`ExtractionTask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Source opened, nothing extracted yet.
    Constructed,
    /// Extraction finished and the output is complete.
    Extracted,
    /// Extraction failed. The output may be partial.
    Failed,
}

/// Extraction of one gzip file next to itself.
///
/// The output path is derived when the task is opened and never changes. The
/// source handle is held by the task until [`extract`](Self::extract) consumes
/// it, so a task extracts at most once.
#[derive(Debug)]
pub struct ExtractionTask {
    source_path: PathBuf,
    target_path: PathBuf,
    source: Option<File>,
    state: TaskState,
    bytes_written: u64,
}

impl ExtractionTask {
    /// Open `source_path` for extraction.
    ///
    /// Fails when no output name can be derived from the path, or when the
    /// file cannot be opened for reading. Nothing is created on disk.
    pub fn open(source_path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let source_path = source_path.as_ref();
        let target_path = target_path(source_path)?;

        let source =
            File::open(source_path).map_err(|e| ConfigurationError::open(source_path, e))?;
        let metadata = source
            .metadata()
            .map_err(|e| ConfigurationError::open(source_path, e))?;
        if metadata.is_dir() {
            return Err(ConfigurationError::is_directory(source_path));
        }

        debug!(
            "Opened {} ({} bytes), output {}",
            source_path.display(),
            metadata.len(),
            target_path.display()
        );

        Ok(Self {
            source_path: source_path.to_path_buf(),
            target_path,
            source: Some(source),
            state: TaskState::Constructed,
            bytes_written: 0,
        })
    }

    /// Decode the source and write it to [`target_path`](Self::target_path).
    ///
    /// An existing file at the target is truncated and overwritten. On failure
    /// a partial output file may remain; it is not removed.
    pub fn extract(&mut self) -> Result<(), ExtractionError> {
        let source = self
            .source
            .take()
            .ok_or_else(|| ExtractionError::already_consumed(&self.source_path))?;

        debug!(
            "Extracting {} to {}",
            self.source_path.display(),
            self.target_path.display()
        );

        match self.decode_into_target(source) {
            Ok(written) => {
                self.state = TaskState::Extracted;
                self.bytes_written = written;
                debug!(
                    "Wrote {} bytes to {}",
                    written,
                    self.target_path.display()
                );
                Ok(())
            }
            Err(e) => {
                self.state = TaskState::Failed;
                Err(e)
            }
        }
    }

    fn decode_into_target(&self, source: File) -> Result<u64, ExtractionError> {
        let mut decoder = GzipMembers::new(BufReader::new(source));

        // The first read parses the header. Input that is not gzip at all
        // fails here, before the target is created or truncated.
        let mut buffer = [0u8; COPY_BUFFER_SIZE];
        let first = read_decoded(&mut decoder, &mut buffer, &self.source_path)?;

        let mut output = File::create(&self.target_path)
            .map_err(|e| ExtractionError::create(&self.target_path, e))?;
        output
            .write_all(&buffer[..first])
            .map_err(|e| ExtractionError::write(&self.target_path, e))?;

        let rest = copy_decoded(
            &mut decoder,
            &mut output,
            &self.source_path,
            &self.target_path,
        )?;
        Ok(first as u64 + rest)
    }

    /// Path of the compressed input.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Path the decoded output is (or will be) written to.
    pub fn target_path(&self) -> &Path {
        &self.target_path
    }

    /// Current lifecycle state.
    pub fn state(&self) -> TaskState {
        self.state
    }

    /// Decoded bytes written by a successful extraction, 0 before that.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

/// Read the next decoded chunk into `buffer`, retrying interrupted reads.
fn read_decoded<R: Read>(
    reader: &mut R,
    buffer: &mut [u8],
    source: &Path,
) -> Result<usize, ExtractionError> {
    loop {
        match reader.read(buffer) {
            Ok(len) => return Ok(len),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ExtractionError::from_decoder(source, e)),
        }
    }
}

/// Copy everything `reader` decodes into `writer`, one buffer at a time.
///
/// Read errors are attributed to `source`, write errors to `target`.
pub(crate) fn copy_decoded<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    source: &Path,
    target: &Path,
) -> Result<u64, ExtractionError> {
    let mut buffer = [0u8; COPY_BUFFER_SIZE];
    let mut written = 0u64;

    loop {
        let len = read_decoded(reader, &mut buffer, source)?;
        if len == 0 {
            break;
        }

        writer
            .write_all(&buffer[..len])
            .map_err(|e| ExtractionError::write(target, e))?;
        written += len as u64;
    }

    writer
        .flush()
        .map_err(|e| ExtractionError::write(target, e))?;

    Ok(written)
}
