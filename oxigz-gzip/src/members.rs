//! Decoding of concatenated gzip members.

use flate2::GzHeader;
use flate2::bufread::GzDecoder;
use std::io::{self, BufRead, Read};

/// GZIP magic bytes.
pub(crate) const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];

/// Reader yielding the decoded bytes of every gzip member in `R`.
///
/// Decoding stops after the last member whose successor does not start with
/// the gzip magic, so padding or other trailing bytes are ignored. Trailing
/// bytes that do start with the magic must form a valid member.
pub(crate) struct GzipMembers<R: BufRead> {
    decoder: Option<GzDecoder<R>>,
    first_header: Option<GzHeader>,
    members: usize,
}

impl<R: BufRead> GzipMembers<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            decoder: Some(GzDecoder::new(reader)),
            first_header: None,
            members: 0,
        }
    }

    /// Header of the first member, once that member has been decoded.
    pub(crate) fn first_header(&self) -> Option<&GzHeader> {
        self.first_header.as_ref()
    }

    /// Members decoded to completion so far.
    pub(crate) fn members(&self) -> usize {
        self.members
    }

    /// Called when the current member is exhausted. Returns false once there
    /// is nothing left to decode.
    fn advance(&mut self) -> io::Result<bool> {
        let Some(decoder) = self.decoder.take() else {
            return Ok(false);
        };

        if self.first_header.is_none() {
            self.first_header = decoder.header().cloned();
        }
        self.members += 1;

        // The bufread decoder consumes exactly one member, leaving the reader
        // positioned on whatever follows it.
        let mut reader = decoder.into_inner();
        let next = reader.fill_buf()?;
        let is_member = match next {
            [] => false,
            [first] => *first == GZIP_MAGIC[0],
            [first, second, ..] => [*first, *second] == GZIP_MAGIC,
        };

        if is_member {
            self.decoder = Some(GzDecoder::new(reader));
        }
        Ok(is_member)
    }
}

impl<R: BufRead> Read for GzipMembers<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            let Some(decoder) = self.decoder.as_mut() else {
                return Ok(0);
            };

            let len = decoder.read(buf)?;
            if len > 0 || buf.is_empty() {
                return Ok(len);
            }
            if !self.advance()? {
                return Ok(0);
            }
        }
    }
}
