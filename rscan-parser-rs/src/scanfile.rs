use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::constants::{BYTES_PER_SAMPLE, HEADER_LEN};

#[derive(Debug, thiserror::Error)]
pub enum ScanFileError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("header needs 6 bytes, file has {0}")]
    ShortHeader(usize),

    #[error("{0} trailing bytes do not form a whole sample")]
    TrailingBytes(usize),
}

/// construction:
/// - step_size (1 byte)
/// - line_size (1 byte)
/// - line_count (1 byte)
/// - point_count (1 byte) [points per line]
/// - line_start (1 byte)
/// - point_start (1 byte)
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ScanHeader {
    pub step_size: u8,
    pub line_size: u8,
    pub line_count: u8,
    pub point_count: u8,
    pub line_start: u8,
    pub point_start: u8,
}

impl ScanHeader {
    pub fn new(line_count: u8, point_count: u8) -> ScanHeader {
        ScanHeader {
            step_size: 1,
            line_size: 1,
            line_count,
            point_count,
            line_start: 0,
            point_start: 0,
        }
    }

    pub fn parse(bytes: &[u8]) -> Result<ScanHeader, ScanFileError> {
        if bytes.len() < HEADER_LEN {
            return Err(ScanFileError::ShortHeader(bytes.len()));
        }
        Ok(ScanHeader {
            step_size: bytes[0],
            line_size: bytes[1],
            line_count: bytes[2],
            point_count: bytes[3],
            line_start: bytes[4],
            point_start: bytes[5],
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        [
            self.step_size,
            self.line_size,
            self.line_count,
            self.point_count,
            self.line_start,
            self.point_start,
        ]
    }

    pub fn expected_samples(&self) -> usize {
        self.line_count as usize * self.point_count as usize
    }
}

/// A scan as stored on disk: header followed by big-endian u32 samples in
/// acquisition order.
#[derive(Clone, PartialEq, Debug)]
pub struct ScanFile {
    pub header: ScanHeader,
    pub samples: Vec<u32>,
}

impl ScanFile {
    pub fn new(header: ScanHeader, samples: Vec<u32>) -> ScanFile {
        ScanFile { header, samples }
    }

    pub fn read(path: &Path) -> Result<ScanFile, ScanFileError> {
        let bytes = fs::read(path).map_err(|source| ScanFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ScanFile::parse(&bytes)
    }

    pub fn parse(bytes: &[u8]) -> Result<ScanFile, ScanFileError> {
        let header = ScanHeader::parse(bytes)?;
        let body = &bytes[HEADER_LEN..];
        let remainder = body.len() % BYTES_PER_SAMPLE;
        if remainder != 0 {
            return Err(ScanFileError::TrailingBytes(remainder));
        }

        let sample_num = body.len() / BYTES_PER_SAMPLE;
        let mut samples = Vec::with_capacity(sample_num);
        let mut cursor = Cursor::new(body);
        for _ in 0..sample_num {
            // length was checked above, a short read cannot happen
            let sample = cursor
                .read_u32::<BigEndian>()
                .map_err(|_| ScanFileError::TrailingBytes(remainder))?;
            samples.push(sample);
        }
        tracing::debug!(
            "header: step_size={} line_size={} line_start={} point_start={}",
            header.step_size,
            header.line_size,
            header.line_start,
            header.point_start
        );
        Ok(ScanFile { header, samples })
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        out.write_all(&self.header.to_bytes())?;
        for sample in self.samples.iter() {
            out.write_u32::<BigEndian>(*sample)?;
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.samples.len() * BYTES_PER_SAMPLE);
        // writing into a Vec cannot fail
        let _ = self.write_to(&mut bytes);
        bytes
    }

    pub fn expected_samples(&self) -> usize {
        self.header.expected_samples()
    }
}
