//! Binary snapshot format.
//!
//! ## Format Layout
//!
//! ```text
//! +------------------+
//! | Header (16 bytes)|
//! +------------------+
//! | Payload          |
//! | (bincode)        |
//! +------------------+
//! ```
//!
//! ### Header (16 bytes)
//! - Magic number (4 bytes): "SLXS"
//! - Version (2 bytes)
//! - Reserved (2 bytes)
//! - Number of words (4 bytes)
//! - Number of numbers (4 bytes)
//!
//! The counts are informational; the payload is authoritative.

use crate::error::{ExtractError, Result};
use crate::result::ExtractionResult;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Magic number for snapshot files.
const MAGIC: &[u8; 4] = b"SLXS";

/// Current format version.
pub const VERSION: u16 = 1;

/// Header size in bytes.
const HEADER_SIZE: usize = 16;

/// Snapshot file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotHeader {
    /// Format version.
    pub version: u16,
    /// Number of word records.
    pub num_words: u32,
    /// Number of number records.
    pub num_numbers: u32,
}

impl SnapshotHeader {
    /// Creates the header for `result`.
    pub fn for_result(result: &ExtractionResult) -> Self {
        Self {
            version: VERSION,
            num_words: result.words.len().min(u32::MAX as usize) as u32,
            num_numbers: result.numbers.len().min(u32::MAX as usize) as u32,
        }
    }

    /// Writes the header to bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(MAGIC);
        bytes[4..6].copy_from_slice(&self.version.to_le_bytes());
        // Reserved (bytes 6-7)
        bytes[8..12].copy_from_slice(&self.num_words.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.num_numbers.to_le_bytes());
        bytes
    }

    /// Reads a header from bytes, checking magic and version.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(ExtractError::InvalidSnapshot("Header too short".to_string()));
        }

        if &bytes[0..4] != MAGIC {
            return Err(ExtractError::InvalidSnapshot("Invalid magic number".to_string()));
        }

        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != VERSION {
            return Err(ExtractError::InvalidSnapshot(format!(
                "Unsupported version {} (expected {})",
                version, VERSION
            )));
        }

        let num_words = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
        let num_numbers = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);

        Ok(Self {
            version,
            num_words,
            num_numbers,
        })
    }
}

/// Reader and writer for binary snapshots.
pub struct SnapshotFormat;

impl SnapshotFormat {
    /// Writes `result` to `writer`.
    pub fn write_to<W: Write>(writer: &mut W, result: &ExtractionResult) -> Result<()> {
        writer.write_all(&SnapshotHeader::for_result(result).to_bytes())?;
        bincode::serialize_into(&mut *writer, result)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads a result from `reader`.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<(SnapshotHeader, ExtractionResult)> {
        let mut bytes = [0u8; HEADER_SIZE];
        reader
            .read_exact(&mut bytes)
            .map_err(|_| ExtractError::InvalidSnapshot("Header too short".to_string()))?;
        let header = SnapshotHeader::from_bytes(&bytes)?;

        let result: ExtractionResult = bincode::deserialize_from(reader)
            .map_err(|e| ExtractError::InvalidSnapshot(format!("Corrupt payload: {}", e)))?;
        Ok((header, result))
    }

    /// Writes `result` to a file.
    pub fn write<P: AsRef<Path>>(path: P, result: &ExtractionResult) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        Self::write_to(&mut writer, result)
    }

    /// Reads a result from a file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<ExtractionResult> {
        let mut reader = BufReader::new(File::open(path)?);
        let (_, result) = Self::read_from(&mut reader)?;
        Ok(result)
    }
}
