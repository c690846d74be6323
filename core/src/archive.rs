//! Container decoding for .adkb archive files.
//!
//! An archive is a 4-byte big-endian header followed by K fixed-size puzzle
//! records. Record sizes are a pure function of the dimension in the header;
//! there is no per-record length or checksum field, so a wrong dimension or
//! corrupted header desynchronizes every subsequent record.

use crate::{DecodeError, Puzzle};
use std::path::Path;

/// Parsed .adkb container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveHeader {
    /// Grid side length N, shared by every puzzle in the archive.
    pub dimension: u8,
    /// Number of puzzle records following the header.
    pub puzzle_count: u16,
}

impl ArchiveHeader {
    pub const LEN: usize = 4;

    /// Parse the header: `u8` dimension, `u8` reserved type tag (ignored),
    /// `u16` big-endian puzzle count.
    pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < Self::LEN {
            return Err(DecodeError::MalformedHeader(format!(
                "need {} bytes, got {}",
                Self::LEN,
                bytes.len()
            )));
        }
        let dimension = bytes[0];
        if dimension <= 1 {
            return Err(DecodeError::MalformedHeader(format!(
                "dimension {dimension} is not a usable grid size"
            )));
        }
        let puzzle_count = u16::from_be_bytes([bytes[2], bytes[3]]);
        Ok(Self {
            dimension,
            puzzle_count,
        })
    }
}

/// Byte length of one nibble-packed value stream for dimension `n`.
pub fn value_stream_len(n: usize) -> usize {
    ((n - 1) * (n - 1) * 4 + 4) / 8
}

/// Byte length of one bit-packed mask stream for dimension `n`.
pub fn mask_stream_len(n: usize) -> usize {
    (n * n).div_ceil(8)
}

/// Decode every puzzle record in the archive.
///
/// With `as_solved` set the puzzles come out fully known; otherwise the
/// per-record removal mask is applied to produce the unsolved variants.
pub fn decode(bytes: &[u8], as_solved: bool) -> Result<Vec<Puzzle>, DecodeError> {
    let header = ArchiveHeader::parse(bytes)?;
    let n = header.dimension as usize;
    let values_len = value_stream_len(n);
    let mask_len = mask_stream_len(n);
    let record_len = values_len + mask_len;

    let mut puzzles = Vec::with_capacity(header.puzzle_count as usize);
    let mut offset = ArchiveHeader::LEN;
    for _ in 0..header.puzzle_count {
        let remaining = bytes.len() - offset;
        if remaining < record_len {
            return Err(DecodeError::TruncatedArchive {
                needed: record_len,
                remaining,
            });
        }
        let raw_values = bytes[offset..offset + values_len].to_vec();
        let raw_mask = bytes[offset + values_len..offset + record_len].to_vec();
        offset += record_len;

        let mut puzzle = Puzzle::new(n, raw_values, raw_mask);
        puzzle.load(as_solved)?;
        puzzles.push(puzzle);
    }
    Ok(puzzles)
}

/// Load and decode an .adkb file from disk.
pub fn load_file<P: AsRef<Path>>(path: P, as_solved: bool) -> Result<Vec<Puzzle>, DecodeError> {
    let bytes = std::fs::read(path)?;
    decode(&bytes, as_solved)
}
