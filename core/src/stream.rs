//! Sequential cursors over the two bit-packed streams of an .adkb record.

use crate::DecodeError;

/// Yields one boolean per call from a byte buffer, most-significant bit first.
///
/// The mask stream of a puzzle record stores one keep/remove flag per cell,
/// row-major. A fresh byte is consumed every 8 calls.
#[derive(Debug)]
pub struct BitFlagReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    current: u8,
    bit: u8,
}

impl<'a> BitFlagReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            current: 0,
            bit: 128,
        }
    }

    /// Read the next flag, advancing to a new byte every 8 calls.
    pub fn next(&mut self) -> Result<bool, DecodeError> {
        if self.bit == 128 {
            self.current = *self
                .buffer
                .get(self.cursor)
                .ok_or(DecodeError::ReaderExhausted(self.cursor))?;
            self.cursor += 1;
        }
        let flag = (self.current & self.bit) != 0;
        self.bit >>= 1;
        if self.bit == 0 {
            self.bit = 128;
        }
        Ok(flag)
    }
}

/// Yields one 4-bit value per call from a byte buffer, high nibble first.
///
/// The value stream of a puzzle record packs two 0-based cell values into
/// each byte. A fresh byte is consumed every 2 calls.
#[derive(Debug)]
pub struct NibbleReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    current: u8,
    high: bool,
}

impl<'a> NibbleReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            cursor: 0,
            current: 0,
            high: true,
        }
    }

    /// Read the next nibble, in `[0, 15]`.
    pub fn next(&mut self) -> Result<u8, DecodeError> {
        let value = if self.high {
            self.current = *self
                .buffer
                .get(self.cursor)
                .ok_or(DecodeError::ReaderExhausted(self.cursor))?;
            self.cursor += 1;
            self.current >> 4
        } else {
            self.current & 0x0F
        };
        self.high = !self.high;
        Ok(value)
    }
}
