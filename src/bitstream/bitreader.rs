//! BitReader: reads a packed MSB-first bitstream from an in-memory buffer.
//!
//! The reader is told exactly how many bits are valid. Padding bits in the final byte beyond
//! that count are never returned.
//!

use super::bitpacker::bytes_for_bits;
use crate::error::CodecError;

const BIT_MASK: u8 = 0x80;

/// Reads bits from a packed buffer, stopping after a fixed number of bits.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    remaining: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a reader over `buffer` that yields exactly `bit_count` bits. Fails if the buffer
    /// is too short to hold them.
    pub fn new(buffer: &'a [u8], bit_count: usize) -> Result<Self, CodecError> {
        let needed = bytes_for_bits(bit_count);
        if buffer.len() < needed {
            return Err(CodecError::MalformedContainer(format!(
                "{} bits need {} bytes but only {} are present",
                bit_count,
                needed,
                buffer.len()
            )));
        }
        Ok(Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            remaining: bit_count,
        })
    }

    /// Return the next bit (true for 1), or None once the bit count is used up.
    pub fn bit(&mut self) -> Option<bool> {
        if self.remaining == 0 {
            return None;
        }
        let bit = self.buffer[self.cursor] & (BIT_MASK >> self.bit_index) != 0;
        self.bit_index += 1;
        if self.bit_index == 8 {
            self.bit_index = 0;
            self.cursor += 1;
        }
        self.remaining -= 1;
        Some(bit)
    }

    /// Return the next n (0-128) bits as an integer, first bit most significant. None if fewer
    /// than n bits are left.
    pub fn bint(&mut self, n: u8) -> Option<u128> {
        if (n as usize) > self.remaining {
            return None;
        }
        let mut result = 0_u128;
        for _ in 0..n {
            result = result << 1 | self.bit()? as u128;
        }
        Some(result)
    }

    /// Bits still available.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}
