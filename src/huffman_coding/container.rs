//! The Huffman container: header, codebook and packed payload.
//!
//! ```text
//! [unique_symbol_count: u64 LE][total_bit_length: u64 LE]
//! repeated unique_symbol_count times, ascending by symbol:
//!   [symbol: u8][code_length: u64 LE][code bits: ceil(code_length / 8) bytes, MSB-first]
//! [payload: ceil(total_bit_length / 8) bytes, MSB-first]
//! ```
//!
//! Every integer field has a fixed width and byte order so a container written on one machine
//! reads back on any other.

use std::io::{Cursor, Read};

use crate::bitstream::bitpacker::{bytes_for_bits, BitPacker};
use crate::bitstream::bitreader::BitReader;
use crate::error::CodecError;

use super::code_table::{Code, MAX_CODE_LEN};

/// Size of the two header fields.
pub const HEADER_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    /// (symbol, code) pairs in ascending symbol order.
    pub codebook: Vec<(u8, Code)>,
    /// Exact number of valid bits in the payload.
    pub bit_count: usize,
    pub payload: Vec<u8>,
}

impl Container {
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(HEADER_LEN + self.codebook.len() * 10 + self.payload.len());

        bytes.extend_from_slice(&(self.codebook.len() as u64).to_le_bytes());
        bytes.extend_from_slice(&(self.bit_count as u64).to_le_bytes());

        for (sym, code) in &self.codebook {
            bytes.push(*sym);
            bytes.extend_from_slice(&(code.len as u64).to_le_bytes());
            let mut bp = BitPacker::new(bytes_for_bits(code.len as usize));
            bp.out_wide(code.bits, code.len);
            bytes.extend_from_slice(&bp.finish());
        }

        bytes.extend_from_slice(&self.payload);
        bytes
    }

    /// Parse a container. Only the layout is checked here: truncation, trailing bytes and code
    /// lengths outside 1..=128. Whether the codes form a usable prefix code is up to the decoder.
    pub fn deserialize(data: &[u8]) -> Result<Container, CodecError> {
        let mut cursor = Cursor::new(data);

        let count = read_u64(&mut cursor, "symbol count")?;
        if count > 256 {
            return Err(CodecError::InconsistentCodebook(format!(
                "{} symbols listed, at most 256 are possible",
                count
            )));
        }
        let bit_count = usize::try_from(read_u64(&mut cursor, "bit length")?).map_err(|_| {
            CodecError::MalformedContainer("bit length does not fit in memory".to_string())
        })?;

        let mut codebook = Vec::with_capacity(count as usize);
        for entry in 0..count {
            let sym = read_bytes(&mut cursor, 1, "codebook symbol")?[0];
            let len = read_u64(&mut cursor, "code length")?;
            if len == 0 || len > MAX_CODE_LEN as u64 {
                return Err(CodecError::InconsistentCodebook(format!(
                    "entry {} (symbol {:#04x}) has a code length of {}",
                    entry, sym, len
                )));
            }
            let len = len as u8;
            let packed = read_bytes(&mut cursor, bytes_for_bits(len as usize), "code bits")?;
            let bits = BitReader::new(&packed, len as usize)?
                .bint(len)
                .ok_or_else(|| CodecError::MalformedContainer("short code bits".to_string()))?;
            codebook.push((sym, Code::new(bits, len)));
        }

        let payload = &data[cursor.position() as usize..];
        let needed = bytes_for_bits(bit_count);
        if payload.len() != needed {
            return Err(CodecError::MalformedContainer(format!(
                "payload of {} bits needs {} bytes, found {}",
                bit_count,
                needed,
                payload.len()
            )));
        }

        Ok(Container {
            codebook,
            bit_count,
            payload: payload.to_vec(),
        })
    }
}

fn read_bytes(cursor: &mut Cursor<&[u8]>, n: usize, what: &str) -> Result<Vec<u8>, CodecError> {
    let mut buf = vec![0_u8; n];
    cursor.read_exact(&mut buf).map_err(|_| {
        CodecError::MalformedContainer(format!(
            "container ends inside the {} at byte {}",
            what,
            cursor.position()
        ))
    })?;
    Ok(buf)
}

fn read_u64(cursor: &mut Cursor<&[u8]>, what: &str) -> Result<u64, CodecError> {
    let mut buf = [0_u8; 8];
    cursor.read_exact(&mut buf).map_err(|_| {
        CodecError::MalformedContainer(format!(
            "container ends inside the {} at byte {}",
            what,
            cursor.position()
        ))
    })?;
    Ok(u64::from_le_bytes(buf))
}
