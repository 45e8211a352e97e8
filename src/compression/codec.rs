//! Codec selection. Each call takes a whole buffer and returns a complete replacement for it.

use std::fmt::{Display, Formatter};

use crate::error::CodecError;
use crate::huffman_coding::huffman::{huf_decode, huf_encode};
use crate::tools::rle::{rle_decode, rle_encode};

/// The two available codecs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Rle,
    Huffman,
}

impl Method {
    /// File name suffix (without the dot) given to compressed output.
    pub fn suffix(&self) -> &'static str {
        match self {
            Method::Rle => "rle",
            Method::Huffman => "huf",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Compress `input` with the chosen method.
pub fn encode(method: Method, input: &[u8]) -> Result<Vec<u8>, CodecError> {
    match method {
        Method::Rle => Ok(rle_encode(input)),
        Method::Huffman => huf_encode(input),
    }
}

/// Reverse `encode`. The input is left untouched on failure.
pub fn decode(method: Method, input: &[u8]) -> Result<Vec<u8>, CodecError> {
    match method {
        Method::Rle => rle_decode(input),
        Method::Huffman => huf_decode(input),
    }
}
