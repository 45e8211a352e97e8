//! Whole-buffer compression with either Huffman coding or run-length encoding.
//!
//! Version 0.1.0
//!
//! Each codec takes an entire byte buffer and returns an entire replacement for it. The Huffman
//! output is self-describing: a small header and the code table travel in front of the packed
//! bits, so nothing but the compressed bytes is needed to decode. The RLE output is a plain list
//! of (count, byte) records.
//!
//! Basic usage to compress a file is as follows:
//!
//! `$> hufrle -c -h test.txt`
//!
//! This will compress the file and create the file test.txt.huf.
//! The original file will be deleted unless -k is given.
//!
//! The same codecs are available directly:
//!
//! ```
//! use hufrle::compression::codec::{decode, encode, Method};
//!
//! let packed = encode(Method::Huffman, b"AAABBC").unwrap();
//! assert_eq!(decode(Method::Huffman, &packed).unwrap(), b"AAABBC");
//! ```
#![warn(rust_2018_idioms)]

pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod tools;
