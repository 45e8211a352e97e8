//! Helpers shared by the codecs and the command line front end.
//!
//! The tools are:
//! - cli: Command line interface.
//! - freq_count: Byte frequency count for the Huffman coder.
//! - rle: Run-length encoding with fixed width run records.
//!
pub mod cli;
pub mod freq_count;
pub mod rle;
