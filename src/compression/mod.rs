//! The compression module drives the codecs over whole files.
//!
//! Every file is handled in three steps:
//! - Read the entire file into memory.
//! - Run the chosen codec (Huffman or RLE) in the chosen direction, giving a new buffer.
//! - Write that buffer out under the new name and delete the source file (unless asked to keep it).
//!
//! Compressed files are named by adding `.huf` or `.rle`. Decompression removes that suffix again.
//! Test mode runs the decoder in memory and touches nothing on disk.
//!

pub mod codec;
pub mod compress;
pub mod decompress;
pub mod file_io;
