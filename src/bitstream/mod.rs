//! The bitstream module is the bit-level I/O subsystem shared by the Huffman codebook and payload.
//!
//! Bits are always packed most significant bit first. The final byte of a stream is padded with
//! zero bits, so every producer records the exact number of valid bits next to the bytes and every
//! consumer is handed that count back.
//!
pub mod bitpacker;
pub mod bitreader;
