//! The huffman module encodes a whole buffer with a single Huffman code and decodes it again.
//!
//! Encoding counts every byte, builds one tree with a min-heap, walks the tree for the codes, and
//! writes a container holding the codebook and the packed payload. Decoding parses the container,
//! checks that the codebook is a usable prefix code, and walks the payload bit by bit.
//!
//! There is one table per buffer and one pass over the data. Nothing is shared between calls.
//!

pub mod code_table;
pub mod container;
pub mod huffman;
pub mod huffman_tree;
pub mod min_heap;
