use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::code_table::{is_prefix_free, Code, CodeTable};
use super::container::Container;
use super::huffman_tree::HuffmanTree;
use crate::bitstream::bitpacker::{bytes_for_bits, BitPacker};
use crate::bitstream::bitreader::BitReader;
use crate::error::CodecError;
use crate::tools::freq_count::{freqs, present_symbols};

/// Huffman encode `data` into a self-describing container.
///
/// The only possible error is EmptyQueue from the tree build, which cannot happen for a
/// non-empty input. Empty input gives a bare 16 byte header.
pub fn huf_encode(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    Ok(build_container(data)?.serialize())
}

/// Count, build the tree, assign codes and pack the payload.
pub fn build_container(data: &[u8]) -> Result<Container, CodecError> {
    let symbols = present_symbols(&freqs(data));
    if symbols.is_empty() {
        debug!("Nothing to encode.");
        return Ok(Container {
            codebook: vec![],
            bit_count: 0,
            payload: vec![],
        });
    }

    let tree = HuffmanTree::from_freqs(&symbols)?;
    let table = CodeTable::from_tree(&tree);
    debug!(
        "Built a tree over {} symbols with weight {} and depth {}.",
        symbols.len(),
        tree.weight(),
        tree.depth()
    );

    // Every byte of data is in the table, it was counted from data.
    let mut bp = BitPacker::new(bytes_for_bits(table.encoded_bits(data)));
    for code in data.iter().filter_map(|&byte| table.get(byte)) {
        bp.out_wide(code.bits, code.len);
    }
    let bit_count = bp.bit_count();
    let payload = bp.finish();
    debug!(
        "Encoded {} bytes as {} bits ({} bytes).",
        data.len(),
        bit_count,
        payload.len()
    );

    Ok(Container {
        codebook: table.iter().map(|(sym, code)| (sym, *code)).collect(),
        bit_count,
        payload,
    })
}

/// Decode a container produced by huf_encode.
pub fn huf_decode(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    let container = Container::deserialize(data)?;
    decode_container(&container)
}

/// Turn a parsed container back into the original bytes.
pub fn decode_container(container: &Container) -> Result<Vec<u8>, CodecError> {
    match container.codebook.as_slice() {
        [] => {
            if container.bit_count != 0 {
                return Err(CodecError::MalformedContainer(format!(
                    "{} payload bits but no symbols",
                    container.bit_count
                )));
            }
            Ok(vec![])
        }
        // A lone symbol is written as one 0 bit per byte, so the bit count is the byte count.
        [(sym, code)] => {
            if code.len != 1 {
                return Err(CodecError::InconsistentCodebook(format!(
                    "single symbol {:#04x} has a {} bit code",
                    sym, code.len
                )));
            }
            debug!("Single symbol {:#04x} repeated {} times.", sym, container.bit_count);
            Ok(vec![*sym; container.bit_count])
        }
        codebook => {
            let decode_map = DecodeMap::new(codebook)?;
            decode_map.walk(&container.payload, container.bit_count)
        }
    }
}

/// Code to symbol lookup used by the decoder.
struct DecodeMap {
    map: FxHashMap<Code, u8>,
    min_len: u8,
    max_len: u8,
}

impl DecodeMap {
    /// Build the map, rejecting duplicate symbols, duplicate codes and prefix overlaps.
    fn new(codebook: &[(u8, Code)]) -> Result<Self, CodecError> {
        let mut seen = [false; 256];
        let mut map = FxHashMap::default();
        map.reserve(codebook.len());

        for (sym, code) in codebook {
            if std::mem::replace(&mut seen[*sym as usize], true) {
                return Err(CodecError::InconsistentCodebook(format!(
                    "symbol {:#04x} is listed twice",
                    sym
                )));
            }
            if let Some(other) = map.insert(*code, *sym) {
                return Err(CodecError::InconsistentCodebook(format!(
                    "symbols {:#04x} and {:#04x} share the code {}",
                    other, sym, code
                )));
            }
            trace!("Code {} -> {:#04x}", code, sym);
        }

        let codes: Vec<Code> = codebook.iter().map(|(_, code)| *code).collect();
        if !is_prefix_free(&codes) {
            return Err(CodecError::InconsistentCodebook(
                "a code is a prefix of another".to_string(),
            ));
        }

        Ok(DecodeMap {
            map,
            min_len: codes.iter().map(|c| c.len).min().unwrap_or(1),
            max_len: codes.iter().map(|c| c.len).max().unwrap_or(0),
        })
    }

    /// Read the payload left to right, emitting a symbol each time the gathered bits match a code.
    fn walk(&self, payload: &[u8], bit_count: usize) -> Result<Vec<u8>, CodecError> {
        let mut reader = BitReader::new(payload, bit_count)?;
        let mut out = Vec::with_capacity(reader.remaining() / self.min_len.max(1) as usize);
        let mut candidate = Code::default();

        while let Some(bit) = reader.bit() {
            candidate = candidate.push(bit);
            if let Some(&sym) = self.map.get(&candidate) {
                out.push(sym);
                candidate = Code::default();
            } else if candidate.len >= self.max_len {
                return Err(CodecError::MalformedContainer(format!(
                    "bits {} ending at {} match no code",
                    candidate,
                    reader.loc()
                )));
            }
        }

        if !candidate.is_empty() {
            return Err(CodecError::MalformedContainer(format!(
                "payload ends inside a code ({} left over)",
                candidate
            )));
        }
        trace!("Walked {} bits into {} symbols.", bit_count, out.len());
        Ok(out)
    }
}
