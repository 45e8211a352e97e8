//! Walks a Huffman tree and records the path to every leaf as that symbol's code.

use std::fmt;

use log::trace;

use super::huffman_tree::{HuffmanTree, NodeData};

/// Longest code a codebook may carry. Trees built from a u64 total weight are far shallower.
pub const MAX_CODE_LEN: u8 = 128;

/// A bit string of up to 128 bits, right aligned in `bits`. The first bit of the code is the
/// most significant of the `len` low bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Code {
    pub bits: u128,
    pub len: u8,
}

impl Code {
    pub fn new(bits: u128, len: u8) -> Self {
        Code { bits, len }
    }

    /// The code with one more bit appended.
    pub fn push(self, bit: bool) -> Self {
        Code {
            bits: self.bits << 1 | bit as u128,
            len: self.len + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if self is a (non-strict) prefix of other.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        if self.len > other.len {
            return false;
        }
        other
            .bits
            .checked_shr(u32::from(other.len - self.len))
            .unwrap_or(0)
            == self.bits
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..self.len).rev() {
            write!(f, "{}", (self.bits >> i) & 1)?;
        }
        Ok(())
    }
}

/// Symbol to code lookup, iterated in ascending symbol order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: [Option<Code>; 256],
}

impl CodeTable {
    /// Assign codes by a depth-first walk of the tree: 0 to the left, 1 to the right. A tree
    /// that is a lone leaf gives its symbol the one bit code 0.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = [None; 256];
        let mut stack = vec![(tree.root(), Code::default())];
        while let Some((idx, code)) = stack.pop() {
            match tree.node(idx).node_data {
                NodeData::Kids(left, right) => {
                    stack.push((right, code.push(true)));
                    stack.push((left, code.push(false)));
                }
                NodeData::Leaf(sym) => {
                    let code = if code.is_empty() {
                        code.push(false)
                    } else {
                        code
                    };
                    trace!("Symbol {:#04x} -> {}", sym, code);
                    codes[sym as usize] = Some(code);
                }
            }
        }
        CodeTable { codes }
    }

    pub fn get(&self, sym: u8) -> Option<&Code> {
        self.codes[sym as usize].as_ref()
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(sym, code)| code.as_ref().map(|c| (sym as u8, c)))
    }

    /// Number of bits needed to encode `data` with this table. Bytes without a code count as 0.
    pub fn encoded_bits(&self, data: &[u8]) -> usize {
        data.iter()
            .filter_map(|&b| self.get(b))
            .map(|c| c.len as usize)
            .sum()
    }
}

/// True if no code in the list is a prefix of another (duplicates count as prefixes).
pub fn is_prefix_free(codes: &[Code]) -> bool {
    // In lexicographic bit order a code is immediately followed by any code it prefixes, so
    // only neighbours need checking.
    let mut sorted = codes.to_vec();
    sorted.sort_unstable_by(|a, b| {
        let width = a.len.max(b.len);
        let a_left = a.bits.checked_shl(u32::from(width - a.len)).unwrap_or(0);
        let b_left = b.bits.checked_shl(u32::from(width - b.len)).unwrap_or(0);
        a_left.cmp(&b_left).then(a.len.cmp(&b.len))
    });
    sorted.windows(2).all(|w| !w[0].is_prefix_of(&w[1]))
}

#[cfg(test)]
mod test {
    use super::{is_prefix_free, Code, CodeTable};
    use crate::huffman_coding::huffman_tree::HuffmanTree;

    #[test]
    fn code_push_and_display() {
        let code = Code::default().push(true).push(false).push(true);
        assert_eq!(code, Code::new(0b101, 3));
        assert_eq!(code.to_string(), "101");
        assert_eq!(Code::new(0b1, 4).to_string(), "0001");
    }

    #[test]
    fn prefix_test() {
        let a = Code::new(0b10, 2);
        assert!(a.is_prefix_of(&Code::new(0b101, 3)));
        assert!(a.is_prefix_of(&a));
        assert!(!a.is_prefix_of(&Code::new(0b110, 3)));
        assert!(!Code::new(0b101, 3).is_prefix_of(&a));
    }

    #[test]
    fn three_symbol_table() {
        let tree = HuffmanTree::from_freqs(&[(b'A', 3), (b'B', 2), (b'C', 1)]).unwrap();
        let table = CodeTable::from_tree(&tree);
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(b'A').unwrap().to_string(), "0");
        assert_eq!(table.get(b'C').unwrap().to_string(), "10");
        assert_eq!(table.get(b'B').unwrap().to_string(), "11");
        assert_eq!(table.get(b'D'), None);
        let syms: Vec<u8> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(syms, b"ABC".to_vec());
        assert_eq!(table.encoded_bits(b"AAABBC"), 3 + 2 * 2 + 2);
    }

    #[test]
    fn single_symbol_gets_one_bit() {
        let tree = HuffmanTree::from_freqs(&[(0x41, 1000)]).unwrap();
        let table = CodeTable::from_tree(&tree);
        assert_eq!(table.get(0x41), Some(&Code::new(0, 1)));
    }

    #[test]
    fn generated_tables_are_prefix_free() {
        let freqs: Vec<(u8, u64)> = (0..=255).map(|s| (s, (s as u64 % 13) * 31 + 1)).collect();
        let table = CodeTable::from_tree(&HuffmanTree::from_freqs(&freqs).unwrap());
        let codes: Vec<Code> = table.iter().map(|(_, c)| *c).collect();
        assert_eq!(codes.len(), 256);
        assert!(is_prefix_free(&codes));
    }

    #[test]
    fn skewed_weights_stay_prefix_free() {
        // Fibonacci weights give the deepest possible tree for their symbol count.
        let mut fib = vec![1_u64, 1];
        while fib.len() < 40 {
            fib.push(fib[fib.len() - 1] + fib[fib.len() - 2]);
        }
        let freqs: Vec<(u8, u64)> = fib.iter().enumerate().map(|(s, &f)| (s as u8, f)).collect();
        let tree = HuffmanTree::from_freqs(&freqs).unwrap();
        assert_eq!(tree.depth(), 39);
        let table = CodeTable::from_tree(&tree);
        let codes: Vec<Code> = table.iter().map(|(_, c)| *c).collect();
        assert!(is_prefix_free(&codes));
    }

    #[test]
    fn prefix_free_detects_overlap() {
        assert!(is_prefix_free(&[Code::new(0, 1), Code::new(0b10, 2), Code::new(0b11, 2)]));
        assert!(!is_prefix_free(&[Code::new(0b1, 1), Code::new(0b0, 1), Code::new(0b10, 2)]));
        assert!(!is_prefix_free(&[Code::new(0b01, 2), Code::new(0b01, 2)]));
        // 0 sorts ahead of 00 and 01.
        assert!(!is_prefix_free(&[Code::new(0b01, 2), Code::new(0b00, 2), Code::new(0, 1)]));
    }
}
