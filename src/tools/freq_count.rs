/// Returns a frequency count of every byte value in the input.
pub fn freqs(data: &[u8]) -> [u64; 256] {
    let mut freqs = [0_u64; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

/// The (symbol, count) pairs with a non-zero count, in ascending symbol order.
pub fn present_symbols(freqs: &[u64; 256]) -> Vec<(u8, u64)> {
    freqs
        .iter()
        .enumerate()
        .filter(|(_, &f)| f > 0)
        .map(|(sym, &f)| (sym as u8, f))
        .collect()
}

#[cfg(test)]
mod test {
    use super::{freqs, present_symbols};

    #[test]
    fn freqs_test() {
        let f = freqs(b"Making a silly test.");
        assert_eq!(f[b'a' as usize], 2);
        assert_eq!(f[b'l' as usize], 2);
        assert_eq!(f[b' ' as usize], 3);
        assert_eq!(f[b'z' as usize], 0);
        assert_eq!(f.iter().sum::<u64>(), 20);
    }

    #[test]
    fn present_symbols_are_sorted() {
        let present = present_symbols(&freqs(b"CBACBA A"));
        assert_eq!(present, vec![(b' ', 1), (b'A', 3), (b'B', 2), (b'C', 2)]);
        assert!(present_symbols(&freqs(&[])).is_empty());
    }
}
