//! Run-length encoding over raw bytes.
//!
//! Each run is written as an eight byte little-endian count followed by the repeated byte. There
//! is no header; the stream ends where the buffer ends.

use log::debug;

use crate::error::CodecError;

/// Width of the count field.
const COUNT_LEN: usize = 8;
/// Bytes per encoded run.
pub const RUN_LEN: usize = COUNT_LEN + 1;

/// Encode runs of identical bytes as (count, byte) pairs. Empty input gives empty output.
pub fn rle_encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    let mut idx = 0;
    while idx < data.len() {
        let byte = data[idx];
        let run = count_run(data, idx);
        out.extend_from_slice(&(run as u64).to_le_bytes());
        out.push(byte);
        idx += run;
    }
    debug!(
        "RLE packed {} bytes into {} runs.",
        data.len(),
        out.len() / RUN_LEN
    );
    out
}

/// Length of the run of identical bytes starting at `start`.
fn count_run(data: &[u8], start: usize) -> usize {
    let compare = data[start];
    data.iter()
        .skip(start)
        .position(|&x| x != compare)
        .unwrap_or(data.len() - start)
}

/// Expand (count, byte) pairs. A partial trailing record, a zero count, or a total that can't
/// be held in memory is malformed.
pub fn rle_decode(data: &[u8]) -> Result<Vec<u8>, CodecError> {
    if data.len() % RUN_LEN != 0 {
        return Err(CodecError::MalformedContainer(format!(
            "{} bytes is not a whole number of {} byte runs",
            data.len(),
            RUN_LEN
        )));
    }

    // Size everything up before touching the allocator.
    let mut runs = Vec::with_capacity(data.len() / RUN_LEN);
    let mut total: usize = 0;
    for (i, record) in data.chunks_exact(RUN_LEN).enumerate() {
        let mut count = [0_u8; COUNT_LEN];
        count.copy_from_slice(&record[..COUNT_LEN]);
        let count = u64::from_le_bytes(count);
        if count == 0 {
            return Err(CodecError::MalformedContainer(format!(
                "run {} has a zero count",
                i
            )));
        }
        total = usize::try_from(count)
            .ok()
            .and_then(|count| total.checked_add(count))
            .filter(|&total| total <= isize::MAX as usize)
            .ok_or_else(|| {
                CodecError::MalformedContainer(format!(
                    "run {} of {} bytes is too long to expand",
                    i, count
                ))
            })?;
        runs.push((count as usize, record[COUNT_LEN]));
    }

    let mut out = Vec::new();
    out.try_reserve_exact(total).map_err(|_| {
        CodecError::MalformedContainer(format!("can't allocate {} bytes for the runs", total))
    })?;
    for (count, byte) in runs {
        out.resize(out.len() + count, byte);
    }
    debug!("RLE expanded {} runs into {} bytes.", data.len() / RUN_LEN, total);
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::{rle_decode, rle_encode, RUN_LEN};
    use crate::error::CodecError;

    fn run(count: u64, byte: u8) -> Vec<u8> {
        let mut v = count.to_le_bytes().to_vec();
        v.push(byte);
        v
    }

    #[test]
    fn encode_test() {
        let encoded = rle_encode(b"aaabccdddd");
        let expected = [run(3, b'a'), run(1, b'b'), run(2, b'c'), run(4, b'd')].concat();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn single_symbol_is_one_run() {
        let encoded = rle_encode(&[0x41; 1000]);
        assert_eq!(encoded, run(1000, 0x41));
        assert_eq!(rle_decode(&encoded).unwrap(), vec![0x41; 1000]);
    }

    #[test]
    fn empty_input() {
        assert!(rle_encode(&[]).is_empty());
        assert!(rle_decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn round_trip() {
        let data = "Hello, world!!! Helloooooo, woooorld!".as_bytes();
        assert_eq!(rle_decode(&rle_encode(data)).unwrap(), data);
    }

    #[test]
    fn adjacent_equal_runs_decode() {
        let encoded = [run(2, b'x'), run(3, b'x')].concat();
        assert_eq!(rle_decode(&encoded).unwrap(), b"xxxxx");
    }

    #[test]
    fn partial_record_is_malformed() {
        let encoded = rle_encode(b"aab");
        assert_eq!(encoded.len(), 2 * RUN_LEN);
        assert!(matches!(
            rle_decode(&encoded[..encoded.len() - 1]),
            Err(CodecError::MalformedContainer(_))
        ));
    }

    #[test]
    fn huge_count_is_malformed() {
        assert!(matches!(
            rle_decode(&run(u64::MAX, b'z')),
            Err(CodecError::MalformedContainer(_))
        ));
    }

    #[test]
    fn counts_that_overflow_together_are_malformed() {
        let half = 1_u64 << 62;
        let encoded = [run(half, b'a'), run(half, b'b')].concat();
        assert!(matches!(
            rle_decode(&encoded),
            Err(CodecError::MalformedContainer(_))
        ));

        let encoded = [run(1, b'a'), run(u64::MAX - 1, b'b')].concat();
        assert!(matches!(
            rle_decode(&encoded),
            Err(CodecError::MalformedContainer(_))
        ));
    }

    #[test]
    fn zero_count_is_malformed() {
        assert!(matches!(
            rle_decode(&run(0, b'q')),
            Err(CodecError::MalformedContainer(_))
        ));
    }
}
