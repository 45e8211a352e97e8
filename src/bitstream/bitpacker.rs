use log::error;

/// Number of bytes needed to hold `bits` bits.
pub fn bytes_for_bits(bits: usize) -> usize {
    bits / 8 + usize::from(bits % 8 != 0)
}

/// Packs a bitstream MSB-first into bytes, counting every bit it is given.
pub struct BitPacker {
    pub output: Vec<u8>,
    queue: u64,
    q_bits: u8,
    bit_count: usize,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of the capacity specified. Call flush()
    /// (or finish()) to push the partial byte left in the queue to the buffer.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Internal bitstream write function common to all out_XX functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Writes the `depth` (0-32) least significant bits of `data`.
    pub fn out_bits(&mut self, data: u32, depth: u8) {
        if depth == 0 {
            return;
        }
        debug_assert!(depth <= 32);
        self.queue <<= depth; //shift queue by bit length
        self.queue |= data as u64 & ((1_u64 << depth) - 1); //add data portion to queue
        self.q_bits += depth; //update depth of queue bits
        self.bit_count += depth as usize;
        self.write_stream();
    }

    /// Writes the `depth` (0-128) least significant bits of `data`, 32 bits at a time.
    pub fn out_wide(&mut self, data: u128, depth: u8) {
        let mut left = depth;
        while left > 0 {
            let take = left.min(32);
            self.out_bits((data >> (left - take)) as u32, take);
            left -= take;
        }
    }

    /// Number of bits written so far, padding excluded.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits. The bit count is not changed by the padding.
    pub fn flush(&mut self) {
        if self.q_bits > 0 {
            self.queue <<= 8 - self.q_bits; //pad the queue with zeros
            self.q_bits += 8 - self.q_bits;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Flush and hand back the packed bytes. Read bit_count() first if the exact length matters.
    pub fn finish(mut self) -> Vec<u8> {
        self.flush();
        self.output
    }
}
