/// Append-only bit buffer, most significant bit first
#[derive(Debug, Clone, Default)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Empty buffer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    /// Number of bits written
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when nothing has been written
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Append the low `count` bits of `value`, high bit first
    pub fn append_bits(&mut self, value: u32, count: usize) {
        debug_assert!(count <= 31 && value >> count == 0);
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
    }

    /// Append whole bytes, eight bits each
    pub fn append_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.append_bits(b as u32, 8);
        }
    }

    /// Pack into bytes; a trailing partial byte is zero-filled
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| acc | ((bit as u8) << (7 - i)))
            })
            .collect()
    }
}

/// Iterate the bits of a codeword sequence, MSB first per codeword
pub fn codeword_bits(codewords: &[u8]) -> impl Iterator<Item = bool> + '_ {
    codewords
        .iter()
        .flat_map(|&cw| (0..8).rev().map(move |i| (cw >> i) & 1 == 1))
}
