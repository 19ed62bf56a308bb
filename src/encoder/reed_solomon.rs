//! Reed-Solomon error correction codewords for QR symbols.
//!
//! Arithmetic is over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1 (0x11D).
//! The generator for `n` EC codewords is (x - a^0)(x - a^1)...(x - a^(n-1)).

use crate::encoder::error::{EncodeError, EncodeResult};
use crate::encoder::tables::EcBlockInfo;

/// GF(256) field operations using log/exp tables
pub struct Gf256;

static LOG_TABLE: [u8; 256] = [
    0, 0, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75, 4, 100, 224, 14, 52, 141, 239,
    129, 28, 193, 105, 248, 200, 8, 76, 113, 5, 138, 101, 47, 225, 36, 15, 33, 53, 147, 142, 218,
    240, 18, 130, 69, 29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77, 228, 114, 166, 6,
    191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136, 54, 208, 148, 206, 143,
    150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64, 30, 66, 182, 163, 195, 72, 126, 110, 107, 58,
    40, 84, 250, 133, 186, 61, 202, 94, 155, 159, 10, 21, 121, 43, 78, 212, 229, 172, 115, 243,
    167, 87, 7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222, 237, 49, 197, 254, 24, 227, 165,
    153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32, 137, 46, 55, 63, 209, 91, 149, 188, 207,
    205, 144, 135, 151, 178, 220, 252, 190, 97, 242, 86, 211, 171, 20, 42, 93, 158, 132, 60, 57,
    83, 71, 109, 65, 162, 31, 45, 67, 216, 183, 123, 164, 118, 196, 23, 73, 236, 127, 12, 111, 246,
    108, 161, 59, 82, 41, 157, 85, 170, 251, 96, 134, 177, 187, 204, 62, 90, 203, 89, 95, 176, 156,
    169, 160, 81, 11, 245, 22, 235, 122, 117, 44, 215, 79, 174, 213, 233, 230, 231, 173, 232, 116,
    214, 244, 234, 168, 80, 88, 175,
];

static EXP_TABLE: [u8; 256] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76, 152, 45, 90, 180, 117,
    234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181,
    119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222, 161,
    95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253, 231, 211, 187,
    107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217, 175, 67, 134, 17, 34, 68, 136,
    13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248, 237, 199, 147, 59, 118, 236, 197,
    151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21, 42, 84, 168,
    77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115, 230, 209, 191, 99, 198,
    145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227, 219, 171, 75, 150, 49, 98, 196, 149,
    55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200, 141, 7, 14, 28, 56, 112, 224, 221, 167,
    83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172, 69, 138, 9, 18, 36, 72,
    144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22, 44, 88, 176, 125, 250, 233, 207,
    131, 27, 54, 108, 216, 173, 71, 142, 1,
];

impl Gf256 {
    /// Multiply in GF(256)
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// a^n for the generator element a = 2
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }
}

/// Reed-Solomon encoder for a fixed number of EC codewords
pub struct ReedSolomonEncoder {
    /// Generator coefficients without the leading 1, highest degree first
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Encoder producing `num_ecc_codewords` EC codewords per block
    pub fn new(num_ecc_codewords: usize) -> Self {
        // Coefficients highest degree first, starting from the monic 1
        let mut poly = vec![1u8];
        for i in 0..num_ecc_codewords {
            let root = Gf256::exp(i);
            let mut next = vec![0u8; poly.len() + 1];
            for (j, &coef) in poly.iter().enumerate() {
                next[j] ^= coef;
                next[j + 1] ^= Gf256::mul(coef, root);
            }
            poly = next;
        }
        poly.remove(0);
        Self { generator: poly }
    }

    /// Degree of the generator polynomial
    pub fn num_ecc_codewords(&self) -> usize {
        self.generator.len()
    }

    /// Remainder of data(x) * x^n divided by the generator
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let n = self.generator.len();
        let mut remainder = vec![0u8; n];
        for &byte in data {
            let factor = byte ^ remainder[0];
            remainder.rotate_left(1);
            remainder[n - 1] = 0;
            for (r, &g) in remainder.iter_mut().zip(&self.generator) {
                *r ^= Gf256::mul(g, factor);
            }
        }
        remainder
    }
}

/// Data codewords of one block with their EC codewords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Data codewords of the block
    pub data: Vec<u8>,
    /// EC codewords computed over `data`
    pub ecc: Vec<u8>,
}

/// Split the data codewords into blocks and compute each block's EC codewords.
///
/// `data` must hold exactly `info.data_codewords()` codewords.
pub fn encode_blocks(data: &[u8], info: &EcBlockInfo) -> EncodeResult<Vec<Block>> {
    if data.len() != info.data_codewords() {
        return Err(EncodeError::InvalidInput(format!(
            "expected {} data codewords, got {}",
            info.data_codewords(),
            data.len()
        )));
    }
    let rs = ReedSolomonEncoder::new(info.ecc_per_block);
    let mut blocks = Vec::with_capacity(info.num_blocks);
    let mut offset = 0;
    for index in 0..info.num_blocks {
        let len = info.block_data_len(index);
        let chunk = &data[offset..offset + len];
        offset += len;
        blocks.push(Block {
            data: chunk.to_vec(),
            ecc: rs.encode(chunk),
        });
    }
    tracing::trace!(
        blocks = info.num_blocks,
        ecc_per_block = info.ecc_per_block,
        "computed error correction blocks"
    );
    Ok(blocks)
}

/// Interleave blocks into the final codeword sequence: data codewords
/// round-robin across blocks, then EC codewords round-robin.
pub fn interleave(blocks: &[Block]) -> Vec<u8> {
    let max_data = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    let ecc_len = blocks.first().map_or(0, |b| b.ecc.len());
    let total: usize = blocks.iter().map(|b| b.data.len() + b.ecc.len()).sum();
    let mut out = Vec::with_capacity(total);
    for i in 0..max_data {
        out.extend(blocks.iter().filter_map(|b| b.data.get(i)));
    }
    for i in 0..ecc_len {
        out.extend(blocks.iter().filter_map(|b| b.ecc.get(i)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::ec_block_info;
    use crate::models::{ECLevel, Version};

    #[test]
    fn test_gf_mul() {
        assert_eq!(Gf256::mul(0, 7), 0);
        assert_eq!(Gf256::mul(1, 7), 7);
        assert_eq!(Gf256::mul(2, 128), 29);
        assert_eq!(Gf256::exp(255), 1);
    }

    #[test]
    fn test_generator_degree_7() {
        // x^7 + a^87 x^6 + a^229 x^5 + a^146 x^4 + a^149 x^3 + a^238 x^2 + a^102 x + a^21
        let rs = ReedSolomonEncoder::new(7);
        let expected: Vec<u8> = [87, 229, 146, 149, 238, 102, 21]
            .iter()
            .map(|&e| Gf256::exp(e))
            .collect();
        assert_eq!(rs.generator, expected);
    }

    #[test]
    fn test_hello_world_1q() {
        let data = [32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236];
        let ecc = ReedSolomonEncoder::new(13).encode(&data);
        assert_eq!(
            ecc,
            vec![168, 72, 22, 82, 217, 54, 156, 0, 46, 15, 180, 122, 16]
        );
    }

    #[test]
    fn test_numeric_01234567_1m() {
        let data = [16, 32, 12, 86, 97, 128, 236, 17, 236, 17, 236, 17, 236, 17, 236, 17];
        let ecc = ReedSolomonEncoder::new(10).encode(&data);
        assert_eq!(ecc, vec![165, 36, 212, 193, 237, 54, 199, 135, 44, 85]);
    }

    #[test]
    fn test_interleave_mixed_blocks() {
        let info = ec_block_info(Version::new(5).unwrap(), ECLevel::Q).unwrap();
        let data: Vec<u8> = (0..info.data_codewords() as u8).collect();
        let blocks = encode_blocks(&data, &info).unwrap();
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].data.len(), 15);
        assert_eq!(blocks[2].data.len(), 16);

        let out = interleave(&blocks);
        assert_eq!(out.len(), info.total_codewords);
        // First column of each block, then the second
        assert_eq!(&out[..5], &[0, 15, 30, 46, 1]);
        // Last data codewords come only from the long blocks
        assert_eq!(&out[60..62], &[45, 61]);
        assert_eq!(out[62], blocks[0].ecc[0]);
    }

    #[test]
    fn test_encode_blocks_rejects_wrong_length() {
        let info = ec_block_info(Version::MIN, ECLevel::M).unwrap();
        assert!(encode_blocks(&[0u8; 3], &info).is_err());
    }
}
