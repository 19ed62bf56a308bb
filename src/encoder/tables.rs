use crate::encoder::error::{EncodeError, EncodeResult};
use crate::models::{ECLevel, Version};

/// Block layout of one version/level pair.
///
/// Short blocks come first; long blocks carry one extra data codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcBlockInfo {
    /// Blocks in both groups together
    pub num_blocks: usize,
    /// EC codewords in every block
    pub ecc_per_block: usize,
    /// Data plus EC codewords in the symbol
    pub total_codewords: usize,
}

impl EcBlockInfo {
    /// Data codewords available to the payload
    pub fn data_codewords(&self) -> usize {
        self.total_codewords - self.num_blocks * self.ecc_per_block
    }

    /// Number of blocks holding the shorter data run
    pub fn num_short_blocks(&self) -> usize {
        self.num_blocks - self.total_codewords % self.num_blocks
    }

    /// Data codewords in a short block
    pub fn short_block_data_len(&self) -> usize {
        self.total_codewords / self.num_blocks - self.ecc_per_block
    }

    /// Data codewords in block `index`
    pub fn block_data_len(&self, index: usize) -> usize {
        let short = self.short_block_data_len();
        if index < self.num_short_blocks() {
            short
        } else {
            short + 1
        }
    }
}

// QR Code Model 2 tables, versions 1-10. Index: [ec_level][version - 1]
const ECC_CODEWORDS_PER_BLOCK: [[u8; 10]; 4] = [
    [7, 10, 15, 20, 26, 18, 20, 24, 30, 18],  // Low
    [10, 16, 26, 18, 24, 16, 18, 22, 22, 26], // Medium
    [13, 22, 18, 26, 18, 24, 18, 22, 20, 24], // Quartile
    [17, 28, 22, 16, 22, 28, 26, 26, 24, 28], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[u8; 10]; 4] = [
    [1, 1, 1, 1, 1, 2, 2, 2, 2, 4], // Low
    [1, 1, 1, 2, 2, 4, 4, 4, 5, 5], // Medium
    [1, 1, 2, 2, 4, 4, 6, 6, 8, 8], // Quartile
    [1, 1, 2, 4, 4, 4, 5, 6, 8, 8], // High
];

// Codewords (data + EC) that fit in the data region. Index: [version - 1]
const TOTAL_CODEWORDS: [u16; 10] = [26, 44, 70, 100, 134, 172, 196, 242, 292, 346];

/// Mode indicator (4 bits) for byte mode
pub const BYTE_MODE_INDICATOR: u32 = 0b0100;

/// Block layout for a version/level pair
pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EncodeResult<EcBlockInfo> {
    let unsupported = || EncodeError::UnsupportedVersionLevelCombination {
        version: version.number(),
        ec_level,
    };
    let v = (version.number() as usize).checked_sub(1).ok_or_else(unsupported)?;
    let idx = ec_level.index();
    let ecc = *ECC_CODEWORDS_PER_BLOCK[idx].get(v).ok_or_else(unsupported)?;
    let blocks = *NUM_ERROR_CORRECTION_BLOCKS[idx].get(v).ok_or_else(unsupported)?;
    let total = *TOTAL_CODEWORDS.get(v).ok_or_else(unsupported)?;
    if ecc == 0 || blocks == 0 {
        return Err(unsupported());
    }
    Ok(EcBlockInfo {
        num_blocks: blocks as usize,
        ecc_per_block: ecc as usize,
        total_codewords: total as usize,
    })
}

/// Largest byte-mode payload that fits the version at the given level
pub fn byte_capacity(version: Version, ec_level: ECLevel) -> EncodeResult<usize> {
    let info = ec_block_info(version, ec_level)?;
    let overhead = 4 + version.char_count_bits();
    Ok((info.data_codewords() * 8 - overhead) / 8)
}
