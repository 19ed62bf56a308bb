/// Format information: EC level + mask id protected by BCH(15,5)
use crate::models::{ECLevel, MaskPattern, ModuleGrid};

/// BCH(15,5) generator polynomial: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const GENERATOR: u32 = 0x537;
/// XOR mask applied so the format field is never all light
const FORMAT_MASK: u16 = 0b101010000010010;

/// Format info is 15 bits (5 data + 10 ECC)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    /// Level carried by the field
    pub ec_level: ECLevel,
    /// Mask carried by the field
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Pair a level with a mask
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// The masked 15-bit codeword written into the symbol
    pub fn bits(&self) -> u16 {
        let data = ((self.ec_level.format_bits() as u32) << 3) | self.mask_pattern.id() as u32;
        let mut rem = data;
        for _ in 0..10 {
            rem = (rem << 1) ^ ((rem >> 9) * GENERATOR);
        }
        (((data << 10) | rem) as u16) ^ FORMAT_MASK
    }

    /// Decode a masked 15-bit field, correcting up to 3 bit errors
    pub fn decode(bits: u16) -> Option<Self> {
        let mut best: Option<(u32, FormatInfo)> = None;
        for ec_level in ECLevel::ALL {
            for mask_pattern in MaskPattern::ALL {
                let candidate = FormatInfo::new(ec_level, mask_pattern);
                let distance = (candidate.bits() ^ bits).count_ones();
                if best.is_none_or(|(d, _)| distance < d) {
                    best = Some((distance, candidate));
                }
            }
        }
        best.filter(|(d, _)| *d <= 3).map(|(_, info)| info)
    }

    /// Write both copies of the field as function modules, plus the dark module.
    ///
    /// Bit 0 is the least significant bit of [`FormatInfo::bits`].
    pub fn write(&self, grid: &mut ModuleGrid) {
        write_format_bits(grid, self.bits());
    }

    /// Read the copy around the top-left finder
    pub fn read(grid: &ModuleGrid) -> u16 {
        let bit = |x: usize, y: usize, i: usize| (grid.is_dark(x, y) as u16) << i;
        let mut bits = 0u16;
        for i in 0..6 {
            bits |= bit(8, i, i);
        }
        bits |= bit(8, 7, 6) | bit(8, 8, 7) | bit(7, 8, 8);
        for i in 9..15 {
            bits |= bit(14 - i, 8, i);
        }
        bits
    }
}

pub(crate) fn write_format_bits(grid: &mut ModuleGrid, bits: u16) {
    let size = grid.size();
    let bit = |i: usize| (bits >> i) & 1 == 1;

    // First copy, around the top-left finder
    for i in 0..6 {
        grid.set_function(8, i, bit(i));
    }
    grid.set_function(8, 7, bit(6));
    grid.set_function(8, 8, bit(7));
    grid.set_function(7, 8, bit(8));
    for i in 9..15 {
        grid.set_function(14 - i, 8, bit(i));
    }

    // Second copy, split between the top-right and bottom-left finders
    for i in 0..8 {
        grid.set_function(size - 1 - i, 8, bit(i));
    }
    for i in 8..15 {
        grid.set_function(8, size - 15 + i, bit(i));
    }
    grid.set_function(8, size - 8, true);
}
