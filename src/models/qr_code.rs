use std::fmt;
use std::str::FromStr;

use super::{BitMatrix, ModuleGrid};

/// QR Code Model 2 version, limited to the 1-10 range this encoder supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version
    pub const MIN: Version = Version(1);
    /// Largest supported version
    pub const MAX: Version = Version(10);

    /// Create a version, returning `None` outside 1-10
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&number)
            .then_some(Version(number))
    }

    /// Version number (1-10)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        4 * (self.0 as usize) + 17
    }

    /// Width of the byte-mode character count field
    pub fn char_count_bits(&self) -> usize {
        if self.0 <= 9 { 8 } else { 16 }
    }

    /// True when the symbol carries version information blocks
    pub fn has_version_info(&self) -> bool {
        self.0 >= 7
    }

    /// All supported versions in ascending order
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L = 0,
    /// Medium (~15% recovery capacity)
    #[default]
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl ECLevel {
    /// Levels from weakest to strongest
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Row index into the block tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// Two-bit indicator written into the format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Inverse of [`ECLevel::format_bits`]
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => ECLevel::L,
            0b00 => ECLevel::M,
            0b11 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }

    /// Next stronger level, if any
    pub fn stronger(self) -> Option<Self> {
        match self {
            ECLevel::L => Some(ECLevel::M),
            ECLevel::M => Some(ECLevel::Q),
            ECLevel::Q => Some(ECLevel::H),
            ECLevel::H => None,
        }
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ECLevel::L => "L",
            ECLevel::M => "M",
            ECLevel::Q => "Q",
            ECLevel::H => "H",
        };
        f.write_str(name)
    }
}

impl FromStr for ECLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(ECLevel::L),
            "M" | "MEDIUM" => Ok(ECLevel::M),
            "Q" | "QUARTILE" => Ok(ECLevel::Q),
            "H" | "HIGH" => Ok(ECLevel::H),
            other => Err(format!("unknown error correction level '{other}'")),
        }
    }
}

/// Mask pattern (0-7); `i` is the row, `j` the column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Every mask in id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from its 3-bit id
    pub fn from_bits(bits: u8) -> Option<Self> {
        Self::ALL.get(bits as usize).copied()
    }

    /// Mask id (0-7)
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Check if module at row `i`, column `j` is inverted by this mask
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

/// A finished QR symbol. Immutable once returned by the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSymbol {
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
    penalty: u32,
    modules: ModuleGrid,
}

impl QrSymbol {
    pub(crate) fn new(
        version: Version,
        ec_level: ECLevel,
        mask: MaskPattern,
        penalty: u32,
        modules: ModuleGrid,
    ) -> Self {
        Self {
            version,
            ec_level,
            mask,
            penalty,
            modules,
        }
    }

    /// Symbol version
    pub fn version(&self) -> Version {
        self.version
    }

    /// Level actually used, after any boost
    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    /// Mask chosen by the evaluator (or forced by the caller)
    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Total penalty score of the final module layout
    pub fn penalty(&self) -> u32 {
        self.penalty
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// True if the module at column `x`, row `y` is dark
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules.is_dark(x, y)
    }

    /// Full module grid, including function/data distinction
    pub fn modules(&self) -> &ModuleGrid {
        &self.modules
    }

    /// Colors only, packed
    pub fn to_bit_matrix(&self) -> BitMatrix {
        self.modules.to_bit_matrix()
    }
}
