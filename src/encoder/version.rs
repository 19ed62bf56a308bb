/// Version information for versions 7 and up: 6 data bits + 12 BCH bits
use crate::models::{ModuleGrid, Version};

/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const GENERATOR: u32 = 0x1F25;

/// BCH(18,6) version field for versions 7-10
pub struct VersionInfo;

impl VersionInfo {
    /// 18-bit version codeword, `None` below version 7
    pub fn bits(version: Version) -> Option<u32> {
        if !version.has_version_info() {
            return None;
        }
        let data = version.number() as u32;
        let mut rem = data;
        for _ in 0..12 {
            rem = (rem << 1) ^ ((rem >> 11) * GENERATOR);
        }
        Some((data << 12) | rem)
    }

    /// Write the 6x3 block below the top-right finder and its transpose
    /// beside the bottom-left finder.
    pub fn write(grid: &mut ModuleGrid, version: Version) {
        let Some(bits) = Self::bits(version) else {
            return;
        };
        let size = grid.size();
        for i in 0..18 {
            let dark = (bits >> i) & 1 == 1;
            let a = size - 11 + i % 3;
            let b = i / 3;
            grid.set_function(a, b, dark);
            grid.set_function(b, a, dark);
        }
    }

    /// Read the top-right copy back
    pub fn read(grid: &ModuleGrid) -> u32 {
        let size = grid.size();
        (0..18).fold(0u32, |acc, i| {
            acc | ((grid.is_dark(size - 11 + i % 3, i / 3) as u32) << i)
        })
    }

    /// Nearest valid version within 3 bit errors
    pub fn decode(bits: u32) -> Option<Version> {
        (7..=40u8)
            .map(|n| {
                let data = n as u32;
                let mut rem = data;
                for _ in 0..12 {
                    rem = (rem << 1) ^ ((rem >> 11) * GENERATOR);
                }
                (n, ((data << 12) | rem) ^ bits)
            })
            .filter(|(_, diff)| diff.count_ones() <= 3)
            .min_by_key(|(_, diff)| diff.count_ones())
            .and_then(|(n, _)| Version::new(n))
    }
}
