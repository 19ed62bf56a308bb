//! Data codeword builder: byte-mode segment, terminator and padding.

use crate::encoder::bitstream::BitBuffer;
use crate::encoder::error::{EncodeError, EncodeResult};
use crate::encoder::tables::{BYTE_MODE_INDICATOR, byte_capacity, ec_block_info};
use crate::models::{ECLevel, Version};

const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Smallest version in `min..=max` whose byte capacity at `ec_level` holds `len` bytes
pub fn select_version(
    len: usize,
    ec_level: ECLevel,
    min: Version,
    max: Version,
) -> EncodeResult<Version> {
    for version in Version::all().filter(|v| *v >= min && *v <= max) {
        if byte_capacity(version, ec_level)? >= len {
            return Ok(version);
        }
    }
    Err(EncodeError::CapacityExceeded {
        len,
        capacity: byte_capacity(max, ec_level)?,
        ec_level,
    })
}

/// Raise `ec_level` as far as the payload still fits `version`
pub fn boost_ec_level(len: usize, version: Version, mut ec_level: ECLevel) -> EncodeResult<ECLevel> {
    while let Some(next) = ec_level.stronger() {
        if byte_capacity(version, next)? < len {
            break;
        }
        ec_level = next;
    }
    Ok(ec_level)
}

/// Build the data codewords for `data` in byte mode.
///
/// The output length is exactly the data-codeword capacity of `version` at `ec_level`.
pub fn build_data_codewords(
    data: &[u8],
    version: Version,
    ec_level: ECLevel,
) -> EncodeResult<Vec<u8>> {
    let capacity = byte_capacity(version, ec_level)?;
    if data.len() > capacity {
        return Err(EncodeError::CapacityExceeded {
            len: data.len(),
            capacity,
            ec_level,
        });
    }
    let capacity_bits = ec_block_info(version, ec_level)?.data_codewords() * 8;

    let mut bb = BitBuffer::with_capacity(capacity_bits);
    bb.append_bits(BYTE_MODE_INDICATOR, 4);
    bb.append_bits(data.len() as u32, version.char_count_bits());
    bb.append_bytes(data);

    // Terminator, cut short if the symbol is already full
    let terminator = (capacity_bits - bb.len()).min(4);
    bb.append_bits(0, terminator);
    let align = (8 - bb.len() % 8) % 8;
    bb.append_bits(0, align);

    for &pad in PAD_BYTES.iter().cycle() {
        if bb.len() >= capacity_bits {
            break;
        }
        bb.append_bits(pad as u32, 8);
    }
    debug_assert_eq!(bb.len(), capacity_bits);
    Ok(bb.to_bytes())
}
