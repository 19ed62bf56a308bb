/// Codeword placement into the data region following the zigzag pattern
use crate::encoder::bitstream::codeword_bits;
use crate::models::{Module, ModuleGrid};

/// Place `codewords` MSB-first into every non-function cell.
///
/// Column pairs are walked right to left, skipping the vertical timing
/// column, alternating upward and downward. Cells left over after the last
/// codeword are remainder bits and stay light. Returns the number of bits
/// placed from `codewords`.
pub fn place_codewords(grid: &mut ModuleGrid, codewords: &[u8]) -> usize {
    let size = grid.size();
    let mut bits = codeword_bits(codewords);
    let mut placed = 0;

    let mut right = size as isize - 1;
    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        let upward = ((right + 1) & 2) == 0;
        for vert in 0..size {
            let y = if upward { size - 1 - vert } else { vert };
            for j in 0..2 {
                let x = (right - j) as usize;
                if grid.is_function(x, y) {
                    continue;
                }
                let dark = match bits.next() {
                    Some(bit) => {
                        placed += 1;
                        bit
                    }
                    None => false,
                };
                grid.set(x, y, Module::data(dark));
            }
        }
        right -= 2;
    }
    placed
}
