use crate::encoder::format::write_format_bits;
use crate::encoder::version::VersionInfo;
use crate::models::{ModuleGrid, Version};

/// Draw every function pattern of `version` into a fresh grid.
///
/// Format cells are reserved with placeholder bits; the mask evaluator
/// overwrites them once the mask is known. Version blocks are final.
pub fn draw_function_patterns(grid: &mut ModuleGrid, version: Version) {
    let size = grid.size();

    // Timing patterns (row 6 and column 6); finders overwrite the ends
    for i in 0..size {
        grid.set_function(6, i, i % 2 == 0);
        grid.set_function(i, 6, i % 2 == 0);
    }

    // Finder patterns with their separators, clipped to bounds
    draw_finder(grid, 3, 3);
    draw_finder(grid, size - 4, 3);
    draw_finder(grid, 3, size - 4);

    let align = alignment_pattern_positions(version);
    let last = align.len().saturating_sub(1);
    for (i, &cx) in align.iter().enumerate() {
        for (j, &cy) in align.iter().enumerate() {
            // Skip the three finder corners
            if (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0) {
                continue;
            }
            draw_alignment(grid, cx, cy);
        }
    }

    write_format_bits(grid, 0);
    VersionInfo::write(grid, version);
}

fn draw_finder(grid: &mut ModuleGrid, cx: usize, cy: usize) {
    let size = grid.size() as isize;
    for dy in -4isize..=4 {
        for dx in -4isize..=4 {
            let x = cx as isize + dx;
            let y = cy as isize + dy;
            if x < 0 || y < 0 || x >= size || y >= size {
                continue;
            }
            let ring = dx.abs().max(dy.abs());
            grid.set_function(x as usize, y as usize, ring != 2 && ring != 4);
        }
    }
}

fn draw_alignment(grid: &mut ModuleGrid, cx: usize, cy: usize) {
    for dy in 0..5usize {
        for dx in 0..5usize {
            let ring = dx.abs_diff(2).max(dy.abs_diff(2));
            grid.set_function(cx + dx - 2, cy + dy - 2, ring != 1);
        }
    }
}

/// Alignment pattern centers for a given version.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let step = (v * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2;

    let mut positions = vec![0usize; num_align];
    positions[0] = 6;
    let mut pos = version.size() - 7;
    for slot in positions.iter_mut().skip(1).rev() {
        *slot = pos;
        pos -= step;
    }
    positions
}
